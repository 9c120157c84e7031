use crate::models::Volunteer;

/// Keep only volunteers currently marked Online
///
/// This is the one hard filter in the cascade: an empty result here means
/// no match at all.
#[inline]
pub fn online(candidates: &[Volunteer]) -> Vec<&Volunteer> {
    candidates
        .iter()
        .filter(|v| v.availability.is_online())
        .collect()
}

/// Narrow to volunteers in the given district, unless none are there
///
/// Soft filter: when no volunteer shares the district the pool passes
/// through unchanged rather than emptying.
#[inline]
pub fn prefer_district<'a>(candidates: Vec<&'a Volunteer>, district: &str) -> Vec<&'a Volunteer> {
    let narrowed: Vec<&Volunteer> = candidates
        .iter()
        .copied()
        .filter(|v| v.district == district)
        .collect();
    if narrowed.is_empty() {
        candidates
    } else {
        narrowed
    }
}

/// Narrow to volunteers speaking the given language, unless none do
///
/// Same soft-filter behavior as district narrowing.
#[inline]
pub fn prefer_language<'a>(candidates: Vec<&'a Volunteer>, language: &str) -> Vec<&'a Volunteer> {
    let narrowed: Vec<&Volunteer> = candidates
        .iter()
        .copied()
        .filter(|v| v.speaks(language))
        .collect();
    if narrowed.is_empty() {
        candidates
    } else {
        narrowed
    }
}
