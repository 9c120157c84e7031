use thiserror::Error;
use validator::Validate;

use crate::core::distance::euclidean_deg;
use crate::core::filters::{online, prefer_district, prefer_language};
use crate::models::{MatchOutcome, MatchRequest, Volunteer};
use crate::services::directory::{DirectoryError, VolunteerDirectory};

/// Errors raised while matching a help request to a volunteer
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("no online volunteer available for this request")]
    NoVolunteerAvailable,

    #[error("invalid match request: {0}")]
    InvalidRequest(#[from] validator::ValidationErrors),

    #[error("volunteer directory error: {0}")]
    Directory(#[from] DirectoryError),
}

/// Pick the best volunteer for a help request
///
/// # Priority cascade
/// 1. Online volunteers only; none online means no match.
/// 2. Prefer the requester's district when at least one volunteer is there.
/// 3. Prefer volunteers speaking the requester's language, same fallback.
/// 4. Nearest by raw-degree Euclidean distance; exact ties keep the
///    earliest candidate in input order.
pub fn find_best_volunteer<'a>(
    request: &MatchRequest,
    candidates: &'a [Volunteer],
) -> Option<&'a Volunteer> {
    let pool = online(candidates);
    if pool.is_empty() {
        return None;
    }

    let pool = prefer_district(pool, &request.district);
    let pool = prefer_language(pool, &request.language);

    let mut best: Option<(&Volunteer, f64)> = None;
    for volunteer in pool {
        let d = euclidean_deg(
            request.latitude,
            request.longitude,
            volunteer.latitude,
            volunteer.longitude,
        );
        // Strict comparison so equally distant volunteers keep input order
        let closer = match best {
            Some((_, best_d)) => d < best_d,
            None => true,
        };
        if closer {
            best = Some((volunteer, d));
        }
    }

    best.map(|(volunteer, _)| volunteer)
}

/// Matching orchestrator over an injected volunteer directory
pub struct VolunteerMatcher {
    directory: VolunteerDirectory,
}

impl VolunteerMatcher {
    pub fn new(directory: VolunteerDirectory) -> Self {
        Self { directory }
    }

    /// Validate the request, gather volunteers from every source, and run
    /// the priority cascade
    ///
    /// Source order is preserved when pooling volunteers, so distance ties
    /// resolve the same way regardless of how storage is split across
    /// sources.
    pub fn find_match(&self, request: &MatchRequest) -> Result<MatchOutcome, MatchError> {
        request.validate()?;

        let volunteers = self.directory.collect_all()?;
        tracing::debug!(
            "Matching help request in district {} against {} volunteers",
            request.district,
            volunteers.len()
        );

        let best =
            find_best_volunteer(request, &volunteers).ok_or(MatchError::NoVolunteerAvailable)?;
        let distance_deg = euclidean_deg(
            request.latitude,
            request.longitude,
            best.latitude,
            best.longitude,
        );

        tracing::debug!(
            "Matched volunteer {} at {:.4} degrees",
            best.name,
            distance_deg
        );

        Ok(MatchOutcome {
            volunteer: best.clone(),
            distance_deg,
            total_candidates: volunteers.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;

    fn create_volunteer(
        name: &str,
        district: &str,
        languages: &[&str],
        availability: Availability,
        lat: f64,
        lon: f64,
    ) -> Volunteer {
        Volunteer {
            name: name.to_string(),
            district: district.to_string(),
            languages: languages.iter().map(|l| l.to_string()).collect(),
            phone: String::new(),
            availability,
            latitude: lat,
            longitude: lon,
        }
    }

    fn create_request(district: &str, language: &str) -> MatchRequest {
        MatchRequest {
            latitude: 17.39,
            longitude: 78.49,
            district: district.to_string(),
            language: language.to_string(),
        }
    }

    #[test]
    fn test_empty_pool_gives_no_match() {
        let request = create_request("Hyderabad", "Telugu");
        assert!(find_best_volunteer(&request, &[]).is_none());
    }

    #[test]
    fn test_all_offline_gives_no_match() {
        let request = create_request("Hyderabad", "Telugu");
        let volunteers = vec![
            create_volunteer("a", "Hyderabad", &["Telugu"], Availability::Offline, 17.39, 78.49),
            create_volunteer("b", "Hyderabad", &["Telugu"], Availability::Offline, 17.38, 78.48),
        ];

        assert!(find_best_volunteer(&request, &volunteers).is_none());
    }

    #[test]
    fn test_district_and_language_win_over_distance() {
        let request = create_request("Hyderabad", "Telugu");
        let volunteers = vec![
            // Same coordinates as the request but the wrong district
            create_volunteer("near", "Mumbai", &["Hindi"], Availability::Online, 17.39, 78.49),
            create_volunteer("far", "Hyderabad", &["Telugu"], Availability::Online, 17.20, 78.30),
        ];

        let best = find_best_volunteer(&request, &volunteers).unwrap();
        assert_eq!(best.name, "far");
    }

    #[test]
    fn test_language_narrowing_within_district() {
        let request = create_request("Hyderabad", "Telugu");
        let volunteers = vec![
            create_volunteer("hindi", "Hyderabad", &["Hindi"], Availability::Online, 17.39, 78.49),
            create_volunteer("telugu", "Hyderabad", &["Telugu"], Availability::Online, 17.20, 78.30),
        ];

        let best = find_best_volunteer(&request, &volunteers).unwrap();
        assert_eq!(best.name, "telugu");
    }

    #[test]
    fn test_no_language_overlap_falls_back_to_nearest() {
        let request = create_request("Hyderabad", "Tamil");
        let volunteers = vec![
            create_volunteer("near", "Hyderabad", &["Telugu"], Availability::Online, 17.39, 78.49),
            create_volunteer("far", "Hyderabad", &["Hindi"], Availability::Online, 17.20, 78.30),
        ];

        let best = find_best_volunteer(&request, &volunteers).unwrap();
        assert_eq!(best.name, "near");
    }

    #[test]
    fn test_exact_distance_tie_keeps_first() {
        let request = MatchRequest {
            latitude: 17.5,
            longitude: 78.5,
            district: "Hyderabad".to_string(),
            language: "Telugu".to_string(),
        };
        // Mirror offsets of 0.25 degrees, exactly representable, so both
        // distances are bit-identical
        let volunteers = vec![
            create_volunteer("first", "Hyderabad", &["Telugu"], Availability::Online, 17.75, 78.5),
            create_volunteer("second", "Hyderabad", &["Telugu"], Availability::Online, 17.25, 78.5),
        ];

        let best = find_best_volunteer(&request, &volunteers).unwrap();
        assert_eq!(best.name, "first");
    }

    #[test]
    fn test_unknown_district_degrades_to_citywide() {
        let request = create_request("Unknown", "Telugu");
        let volunteers = vec![
            create_volunteer("a", "Hyderabad", &["Telugu"], Availability::Online, 17.39, 78.49),
            create_volunteer("b", "Mumbai", &["Telugu"], Availability::Online, 19.07, 72.87),
        ];

        let best = find_best_volunteer(&request, &volunteers).unwrap();
        assert_eq!(best.name, "a");
    }
}
