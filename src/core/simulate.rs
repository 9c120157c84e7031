use crate::models::{FarmPractices, Intervention, Irrigation};

/// Apply what-if interventions to a copy of the practice record
///
/// The urea reduction takes 75% of the baseline usage and truncates toward
/// zero, matching the whole-kilogram steps of the questionnaire slider.
/// Interventions are idempotent; duplicates have no extra effect.
pub fn apply(practices: &FarmPractices, interventions: &[Intervention]) -> FarmPractices {
    let mut adjusted = practices.clone();

    for intervention in interventions {
        match intervention {
            Intervention::SwitchToDrip => adjusted.irrigation = Irrigation::Drip,
            Intervention::AddMulching => adjusted.mulching = true,
            Intervention::ReduceUrea => {
                adjusted.urea_kg_per_acre = (practices.urea_kg_per_acre * 0.75).trunc()
            }
        }
    }

    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::subscores::compute_subscores;

    #[test]
    fn test_no_interventions_is_identity() {
        let practices = FarmPractices::default();
        assert_eq!(apply(&practices, &[]), practices);
    }

    #[test]
    fn test_switch_to_drip() {
        let practices = FarmPractices::default();
        let adjusted = apply(&practices, &[Intervention::SwitchToDrip]);
        assert_eq!(adjusted.irrigation, Irrigation::Drip);
        // Everything else untouched
        assert_eq!(adjusted.urea_kg_per_acre, practices.urea_kg_per_acre);
    }

    #[test]
    fn test_reduce_urea_truncates() {
        let practices = FarmPractices {
            urea_kg_per_acre: 50.0,
            ..FarmPractices::default()
        };
        let adjusted = apply(&practices, &[Intervention::ReduceUrea]);
        // 50 * 0.75 = 37.5 truncates to 37
        assert_eq!(adjusted.urea_kg_per_acre, 37.0);
    }

    #[test]
    fn test_duplicate_reduce_urea_applies_once() {
        let practices = FarmPractices {
            urea_kg_per_acre: 80.0,
            ..FarmPractices::default()
        };
        let adjusted = apply(
            &practices,
            &[Intervention::ReduceUrea, Intervention::ReduceUrea],
        );
        assert_eq!(adjusted.urea_kg_per_acre, 60.0);
    }

    #[test]
    fn test_combined_interventions_raise_subscores() {
        let practices = FarmPractices::default();
        let adjusted = apply(
            &practices,
            &[
                Intervention::SwitchToDrip,
                Intervention::AddMulching,
                Intervention::ReduceUrea,
            ],
        );

        let before = compute_subscores(&practices);
        let after = compute_subscores(&adjusted);
        assert!(after.water_stewardship > before.water_stewardship);
        assert!(after.soil_health > before.soil_health);
        assert!(after.nutrient_efficiency >= before.nutrient_efficiency);
    }
}
