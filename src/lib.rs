//! EcoFarmX Core - matching and scoring engine for the EcoFarmX farmer-support platform
//!
//! This library provides the two computation components behind the app:
//! volunteer matching for SOS help requests (priority cascade over
//! availability, district, language, and distance) and farm sustainability
//! scoring (seven weighted pillar sub-scores with recommendations, badges,
//! and a what-if simulator). Both are pure and synchronous; persistence
//! and presentation live in the consuming application.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    compute_subscores, dynamic_weights, euclidean_deg, find_best_volunteer, locate, overall_score,
    MatchError, ScoreError, SustainabilityScorer, VolunteerMatcher,
};
pub use crate::models::{
    Availability, Badge, FarmPractices, Intervention, Irrigation, MatchOutcome, MatchRequest,
    Pillar, PillarScores, PillarWeights, Recommendation, Scorecard, ScorecardRequest, Volunteer,
};
pub use crate::services::{DirectoryError, InMemoryVolunteers, VolunteerDirectory, VolunteerSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let locality = locate(17.3850, 78.4867);
        assert_eq!(locality.district, "Hyderabad");
    }
}
