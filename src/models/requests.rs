use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::districts::locate;
use crate::models::domain::{FarmPractices, Intervention};

/// Help request from a farmer looking for a volunteer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(length(min = 1))]
    pub district: String,
    #[validate(length(min = 1))]
    pub language: String,
}

impl MatchRequest {
    /// Build a request by inferring the district from the coordinates
    ///
    /// Coordinates outside the known zones resolve to the "Unknown"
    /// district, which matches no volunteer and so turns the district
    /// preference into a no-op.
    pub fn from_coordinates(latitude: f64, longitude: f64, language: impl Into<String>) -> Self {
        let locality = locate(latitude, longitude);
        Self {
            latitude,
            longitude,
            district: locality.district,
            language: language.into(),
        }
    }
}

/// Request for a full sustainability evaluation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScorecardRequest {
    #[validate(length(min = 1))]
    pub crop: String,
    #[validate(length(min = 1))]
    pub state: String,
    pub practices: FarmPractices,
    /// What-if actions to simulate alongside the baseline evaluation
    #[serde(default)]
    pub interventions: Vec<Intervention>,
}
