use serde::{Deserialize, Serialize};

use crate::models::domain::{Intervention, Irrigation, PillarScores, PillarWeights, Volunteer};

/// Selected volunteer for a help request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub volunteer: Volunteer,
    /// Straight-line distance to the requester in raw coordinate degrees
    pub distance_deg: f64,
    /// Pool size before filtering
    pub total_candidates: usize,
}

/// Improvement suggestion attached to a low-scoring pillar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub impact: String,
    /// Rough cost tier, rendered as rupee signs
    pub cost: String,
    /// Expected overall score lift
    pub lift: String,
}

/// Achievement earned by a scorecard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "💧 Water Saver")]
    WaterSaver,
    #[serde(rename = "🌱 Soil Steward")]
    SoilSteward,
    #[serde(rename = "🌍 Climate Conscious")]
    ClimateConscious,
    #[serde(rename = "✅ Eco Champion")]
    EcoChampion,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::WaterSaver => "💧 Water Saver",
            Badge::SoilSteward => "🌱 Soil Steward",
            Badge::ClimateConscious => "🌍 Climate Conscious",
            Badge::EcoChampion => "✅ Eco Champion",
        }
    }
}

/// Farm context echoed back on the scorecard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorecardContext {
    pub crop: String,
    pub irrigation: Irrigation,
    pub state: String,
}

/// Re-scored practices after applying what-if interventions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub interventions: Vec<Intervention>,
    pub subscores: PillarScores,
    pub score: u8,
}

/// Complete sustainability evaluation artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scorecard {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub context: ScorecardContext,
    pub weights: PillarWeights,
    pub subscores: PillarScores,
    pub score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulation: Option<SimulationResult>,
    pub recommendations: Vec<Recommendation>,
    pub badges: Vec<Badge>,
}

impl Scorecard {
    /// Scorecard as pretty-printed JSON, the shareable export format
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
