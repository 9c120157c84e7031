// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Availability, FarmPractices, Intervention, Irrigation, Pillar, PillarScores, PillarWeights, Volunteer};
pub use requests::{MatchRequest, ScorecardRequest};
pub use responses::{Badge, MatchOutcome, Recommendation, Scorecard, ScorecardContext, SimulationResult};
