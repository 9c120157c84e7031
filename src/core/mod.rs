// Core algorithm exports
pub mod distance;
pub mod districts;
pub mod filters;
pub mod matcher;
pub mod recommend;
pub mod scorer;
pub mod simulate;
pub mod subscores;
pub mod weights;

pub use distance::euclidean_deg;
pub use districts::{locate, Locality};
pub use filters::{online, prefer_district, prefer_language};
pub use matcher::{find_best_volunteer, MatchError, VolunteerMatcher};
pub use recommend::{badges, recommendations};
pub use scorer::SustainabilityScorer;
pub use simulate::apply as apply_interventions;
pub use subscores::compute_subscores;
pub use weights::{dynamic_weights, overall_score, ScoreError, WEIGHT_SUM_TOLERANCE};
