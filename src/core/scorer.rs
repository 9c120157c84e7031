use validator::Validate;

use crate::config::ScoringSettings;
use crate::core::recommend::{self, DEFAULT_MAX_ITEMS, DEFAULT_THRESHOLD};
use crate::core::simulate;
use crate::core::subscores::compute_subscores;
use crate::core::weights::{dynamic_weights, overall_score, ScoreError};
use crate::models::{
    FarmPractices, Irrigation, PillarScores, PillarWeights, Scorecard, ScorecardContext,
    ScorecardRequest, SimulationResult,
};

/// Sustainability evaluation orchestrator
///
/// Holds the base pillar weights and recommendation settings; every
/// evaluation derives its final weights from the farm context.
#[derive(Debug, Clone)]
pub struct SustainabilityScorer {
    base_weights: PillarWeights,
    recommendation_threshold: u8,
    max_recommendations: usize,
}

impl SustainabilityScorer {
    pub fn new(base_weights: PillarWeights) -> Self {
        Self {
            base_weights,
            recommendation_threshold: DEFAULT_THRESHOLD,
            max_recommendations: DEFAULT_MAX_ITEMS,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(PillarWeights::default())
    }

    pub fn from_settings(settings: &ScoringSettings) -> Self {
        Self {
            base_weights: settings.weights.to_pillar_weights(),
            recommendation_threshold: settings.recommendation_threshold,
            max_recommendations: settings.max_recommendations,
        }
    }

    /// Pillar sub-scores for a validated practice record
    pub fn subscores(&self, practices: &FarmPractices) -> Result<PillarScores, ScoreError> {
        practices.validate()?;
        Ok(compute_subscores(practices))
    }

    /// Context-adjusted pillar weights
    pub fn weights(
        &self,
        crop: &str,
        irrigation: Irrigation,
        state: &str,
    ) -> Result<PillarWeights, ScoreError> {
        dynamic_weights(&self.base_weights, crop, irrigation, state)
    }

    /// Full evaluation: sub-scores, weights, overall score,
    /// recommendations, badges, and the optional what-if simulation
    pub fn evaluate(&self, request: &ScorecardRequest) -> Result<Scorecard, ScoreError> {
        request.validate()?;
        request.practices.validate()?;

        let subscores = compute_subscores(&request.practices);
        let weights = dynamic_weights(
            &self.base_weights,
            &request.crop,
            request.practices.irrigation,
            &request.state,
        )?;
        let score = overall_score(&subscores, &weights)?;

        let recommendations = recommend::recommendations(
            &subscores,
            self.recommendation_threshold,
            self.max_recommendations,
        );
        let badges = recommend::badges(score, &subscores);

        // Simulated runs keep the baseline weights; only the practices change
        let simulation = if request.interventions.is_empty() {
            None
        } else {
            let adjusted = simulate::apply(&request.practices, &request.interventions);
            let sim_subscores = compute_subscores(&adjusted);
            let sim_score = overall_score(&sim_subscores, &weights)?;
            Some(SimulationResult {
                interventions: request.interventions.clone(),
                subscores: sim_subscores,
                score: sim_score,
            })
        };

        tracing::debug!(
            "Scored {} farm in {}: {}/100 with {} recommendations",
            request.crop,
            request.state,
            score,
            recommendations.len()
        );

        Ok(Scorecard {
            generated_at: chrono::Utc::now(),
            context: ScorecardContext {
                crop: request.crop.clone(),
                irrigation: request.practices.irrigation,
                state: request.state.clone(),
            },
            weights,
            subscores,
            score,
            simulation,
            recommendations,
            badges,
        })
    }
}

impl Default for SustainabilityScorer {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
