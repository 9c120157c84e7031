use thiserror::Error;

use crate::models::{Irrigation, Pillar, PillarScores, PillarWeights};

/// Tolerance when checking that a weight set sums to 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Errors raised while scoring farm practices
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("invalid farm input: {0}")]
    InvalidInput(#[from] validator::ValidationErrors),

    #[error("adjusted weight total {total} is not positive, cannot renormalize")]
    NonPositiveWeightTotal { total: f64 },

    #[error("pillar weights sum to {sum}, expected 1.0")]
    UnnormalizedWeights { sum: f64 },
}

/// Derive pillar weights for a farm's context
///
/// Starts from the base weights and applies additive adjustments for
/// pressurized irrigation, paddy crops, and arid states, then renormalizes
/// so the weights sum to 1.0. The adjustments are cumulative and
/// order-independent.
///
/// A single pillar weight can come out negative: rice + drip + an arid
/// state pushes Waste Management to -0.02 before renormalization. The
/// renormalized set still sums to 1.0, so downstream scoring accepts it.
pub fn dynamic_weights(
    base: &PillarWeights,
    crop: &str,
    irrigation: Irrigation,
    state: &str,
) -> Result<PillarWeights, ScoreError> {
    let mut weights = *base;

    if irrigation.is_pressurized() {
        weights.water_stewardship += 0.04;
        weights.emissions -= 0.02;
        weights.waste_management -= 0.02;
    }
    if is_paddy_crop(crop) {
        weights.water_stewardship += 0.05;
        weights.emissions += 0.04;
        weights.biodiversity -= 0.03;
        weights.waste_management -= 0.06;
    }
    if is_arid_state(state) {
        weights.water_stewardship += 0.04;
        weights.soil_health += 0.02;
        weights.emissions -= 0.02;
        weights.waste_management -= 0.04;
    }

    let total = weights.sum();
    if total <= 0.0 {
        return Err(ScoreError::NonPositiveWeightTotal { total });
    }

    weights.soil_health /= total;
    weights.water_stewardship /= total;
    weights.nutrient_efficiency /= total;
    weights.biodiversity /= total;
    weights.emissions /= total;
    weights.waste_management /= total;
    weights.social /= total;

    Ok(weights)
}

/// Water-hungry paddy cultivation shifts weight toward water and emissions
#[inline]
fn is_paddy_crop(crop: &str) -> bool {
    crop.eq_ignore_ascii_case("rice") || crop.eq_ignore_ascii_case("paddy")
}

/// Arid states shift weight toward water stewardship and soil health
#[inline]
fn is_arid_state(state: &str) -> bool {
    state.eq_ignore_ascii_case("rajasthan") || state.eq_ignore_ascii_case("gujarat")
}

/// Weighted overall score, rounded to the nearest whole point
///
/// Rejects weight sets that do not sum to 1.0 instead of silently
/// rescaling; a bad sum means misconfigured weights.
pub fn overall_score(scores: &PillarScores, weights: &PillarWeights) -> Result<u8, ScoreError> {
    let sum = weights.sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ScoreError::UnnormalizedWeights { sum });
    }

    let total: f64 = Pillar::ALL
        .iter()
        .map(|&p| f64::from(scores.get(p)) * weights.get(p))
        .sum();

    Ok(total.round().clamp(0.0, 100.0) as u8)
}
