use crate::models::{FarmPractices, PillarScores};

/// Flat bonus applied when a practice flag is set
#[inline]
fn bonus(applies: bool, points: f64) -> f64 {
    if applies {
        points
    } else {
        0.0
    }
}

/// Soil health from organic matter and conservation practices, capped at 100
#[inline]
pub fn soil_health(p: &FarmPractices) -> f64 {
    (50.0 + p.organic_matter * 8.0 + bonus(p.crop_rotation, 5.0) + bonus(p.mulching, 5.0))
        .min(100.0)
}

/// Water stewardship from irrigation method, harvesting, and usage
#[inline]
pub fn water_stewardship(p: &FarmPractices) -> f64 {
    (40.0
        + bonus(p.irrigation.is_pressurized(), 15.0)
        + bonus(p.rainwater_harvest, 15.0)
        + (20.0 - p.water_use_index).max(0.0))
    .min(100.0)
}

/// Nutrient efficiency; every 10 kg/acre of urea costs one point of headroom
#[inline]
pub fn nutrient_efficiency(p: &FarmPractices) -> f64 {
    let urea_tens = (p.urea_kg_per_acre / 10.0).floor();
    (45.0 + (18.0 - urea_tens).max(0.0) + bonus(p.soil_test, 10.0) + bonus(p.balanced_npk, 7.0))
        .min(100.0)
}

/// Biodiversity from habitat-supporting practices
#[inline]
pub fn biodiversity(p: &FarmPractices) -> f64 {
    (35.0
        + bonus(p.intercropping, 12.0)
        + bonus(p.border_trees, 10.0)
        + bonus(p.flower_strips, 10.0))
    .min(100.0)
}

/// Emissions from diesel use and burning; floored at 0, no upper cap
#[inline]
pub fn emissions(p: &FarmPractices) -> f64 {
    (80.0 - p.diesel_liters * 2.0 - bonus(p.residue_burning, 20.0) + bonus(p.solar_pump, 10.0))
        .max(0.0)
}

/// Waste management from composting and plastic use
#[inline]
pub fn waste_management(p: &FarmPractices) -> f64 {
    (50.0 + p.compost_fraction * 40.0 - bonus(p.plastic_mulch, 15.0)
        + bonus(p.bio_pesticides, 10.0))
    .min(100.0)
}

/// Social engagement from training, inclusion, and knowledge sharing
#[inline]
pub fn social(p: &FarmPractices) -> f64 {
    (50.0
        + bonus(p.farmer_training, 10.0)
        + bonus(p.women_participation, 10.0)
        + bonus(p.community_sharing, 10.0))
    .min(100.0)
}

/// All seven pillar sub-scores, rounded to whole points
pub fn compute_subscores(practices: &FarmPractices) -> PillarScores {
    PillarScores {
        soil_health: soil_health(practices).round() as u8,
        water_stewardship: water_stewardship(practices).round() as u8,
        nutrient_efficiency: nutrient_efficiency(practices).round() as u8,
        biodiversity: biodiversity(practices).round() as u8,
        emissions: emissions(practices).round() as u8,
        waste_management: waste_management(practices).round() as u8,
        social: social(practices).round() as u8,
    }
}
