use crate::models::{Badge, PillarScores, Recommendation};

/// Score below which a pillar attracts recommendations
pub const DEFAULT_THRESHOLD: u8 = 60;

/// Most recommendations returned on one scorecard
pub const DEFAULT_MAX_ITEMS: usize = 5;

fn entry(title: &str, impact: &str, cost: &str, lift: &str) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        impact: impact.to_string(),
        cost: cost.to_string(),
        lift: lift.to_string(),
    }
}

/// Improvement actions for every pillar scoring below the threshold
///
/// Pillars are evaluated in a fixed order (water, nutrient, emissions,
/// soil, biodiversity, waste, social) so the highest-leverage actions
/// survive the cap.
pub fn recommendations(
    scores: &PillarScores,
    threshold: u8,
    max_items: usize,
) -> Vec<Recommendation> {
    let mut items = Vec::new();

    if scores.water_stewardship < threshold {
        items.push(entry("Adopt drip irrigation", "+15 water", "₹₹", "+8–12"));
        items.push(entry("Rainwater harvesting pits", "+10 water", "₹₹", "+6–10"));
    }
    if scores.nutrient_efficiency < threshold {
        items.push(entry("Soil testing before sowing", "+10 nutrient", "₹", "+6–8"));
        items.push(entry("Balanced NPK application", "+8 nutrient", "₹₹", "+4–6"));
    }
    if scores.emissions < threshold {
        items.push(entry("Switch to solar pump", "+10 emissions", "₹₹₹", "+6–10"));
        items.push(entry("Avoid residue burning", "+20 emissions", "₹", "+10–15"));
    }
    if scores.soil_health < threshold {
        items.push(entry("Add vermicompost/green manure", "+12 soil", "₹₹", "+6–10"));
        items.push(entry("Mulching to retain moisture", "+8 soil", "₹", "+4–6"));
    }
    if scores.biodiversity < threshold {
        items.push(entry("Intercropping or border trees", "+10 biodiversity", "₹₹", "+5–8"));
    }
    if scores.waste_management < threshold {
        items.push(entry("Compost organic waste", "+12 waste", "₹", "+6–9"));
    }
    if scores.social < threshold {
        items.push(entry("Farmer training participation", "+10 social", "₹", "+6–8"));
    }

    items.truncate(max_items);
    items
}

/// Achievement badges earned by an evaluation
pub fn badges(score: u8, scores: &PillarScores) -> Vec<Badge> {
    let mut earned = Vec::new();

    if scores.water_stewardship >= 75 {
        earned.push(Badge::WaterSaver);
    }
    if scores.soil_health >= 75 {
        earned.push(Badge::SoilSteward);
    }
    if scores.emissions >= 70 && scores.emissions >= scores.nutrient_efficiency {
        earned.push(Badge::ClimateConscious);
    }
    if score >= 80 {
        earned.push(Badge::EcoChampion);
    }

    earned
}
