use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registered volunteer profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Volunteer {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub district: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub phone: String,
    pub availability: Availability,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Volunteer {
    /// Whether this volunteer lists the given language
    pub fn speaks(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }
}

/// Volunteer availability as shown in their profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Online,
    Offline,
}

impl Availability {
    pub fn is_online(self) -> bool {
        matches!(self, Availability::Online)
    }
}

/// Irrigation method used on the farm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Irrigation {
    #[default]
    Flood,
    Drip,
    Sprinkler,
}

impl Irrigation {
    /// Drip and sprinkler systems, as opposed to gravity flooding
    pub fn is_pressurized(self) -> bool {
        matches!(self, Irrigation::Drip | Irrigation::Sprinkler)
    }
}

/// Farm practice questionnaire answers
///
/// Defaults match the values assumed when a field was left unanswered in
/// the original questionnaire, so partially filled records score the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FarmPractices {
    /// Estimated organic matter %, 0 to 5
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default = "default_organic_matter")]
    pub organic_matter: f64,
    /// Urea usage in kg per acre, 0 to 120
    #[validate(range(min = 0.0, max = 120.0))]
    #[serde(default = "default_urea_kg_per_acre")]
    pub urea_kg_per_acre: f64,
    /// Diesel burned this season in liters, 0 to 200
    #[validate(range(min = 0.0, max = 200.0))]
    #[serde(default = "default_diesel_liters")]
    pub diesel_liters: f64,
    /// Water use index, 1 to 20, lower is better
    #[validate(range(min = 1.0, max = 20.0))]
    #[serde(default = "default_water_use_index")]
    pub water_use_index: f64,
    /// Fraction of organic waste composted, 0 to 1
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_compost_fraction")]
    pub compost_fraction: f64,
    #[serde(default)]
    pub irrigation: Irrigation,
    #[serde(default)]
    pub soil_test: bool,
    #[serde(default)]
    pub balanced_npk: bool,
    #[serde(default)]
    pub crop_rotation: bool,
    #[serde(default)]
    pub intercropping: bool,
    #[serde(default)]
    pub border_trees: bool,
    #[serde(default)]
    pub flower_strips: bool,
    #[serde(default)]
    pub mulching: bool,
    #[serde(default)]
    pub rainwater_harvest: bool,
    #[serde(default)]
    pub solar_pump: bool,
    #[serde(default)]
    pub residue_burning: bool,
    #[serde(default)]
    pub plastic_mulch: bool,
    #[serde(default)]
    pub bio_pesticides: bool,
    #[serde(default)]
    pub farmer_training: bool,
    #[serde(default)]
    pub women_participation: bool,
    #[serde(default)]
    pub community_sharing: bool,
}

fn default_organic_matter() -> f64 {
    1.0
}
fn default_urea_kg_per_acre() -> f64 {
    50.0
}
fn default_diesel_liters() -> f64 {
    10.0
}
fn default_water_use_index() -> f64 {
    10.0
}
fn default_compost_fraction() -> f64 {
    0.3
}

impl Default for FarmPractices {
    fn default() -> Self {
        Self {
            organic_matter: default_organic_matter(),
            urea_kg_per_acre: default_urea_kg_per_acre(),
            diesel_liters: default_diesel_liters(),
            water_use_index: default_water_use_index(),
            compost_fraction: default_compost_fraction(),
            irrigation: Irrigation::default(),
            soil_test: false,
            balanced_npk: false,
            crop_rotation: false,
            intercropping: false,
            border_trees: false,
            flower_strips: false,
            mulching: false,
            rainwater_harvest: false,
            solar_pump: false,
            residue_burning: false,
            plastic_mulch: false,
            bio_pesticides: false,
            farmer_training: false,
            women_participation: false,
            community_sharing: false,
        }
    }
}

/// One of the seven scored sustainability categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pillar {
    #[serde(rename = "Soil Health")]
    SoilHealth,
    #[serde(rename = "Water Stewardship")]
    WaterStewardship,
    #[serde(rename = "Nutrient Efficiency")]
    NutrientEfficiency,
    #[serde(rename = "Biodiversity")]
    Biodiversity,
    #[serde(rename = "Emissions")]
    Emissions,
    #[serde(rename = "Waste Management")]
    WasteManagement,
    #[serde(rename = "Social")]
    Social,
}

impl Pillar {
    /// Canonical pillar order used for iteration and display
    pub const ALL: [Pillar; 7] = [
        Pillar::SoilHealth,
        Pillar::WaterStewardship,
        Pillar::NutrientEfficiency,
        Pillar::Biodiversity,
        Pillar::Emissions,
        Pillar::WasteManagement,
        Pillar::Social,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pillar::SoilHealth => "Soil Health",
            Pillar::WaterStewardship => "Water Stewardship",
            Pillar::NutrientEfficiency => "Nutrient Efficiency",
            Pillar::Biodiversity => "Biodiversity",
            Pillar::Emissions => "Emissions",
            Pillar::WasteManagement => "Waste Management",
            Pillar::Social => "Social",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sub-score per pillar, each within 0 to 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarScores {
    #[serde(rename = "Soil Health")]
    pub soil_health: u8,
    #[serde(rename = "Water Stewardship")]
    pub water_stewardship: u8,
    #[serde(rename = "Nutrient Efficiency")]
    pub nutrient_efficiency: u8,
    #[serde(rename = "Biodiversity")]
    pub biodiversity: u8,
    #[serde(rename = "Emissions")]
    pub emissions: u8,
    #[serde(rename = "Waste Management")]
    pub waste_management: u8,
    #[serde(rename = "Social")]
    pub social: u8,
}

impl PillarScores {
    pub fn get(&self, pillar: Pillar) -> u8 {
        match pillar {
            Pillar::SoilHealth => self.soil_health,
            Pillar::WaterStewardship => self.water_stewardship,
            Pillar::NutrientEfficiency => self.nutrient_efficiency,
            Pillar::Biodiversity => self.biodiversity,
            Pillar::Emissions => self.emissions,
            Pillar::WasteManagement => self.waste_management,
            Pillar::Social => self.social,
        }
    }

    /// Scores in canonical pillar order
    pub fn iter(&self) -> impl Iterator<Item = (Pillar, u8)> + '_ {
        Pillar::ALL.iter().map(move |&p| (p, self.get(p)))
    }
}

/// Weight per pillar; a normalized set sums to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarWeights {
    #[serde(rename = "Soil Health")]
    pub soil_health: f64,
    #[serde(rename = "Water Stewardship")]
    pub water_stewardship: f64,
    #[serde(rename = "Nutrient Efficiency")]
    pub nutrient_efficiency: f64,
    #[serde(rename = "Biodiversity")]
    pub biodiversity: f64,
    #[serde(rename = "Emissions")]
    pub emissions: f64,
    #[serde(rename = "Waste Management")]
    pub waste_management: f64,
    #[serde(rename = "Social")]
    pub social: f64,
}

impl PillarWeights {
    pub fn get(&self, pillar: Pillar) -> f64 {
        match pillar {
            Pillar::SoilHealth => self.soil_health,
            Pillar::WaterStewardship => self.water_stewardship,
            Pillar::NutrientEfficiency => self.nutrient_efficiency,
            Pillar::Biodiversity => self.biodiversity,
            Pillar::Emissions => self.emissions,
            Pillar::WasteManagement => self.waste_management,
            Pillar::Social => self.social,
        }
    }

    /// Weights in canonical pillar order
    pub fn iter(&self) -> impl Iterator<Item = (Pillar, f64)> + '_ {
        Pillar::ALL.iter().map(move |&p| (p, self.get(p)))
    }

    pub fn sum(&self) -> f64 {
        self.soil_health
            + self.water_stewardship
            + self.nutrient_efficiency
            + self.biodiversity
            + self.emissions
            + self.waste_management
            + self.social
    }
}

impl Default for PillarWeights {
    fn default() -> Self {
        Self {
            soil_health: 0.18,
            water_stewardship: 0.18,
            nutrient_efficiency: 0.16,
            biodiversity: 0.14,
            emissions: 0.14,
            waste_management: 0.10,
            social: 0.10,
        }
    }
}

/// What-if action applied to a practice record before re-scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intervention {
    /// Switch irrigation to drip
    SwitchToDrip,
    /// Start mulching in the field
    AddMulching,
    /// Cut urea usage by 25%
    ReduceUrea,
}
