use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::recommend;
use crate::models::PillarWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_recommendation_threshold")]
    pub recommendation_threshold: u8,
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            recommendation_threshold: default_recommendation_threshold(),
            max_recommendations: default_max_recommendations(),
        }
    }
}

fn default_recommendation_threshold() -> u8 {
    recommend::DEFAULT_THRESHOLD
}
fn default_max_recommendations() -> usize {
    recommend::DEFAULT_MAX_ITEMS
}

/// Base pillar weights before context adjustments
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_soil_health_weight")]
    pub soil_health: f64,
    #[serde(default = "default_water_stewardship_weight")]
    pub water_stewardship: f64,
    #[serde(default = "default_nutrient_efficiency_weight")]
    pub nutrient_efficiency: f64,
    #[serde(default = "default_biodiversity_weight")]
    pub biodiversity: f64,
    #[serde(default = "default_emissions_weight")]
    pub emissions: f64,
    #[serde(default = "default_waste_management_weight")]
    pub waste_management: f64,
    #[serde(default = "default_social_weight")]
    pub social: f64,
}

impl WeightsConfig {
    pub fn to_pillar_weights(&self) -> PillarWeights {
        PillarWeights {
            soil_health: self.soil_health,
            water_stewardship: self.water_stewardship,
            nutrient_efficiency: self.nutrient_efficiency,
            biodiversity: self.biodiversity,
            emissions: self.emissions,
            waste_management: self.waste_management,
            social: self.social,
        }
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            soil_health: default_soil_health_weight(),
            water_stewardship: default_water_stewardship_weight(),
            nutrient_efficiency: default_nutrient_efficiency_weight(),
            biodiversity: default_biodiversity_weight(),
            emissions: default_emissions_weight(),
            waste_management: default_waste_management_weight(),
            social: default_social_weight(),
        }
    }
}

fn default_soil_health_weight() -> f64 { 0.18 }
fn default_water_stewardship_weight() -> f64 { 0.18 }
fn default_nutrient_efficiency_weight() -> f64 { 0.16 }
fn default_biodiversity_weight() -> f64 { 0.14 }
fn default_emissions_weight() -> f64 { 0.14 }
fn default_waste_management_weight() -> f64 { 0.10 }
fn default_social_weight() -> f64 { 0.10 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ECOFARMX__)
    ///    e.g. ECOFARMX__SCORING__RECOMMENDATION_THRESHOLD -> scoring.recommendation_threshold
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("ECOFARMX")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ECOFARMX")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
