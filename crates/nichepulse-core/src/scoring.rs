use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Saturation caps used to normalize raw signal counts onto `[0, 100]`.
///
/// Every field is optional in YAML; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Advertiser count at which ad breadth saturates.
    pub advertiser_cap: f64,
    /// Average ad longevity (days) at which ad staying power saturates.
    pub longevity_cap_days: f64,
    /// Number of buyer-intent keywords at which keyword breadth saturates.
    pub keyword_count_cap: f64,
    /// Relevance-weighted search volume at which intent volume saturates.
    pub intent_volume_cap: f64,
    /// Combined complaint + desire frequency at which pain saturates.
    pub pain_frequency_cap: f64,
    pub purchase_trigger_cap: f64,
    /// Competitor count at which competitive heat reaches 50.
    pub competitor_half_saturation: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            advertiser_cap: 50.0,
            longevity_cap_days: 90.0,
            keyword_count_cap: 20.0,
            intent_volume_cap: 10_000.0,
            pain_frequency_cap: 200.0,
            purchase_trigger_cap: 25.0,
            competitor_half_saturation: 10.0,
        }
    }
}

impl ScoringConfig {
    /// Check that every cap is a finite, strictly positive number.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("advertiser_cap", self.advertiser_cap),
            ("longevity_cap_days", self.longevity_cap_days),
            ("keyword_count_cap", self.keyword_count_cap),
            ("intent_volume_cap", self.intent_volume_cap),
            ("pain_frequency_cap", self.pain_frequency_cap),
            ("purchase_trigger_cap", self.purchase_trigger_cap),
            ("competitor_half_saturation", self.competitor_half_saturation),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }

        Ok(())
    }
}

/// Load and validate scoring caps from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_scoring_config(path: &Path) -> Result<ScoringConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ScoringFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_scoring_config(&content)
}

fn parse_scoring_config(content: &str) -> Result<ScoringConfig, ConfigError> {
    let config: ScoringConfig =
        serde_yaml::from_str(content).map_err(ConfigError::ScoringFileParse)?;
    config.validate()?;
    Ok(config)
}
