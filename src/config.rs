//! Rendering configuration: the anchor colors of the scale and the legend spacing.

use crate::scale::legend::DEFAULT_LEGEND_STEP;
use crate::types::color::ColorStops;
use bon::Builder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse choropleth configuration")]
    Parse(#[from] serde_json::Error),

    #[error("Legend step must be finite and positive, got {0}")]
    InvalidLegendStep(f64),
}

/// Settings shared by every map rendered with a [`crate::Choropleth`].
///
/// Every field has a default, so a partial JSON document is enough.
///
/// # Examples
///
/// ```
/// use choropleth::{ChoroplethConfig, Color};
///
/// let config = ChoroplethConfig::from_json_str(r##"{
///     "stops": { "mid": "#ffffff" },
///     "legend_step": 5
/// }"##).unwrap();
/// assert_eq!(config.stops.mid, Color::new(255, 255, 255));
/// assert_eq!(config.legend_step, 5.0);
///
/// let built = ChoroplethConfig::builder().legend_step(2.0).build();
/// assert_eq!(built.stops, ChoroplethConfig::default().stops);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct ChoroplethConfig {
    #[builder(default)]
    pub stops: ColorStops,
    #[builder(default = DEFAULT_LEGEND_STEP)]
    pub legend_step: f64,
}

impl Default for ChoroplethConfig {
    fn default() -> Self {
        Self {
            stops: ColorStops::default(),
            legend_step: DEFAULT_LEGEND_STEP,
        }
    }
}

impl ChoroplethConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ChoroplethConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.legend_step.is_finite() || self.legend_step <= 0.0 {
            return Err(ConfigError::InvalidLegendStep(self.legend_step));
        }
        Ok(())
    }
}
