use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScaleError {
    #[error("Invalid hex color '{0}', expected '#rrggbb' or '#rgb'")]
    InvalidHexColor(String),

    #[error("Domain bounds must be finite, got min {min} and max {max}")]
    NonFiniteDomain { min: f64, max: f64 },

    #[error("Domain minimum {min} is greater than its maximum {max}")]
    InvertedDomain { min: f64, max: f64 },

    #[error("Legend step must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("Legend would need {entries} entries, more than the {max} allowed", max = crate::scale::legend::MAX_LEGEND_ENTRIES)]
    LegendTooLarge { entries: f64 },
}
