use crate::config::ConfigError;
use crate::records::error::RecordError;
use crate::scale::error::ScaleError;
use crate::types::traits::types::TimeWindow;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChoroplethError {
    #[error(transparent)]
    Records(#[from] RecordError),

    #[error(transparent)]
    Scale(#[from] ScaleError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Cannot select both a time window ({window}) and a single date ({date})")]
    ConflictingSelection { window: TimeWindow, date: NaiveDate },

    #[error("Select either a time window or a single date")]
    MissingSelection,
}
