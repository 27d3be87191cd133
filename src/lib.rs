mod aggregation;
mod choropleth;
mod config;
mod error;
mod records;
mod regions;
mod scale;
mod selection;
mod types;

pub use choropleth::*;
pub use config::{ChoroplethConfig, ConfigError};
pub use error::ChoroplethError;

pub use aggregation::point::{aggregate_point, PointTable};
pub use aggregation::range::aggregate;

pub use records::error::RecordError;
pub use records::store::RecordStore;

pub use regions::locate::{Geocoder, LatLon, LocateError, LocatedRegion};
pub use regions::resolver::{Fill, LogObserver, RegionResolver, ResolveObserver};

pub use scale::color_scale::ColorScale;
pub use scale::error::ScaleError;
pub use scale::legend::{build_legend, LegendEntry, DEFAULT_LEGEND_STEP, MAX_LEGEND_ENTRIES};

pub use selection::session::{SelectedRegion, SelectionSession, SelectionState};

pub use types::color::{Color, ColorStops};
pub use types::domain::Domain;
pub use types::record::RawRecord;
pub use types::region::{AggregateIndex, RegionFeature, RegionKey, RegionSummary};
pub use types::traits::any::any_month::AnyMonth;
pub use types::traits::types::{TimeWindow, Year, YearMonth};
