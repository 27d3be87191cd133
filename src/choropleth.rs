//! This module provides the main entry point of the engine. It ties together the
//! aggregation of climate records, the resolution of map features and the color scale,
//! so a renderer only has to ask for fills, a legend and the click selection.

use crate::aggregation::point::aggregate_point;
use crate::aggregation::range::aggregate;
use crate::config::ChoroplethConfig;
use crate::error::ChoroplethError;
use crate::records::store::RecordStore;
use crate::regions::locate::{Geocoder, LatLon};
use crate::regions::resolver::{Fill, LogObserver, RegionResolver, ResolveObserver};
use crate::scale::color_scale::ColorScale;
use crate::scale::legend::{build_legend, LegendEntry};
use crate::selection::session::SelectionSession;
use crate::types::domain::Domain;
use crate::types::region::{AggregateIndex, RegionFeature};
use crate::types::traits::types::TimeWindow;
use bon::bon;
use chrono::NaiveDate;

/// The choropleth engine.
///
/// Holds the configured color scale and a [`RegionResolver`] whose misses are reported
/// to an observer (the `log` facade by default). All methods are side-effect free apart
/// from that reporting, so a single instance can serve any number of maps.
///
/// # Examples
///
/// ```rust
/// # use choropleth::{Choropleth, ChoroplethError, RecordStore, RegionFeature, TimeWindow, Year, Fill};
/// # fn main() -> Result<(), ChoroplethError> {
/// let store = RecordStore::from_json_slice(br#"[
///     {"time": "2020-01-15T00:00:00Z", "country_id": "FR", "country_name": "France",
///      "country_code": "FR", "value": 10.0},
///     {"time": "2020-06-15T00:00:00Z", "country_id": "FR", "country_name": "France",
///      "country_code": "FR", "value": 20.0}
/// ]"#)?;
///
/// let engine = Choropleth::new();
/// let index = engine
///     .summarize()
///     .records(&store)
///     .window(TimeWindow::spanning(Year(2020), Year(2020)).unwrap())
///     .call()?;
///
/// let domain = choropleth::Domain::new(0.0, 30.0)?;
/// let france = RegionFeature::builder().code("FR").name("France").build();
/// assert_eq!(engine.fill_for(&index, &france, &domain), Fill::Color(engine.scale().stops().mid));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Choropleth<O = LogObserver> {
    config: ChoroplethConfig,
    scale: ColorScale,
    resolver: RegionResolver<O>,
}

impl Default for Choropleth<LogObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl Choropleth<LogObserver> {
    /// An engine with the default colors and legend step, logging resolution misses.
    pub fn new() -> Self {
        let config = ChoroplethConfig::default();
        Self {
            scale: ColorScale::new(config.stops),
            resolver: RegionResolver::new(),
            config,
        }
    }

    /// # Errors
    ///
    /// Returns [`ChoroplethError::Config`] if the configuration is invalid.
    pub fn with_config(config: ChoroplethConfig) -> Result<Self, ChoroplethError> {
        Choropleth::with_observer(config, LogObserver)
    }
}

#[bon]
impl<O: ResolveObserver> Choropleth<O> {
    /// An engine reporting resolution misses to `observer` instead of the log.
    ///
    /// # Errors
    ///
    /// Returns [`ChoroplethError::Config`] if the configuration is invalid.
    pub fn with_observer(config: ChoroplethConfig, observer: O) -> Result<Self, ChoroplethError> {
        config.validate()?;
        Ok(Self {
            scale: ColorScale::new(config.stops),
            resolver: RegionResolver::with_observer(observer),
            config,
        })
    }

    pub fn config(&self) -> &ChoroplethConfig {
        &self.config
    }

    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    pub fn resolver(&self) -> &RegionResolver<O> {
        &self.resolver
    }

    /// Reduces `records` to per-region summaries, over either a window of months
    /// (range mode) or a single date (point mode).
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.records(&RecordStore)`: **Required.** The records to aggregate.
    /// * `.window(TimeWindow)`: Sum every record inside the window, inclusive.
    /// * `.date(NaiveDate)`: Take each region's value on exactly this date.
    ///
    /// # Errors
    ///
    /// Returns [`ChoroplethError::ConflictingSelection`] if both a window and a date
    /// are given, and [`ChoroplethError::MissingSelection`] if neither is.
    #[builder]
    pub fn summarize(
        &self,
        records: &RecordStore,
        window: Option<TimeWindow>,
        date: Option<NaiveDate>,
    ) -> Result<AggregateIndex, ChoroplethError> {
        match (window, date) {
            (Some(window), None) => Ok(aggregate(records, window)),
            (None, Some(date)) => Ok(aggregate_point(records, date)),
            (Some(window), Some(date)) => {
                Err(ChoroplethError::ConflictingSelection { window, date })
            }
            (None, None) => Err(ChoroplethError::MissingSelection),
        }
    }

    pub fn fill_for(&self, index: &AggregateIndex, feature: &RegionFeature, domain: &Domain) -> Fill {
        self.resolver.fill_for(index, feature, &self.scale, domain)
    }

    /// One fill per feature, in the order given.
    pub fn fills(
        &self,
        index: &AggregateIndex,
        features: &[RegionFeature],
        domain: &Domain,
    ) -> Vec<Fill> {
        features
            .iter()
            .map(|feature| self.fill_for(index, feature, domain))
            .collect()
    }

    /// The legend for `domain`, using the configured step.
    pub fn legend(&self, domain: &Domain) -> Result<Vec<LegendEntry>, ChoroplethError> {
        Ok(build_legend(&self.scale, domain, self.config.legend_step)?)
    }

    /// Selects the region under a click on the map: geocodes `location` and updates
    /// `session` with the result.
    pub async fn select<G: Geocoder>(
        &self,
        session: &mut SelectionSession,
        geocoder: &G,
        location: LatLon,
        index: &AggregateIndex,
    ) {
        session
            .handle_click(geocoder, location, index, &self.resolver)
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::color::{Color, ColorStops};
    use crate::types::record::RawRecord;
    use crate::types::region::RegionKey;
    use crate::types::traits::types::YearMonth;
    use chrono::{TimeZone, Utc};
    use std::cell::Cell;

    fn store() -> RecordStore {
        let record = |y: i32, m: u32, value: f64| RawRecord {
            time: Utc.with_ymd_and_hms(y, m, 1, 0, 0, 0).unwrap(),
            region_id: "FR".to_string(),
            region_name: "France".to_string(),
            region_code: "FR".to_string(),
            value,
            measurement: None,
        };
        RecordStore::new(vec![record(2020, 1, 10.0), record(2020, 6, 20.0)])
    }

    fn year_2020() -> TimeWindow {
        TimeWindow::new(
            YearMonth::new(2020, 1).unwrap(),
            YearMonth::new(2020, 12).unwrap(),
        )
    }

    #[derive(Default)]
    struct CountingObserver {
        misses: Cell<usize>,
    }

    impl ResolveObserver for CountingObserver {
        fn on_miss(&self, _feature: &RegionFeature) {
            self.misses.set(self.misses.get() + 1);
        }
    }

    #[test]
    fn test_summarize_window() {
        let engine = Choropleth::new();
        let index = engine
            .summarize()
            .records(&store())
            .window(year_2020())
            .call()
            .unwrap();
        let france = index.get(&RegionKey::Id("FR".to_string())).unwrap();
        assert_eq!((france.count, france.total), (2, 30.0));
    }

    #[test]
    fn test_summarize_date() {
        let engine = Choropleth::new();
        let index = engine
            .summarize()
            .records(&store())
            .date(NaiveDate::from_ymd_opt(2020, 6, 1).unwrap())
            .call()
            .unwrap();
        assert_eq!(index.get(&RegionKey::Id("FR".to_string())).unwrap().total, 20.0);
    }

    #[test]
    fn test_summarize_rejects_both_or_neither() {
        let engine = Choropleth::new();
        let both = engine
            .summarize()
            .records(&store())
            .window(year_2020())
            .date(NaiveDate::from_ymd_opt(2020, 6, 1).unwrap())
            .call();
        assert!(matches!(both, Err(ChoroplethError::ConflictingSelection { .. })));

        let neither = engine.summarize().records(&store()).call();
        assert!(matches!(neither, Err(ChoroplethError::MissingSelection)));
    }

    #[test]
    fn test_fills_follow_feature_order() {
        let observer = CountingObserver::default();
        let engine = Choropleth::with_observer(ChoroplethConfig::default(), &observer).unwrap();
        let index = engine
            .summarize()
            .records(&store())
            .window(year_2020())
            .call()
            .unwrap();
        let domain = Domain::new(0.0, 30.0).unwrap();
        let features = [
            RegionFeature::builder().name("Norway").build(),
            RegionFeature::builder().code("FR").build(),
        ];

        let fills = engine.fills(&index, &features, &domain);
        assert_eq!(fills, vec![Fill::NoData, Fill::Color(engine.scale().stops().mid)]);
        assert_eq!(observer.misses.get(), 1);
    }

    #[test]
    fn test_configured_colors_and_step() {
        let stops = ColorStops::new(
            Color::new(0, 0, 0),
            Color::new(128, 128, 128),
            Color::new(255, 255, 255),
        );
        let config = ChoroplethConfig::builder()
            .stops(stops)
            .legend_step(5.0)
            .build();
        let engine = Choropleth::with_config(config).unwrap();
        let legend = engine.legend(&Domain::new(0.0, 10.0).unwrap()).unwrap();
        assert_eq!(
            legend.iter().map(|e| e.value).collect::<Vec<_>>(),
            vec![10.0, 5.0, 0.0]
        );
        assert_eq!(legend[1].color, Color::new(128, 128, 128));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ChoroplethConfig::builder().legend_step(-1.0).build();
        assert!(matches!(
            Choropleth::with_config(config),
            Err(ChoroplethError::Config(_))
        ));
    }
}
