//! Resolves map features to their aggregate summaries.

use crate::scale::color_scale::ColorScale;
use crate::types::color::Color;
use crate::types::domain::Domain;
use crate::types::region::{AggregateIndex, RegionFeature, RegionSummary};
use log::debug;

/// Receives resolution misses so they can be reported without side effects in the resolver.
pub trait ResolveObserver {
    fn on_miss(&self, feature: &RegionFeature);
}

/// Reports misses through the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ResolveObserver for LogObserver {
    fn on_miss(&self, feature: &RegionFeature) {
        debug!("No aggregate data for region {}", feature);
    }
}

impl<O: ResolveObserver + ?Sized> ResolveObserver for &O {
    fn on_miss(&self, feature: &RegionFeature) {
        (**self).on_miss(feature)
    }
}

/// What the renderer should paint a feature with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Color(Color),
    /// The region has no data; the renderer applies its neutral treatment.
    NoData,
}

impl Fill {
    pub fn color(self) -> Option<Color> {
        match self {
            Fill::Color(color) => Some(color),
            Fill::NoData => None,
        }
    }
}

/// Looks features up in an [`AggregateIndex`], trying the id, then the code, then the name.
#[derive(Debug, Clone, Default)]
pub struct RegionResolver<O = LogObserver> {
    observer: O,
}

impl RegionResolver<LogObserver> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: ResolveObserver> RegionResolver<O> {
    pub fn with_observer(observer: O) -> Self {
        Self { observer }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The first summary found under the feature's keys, in id, code, name order.
    pub fn resolve<'a>(
        &self,
        index: &'a AggregateIndex,
        feature: &RegionFeature,
    ) -> Option<&'a RegionSummary> {
        let hit = feature.keys().find_map(|key| index.get(&key));
        if hit.is_none() {
            self.observer.on_miss(feature);
        }
        hit
    }

    /// The color for the feature's average, or [`Fill::NoData`] if it has none.
    pub fn fill_for(
        &self,
        index: &AggregateIndex,
        feature: &RegionFeature,
        scale: &ColorScale,
        domain: &Domain,
    ) -> Fill {
        self.resolve(index, feature)
            .and_then(RegionSummary::average)
            .map_or(Fill::NoData, |average| {
                Fill::Color(scale.color_for(average, domain))
            })
    }
}
