//! Interaction state of the map: which country, if any, has its detail view open.

use crate::regions::locate::{Geocoder, LatLon, LocateError, LocatedRegion};
use crate::regions::resolver::{RegionResolver, ResolveObserver};
use crate::types::region::{AggregateIndex, RegionSummary};
use log::debug;

/// A country picked on the map, with its aggregate if one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedRegion {
    pub code: String,
    pub name: String,
    /// `None` means the country was found on the map but has no data.
    pub summary: Option<RegionSummary>,
}

impl SelectedRegion {
    pub fn has_data(&self) -> bool {
        self.summary.is_some()
    }

    /// Name from the climate data when available, otherwise the geocoder's name.
    pub fn display_name(&self) -> &str {
        self.summary
            .as_ref()
            .map_or(self.name.as_str(), |summary| summary.display_name.as_str())
    }

    pub fn average(&self) -> Option<f64> {
        self.summary.as_ref().and_then(RegionSummary::average)
    }

    pub fn data_points(&self) -> u64 {
        self.summary.as_ref().map_or(0, |summary| summary.count)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    DetailOpen(SelectedRegion),
}

/// Tracks the detail view driven by clicks on the map.
///
/// A click that the geocoder cannot place leaves the state untouched. A click on a
/// country opens its detail view, with an empty body when the country has no data.
/// Results are applied in the order they arrive; a newer one simply replaces the
/// previous state.
#[derive(Debug, Clone, Default)]
pub struct SelectionSession {
    state: SelectionState,
}

impl SelectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SelectionState::DetailOpen(_))
    }

    pub fn selected(&self) -> Option<&SelectedRegion> {
        match &self.state {
            SelectionState::DetailOpen(selected) => Some(selected),
            SelectionState::Idle => None,
        }
    }

    pub fn close(&mut self) {
        self.state = SelectionState::Idle;
    }

    /// Applies the outcome of a reverse-geocoding lookup.
    pub fn apply_location<O: ResolveObserver>(
        &mut self,
        located: Result<LocatedRegion, LocateError>,
        index: &AggregateIndex,
        resolver: &RegionResolver<O>,
    ) -> &SelectionState {
        let located = match located {
            Ok(located) => located,
            Err(e) => {
                debug!("Ignoring map click: {}", e);
                return &self.state;
            }
        };
        let summary = resolver.resolve(index, &located.as_feature()).cloned();
        self.state = SelectionState::DetailOpen(SelectedRegion {
            code: located.code,
            name: located.name,
            summary,
        });
        &self.state
    }

    /// Geocodes a click and applies the result. The state is unchanged while the
    /// lookup is pending.
    pub async fn handle_click<G, O>(
        &mut self,
        geocoder: &G,
        location: LatLon,
        index: &AggregateIndex,
        resolver: &RegionResolver<O>,
    ) -> &SelectionState
    where
        G: Geocoder,
        O: ResolveObserver,
    {
        let located = geocoder.locate(location).await;
        self.apply_location(located, index, resolver)
    }
}
