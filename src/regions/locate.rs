//! The reverse-geocoding seam: clicked coordinates to a country.
//!
//! The lookup itself is done by an external service; this module only defines what
//! the engine expects back from it.

use crate::types::region::RegionFeature;
use std::future::Future;
use thiserror::Error;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// The country a coordinate falls in, as reported by a [`Geocoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedRegion {
    pub code: String,
    pub name: String,
}

impl LocatedRegion {
    /// Country codes are normalized to upper case.
    pub fn new(code: impl AsRef<str>, name: impl Into<String>) -> Self {
        Self {
            code: code.as_ref().trim().to_uppercase(),
            name: name.into(),
        }
    }

    /// The feature to resolve against the aggregate index. A geocoder result has no
    /// provider id, so resolution goes by code, then name.
    pub fn as_feature(&self) -> RegionFeature {
        RegionFeature::builder()
            .code(self.code.clone())
            .name(self.name.clone())
            .build()
    }
}

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("No country found at ({lat}, {lon})")]
    NoMatch { lat: f64, lon: f64 },

    #[error("Reverse geocoding failed")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Looks up the country at a coordinate.
///
/// A lookup may suspend. Failures and misses are treated the same by the engine.
pub trait Geocoder {
    fn locate(
        &self,
        location: LatLon,
    ) -> impl Future<Output = Result<LocatedRegion, LocateError>> + Send;
}
