//! Region identifiers, per-region summaries and the index that maps one to the other.
//!
//! Boundary data and climate records do not agree on a single identifier scheme, so a
//! region is indexed separately under each identifier it exposes: its provider id, its
//! country code and its display name.

use crate::types::domain::Domain;
use bon::Builder;
use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;

/// Placeholder used by boundary datasets for a country without an ISO code.
const MISSING_IDENTIFIER: &str = "-99";

/// A key of the [`AggregateIndex`], tagged with the identifier scheme it belongs to.
///
/// `Id("FR")` and `Code("FR")` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionKey {
    Id(String),
    Code(String),
    Name(String),
}

fn usable(identifier: &str) -> Option<String> {
    let identifier = identifier.trim();
    if identifier.is_empty() || identifier == MISSING_IDENTIFIER {
        None
    } else {
        Some(identifier.to_string())
    }
}

impl RegionKey {
    /// Returns `None` for an empty identifier or the `-99` placeholder.
    pub fn id(identifier: &str) -> Option<Self> {
        usable(identifier).map(RegionKey::Id)
    }

    pub fn code(identifier: &str) -> Option<Self> {
        usable(identifier).map(RegionKey::Code)
    }

    pub fn name(identifier: &str) -> Option<Self> {
        usable(identifier).map(RegionKey::Name)
    }

    pub fn as_str(&self) -> &str {
        match self {
            RegionKey::Id(s) | RegionKey::Code(s) | RegionKey::Name(s) => s,
        }
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionKey::Id(s) => write!(f, "id:{}", s),
            RegionKey::Code(s) => write!(f, "code:{}", s),
            RegionKey::Name(s) => write!(f, "name:{}", s),
        }
    }
}

/// The identifiers a map boundary feature exposes. Any of them may be missing.
///
/// # Examples
///
/// ```
/// use choropleth::{RegionFeature, RegionKey};
///
/// let feature = RegionFeature::builder().code("FR").name("France").build();
/// let keys: Vec<RegionKey> = feature.keys().collect();
/// assert_eq!(keys, vec![
///     RegionKey::Code("FR".to_string()),
///     RegionKey::Name("France".to_string()),
/// ]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct RegionFeature {
    #[builder(into)]
    pub id: Option<String>,
    #[builder(into)]
    pub code: Option<String>,
    #[builder(into)]
    pub name: Option<String>,
}

impl RegionFeature {
    /// Candidate keys in lookup order: id, then code, then name.
    pub fn keys(&self) -> impl Iterator<Item = RegionKey> + '_ {
        [
            self.id.as_deref().and_then(RegionKey::id),
            self.code.as_deref().and_then(RegionKey::code),
            self.name.as_deref().and_then(RegionKey::name),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for RegionFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {}",
            self.id.as_deref().unwrap_or("-"),
            self.code.as_deref().unwrap_or("-"),
            self.name.as_deref().unwrap_or("-")
        )
    }
}

/// Sum and count of the values observed for one region key.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSummary {
    pub count: u64,
    pub total: f64,
    pub display_name: String,
}

impl RegionSummary {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            count: 0,
            total: 0.0,
            display_name: display_name.into(),
        }
    }

    pub fn single(display_name: impl Into<String>, value: f64) -> Self {
        Self {
            count: 1,
            total: value,
            display_name: display_name.into(),
        }
    }

    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.total += value;
    }

    /// `None` when nothing was counted.
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total / self.count as f64)
    }
}

/// Per-region summaries keyed by every identifier scheme a region was seen under.
///
/// Only regions with at least one observation are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateIndex {
    entries: HashMap<RegionKey, RegionSummary>,
}

impl AggregateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &RegionKey) -> Option<&RegionSummary> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, RegionKey, RegionSummary> {
        self.entries.iter()
    }

    /// The range spanned by the averages of all stored summaries.
    pub fn domain(&self) -> Option<Domain> {
        Domain::spanning(self.entries.values().filter_map(RegionSummary::average))
    }

    pub(crate) fn accumulate(&mut self, key: RegionKey, display_name: &str, value: f64) {
        self.entries
            .entry(key)
            .or_insert_with(|| RegionSummary::new(display_name))
            .add(value);
    }

    pub(crate) fn insert(&mut self, key: RegionKey, summary: RegionSummary) {
        self.entries.insert(key, summary);
    }
}

impl FromIterator<(RegionKey, RegionSummary)> for AggregateIndex {
    fn from_iter<T: IntoIterator<Item = (RegionKey, RegionSummary)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AggregateIndex {
    type Item = (&'a RegionKey, &'a RegionSummary);
    type IntoIter = hash_map::Iter<'a, RegionKey, RegionSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_identifiers_are_not_keys() {
        assert_eq!(RegionKey::code("-99"), None);
        assert_eq!(RegionKey::name("   "), None);
        assert_eq!(RegionKey::id(" FR "), Some(RegionKey::Id("FR".to_string())));
    }

    #[test]
    fn test_feature_keys_keep_lookup_order() {
        let feature = RegionFeature::builder()
            .name("Norway")
            .code("-99")
            .id("NO")
            .build();
        let keys: Vec<RegionKey> = feature.keys().collect();
        assert_eq!(
            keys,
            vec![
                RegionKey::Id("NO".to_string()),
                RegionKey::Name("Norway".to_string())
            ]
        );
    }

    #[test]
    fn test_average_of_empty_summary_is_none() {
        let mut summary = RegionSummary::new("France");
        assert_eq!(summary.average(), None);
        summary.add(10.0);
        summary.add(20.0);
        assert_eq!(summary.average(), Some(15.0));
    }

    #[test]
    fn test_domain_spans_averages() {
        let index: AggregateIndex = [
            (
                RegionKey::Id("FR".to_string()),
                RegionSummary {
                    count: 2,
                    total: 30.0,
                    display_name: "France".to_string(),
                },
            ),
            (
                RegionKey::Id("NO".to_string()),
                RegionSummary::single("Norway", -4.0),
            ),
        ]
        .into_iter()
        .collect();
        let domain = index.domain().unwrap();
        assert_eq!(domain.min(), -4.0);
        assert_eq!(domain.max(), 15.0);
        assert!(AggregateIndex::new().domain().is_none());
    }
}
