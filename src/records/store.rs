use crate::records::error::RecordError;
use crate::types::record::RawRecord;
use log::{debug, warn};
use std::sync::Arc;

/// An immutable, already materialized set of climate records.
///
/// Cloning is cheap and shares the underlying records, so one store can be handed to
/// any number of aggregations, on any thread.
///
/// Records whose value is not finite are dropped when the store is built; they never
/// reach an aggregation.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Arc<[RawRecord]>,
}

impl RecordStore {
    pub fn new(records: Vec<RawRecord>) -> Self {
        let before = records.len();
        let records: Vec<RawRecord> = records
            .into_iter()
            .filter(|record| record.value.is_finite())
            .collect();
        let dropped = before - records.len();
        if dropped > 0 {
            warn!("Dropped {} climate records with a non-finite value", dropped);
        }
        Self {
            records: records.into(),
        }
    }

    /// Parses the JSON array returned by the climate data API.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, RecordError> {
        let records: Vec<RawRecord> = serde_json::from_slice(bytes)?;
        debug!("Parsed {} climate records from JSON", records.len());
        Ok(Self::new(records))
    }

    /// A store holding only the records tagged with `measurement`.
    pub fn only_measurement(&self, measurement: &str) -> RecordStore {
        let records: Arc<[RawRecord]> = self
            .records
            .iter()
            .filter(|record| record.measurement.as_deref() == Some(measurement))
            .cloned()
            .collect();
        RecordStore { records }
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }
}

impl From<Vec<RawRecord>> for RecordStore {
    fn from(records: Vec<RawRecord>) -> Self {
        RecordStore::new(records)
    }
}

impl FromIterator<RawRecord> for RecordStore {
    fn from_iter<T: IntoIterator<Item = RawRecord>>(iter: T) -> Self {
        RecordStore::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a RawRecord;
    type IntoIter = std::slice::Iter<'a, RawRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
