//! Point aggregation over records that already hold one value per region per date.

use crate::records::store::RecordStore;
use crate::types::region::{AggregateIndex, RegionSummary};
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;

/// Looks up the value each region has on exactly `date`.
///
/// Every matching record yields a single-observation summary under each of its keys.
/// When several records share a key and date, the last one wins.
pub fn aggregate_point(records: &RecordStore, date: NaiveDate) -> AggregateIndex {
    let mut index = AggregateIndex::new();
    for record in records.iter().filter(|record| record.date() == date) {
        for key in record.keys() {
            index.insert(key, RegionSummary::single(&record.region_name, record.value));
        }
    }
    debug!("Point lookup at {} found {} region keys", date, index.len());
    index
}

/// All per-date indexes of a record store, built once.
///
/// Moving the selected date then costs a map lookup instead of a scan of every record.
///
/// # Examples
///
/// ```
/// use choropleth::{PointTable, RecordStore, RegionKey};
/// use chrono::NaiveDate;
///
/// let store = RecordStore::from_json_slice(br#"[
///     {"time": "2021-07-01T00:00:00Z", "country_id": "NO", "country_name": "Norway",
///      "country_code": "NO", "value": 13.0},
///     {"time": "2021-08-01T00:00:00Z", "country_id": "NO", "country_name": "Norway",
///      "country_code": "NO", "value": 12.0}
/// ]"#).unwrap();
///
/// let table = PointTable::build(&store);
/// let july = NaiveDate::from_ymd_opt(2021, 7, 1).unwrap();
/// let norway = table.at(july);
/// assert_eq!(norway.get(&RegionKey::Name("Norway".to_string())).unwrap().total, 13.0);
/// assert_eq!(table.dates().count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PointTable {
    by_date: BTreeMap<NaiveDate, AggregateIndex>,
}

impl PointTable {
    pub fn build(records: &RecordStore) -> Self {
        let mut by_date: BTreeMap<NaiveDate, AggregateIndex> = BTreeMap::new();
        for record in records {
            let index = by_date.entry(record.date()).or_default();
            for key in record.keys() {
                index.insert(key, RegionSummary::single(&record.region_name, record.value));
            }
        }
        debug!(
            "Built point table with {} dates from {} records",
            by_date.len(),
            records.len()
        );
        Self { by_date }
    }

    /// The index for `date`; empty when no record carries that date.
    pub fn at(&self, date: NaiveDate) -> AggregateIndex {
        self.by_date.get(&date).cloned().unwrap_or_default()
    }

    /// Dates with at least one record, in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_date.keys().copied()
    }
}
