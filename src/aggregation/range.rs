//! Range aggregation: sum and count every record that falls inside a window of months.

use crate::records::store::RecordStore;
use crate::types::region::AggregateIndex;
use crate::types::traits::types::TimeWindow;
use log::debug;

/// Sums the records inside `window` (inclusive at both ends) per region key.
///
/// Each record is added to the summary of every key it exposes (id, code and name),
/// independently. Regions without a record in the window are absent from the result,
/// and an inverted window yields an empty index.
///
/// # Examples
///
/// ```
/// use choropleth::{aggregate, RecordStore, RegionKey, TimeWindow, Year};
///
/// let store = RecordStore::from_json_slice(br#"[
///     {"time": "2020-01-15T00:00:00Z", "country_id": "FR", "country_name": "France",
///      "country_code": "FR", "value": 10.0},
///     {"time": "2020-06-15T00:00:00Z", "country_id": "FR", "country_name": "France",
///      "country_code": "FR", "value": 20.0}
/// ]"#).unwrap();
///
/// let window = TimeWindow::spanning(Year(2020), Year(2020)).unwrap();
/// let index = aggregate(&store, window);
/// let france = index.get(&RegionKey::Id("FR".to_string())).unwrap();
/// assert_eq!(france.count, 2);
/// assert_eq!(france.total, 30.0);
/// assert_eq!(france.average(), Some(15.0));
/// ```
pub fn aggregate(records: &RecordStore, window: TimeWindow) -> AggregateIndex {
    let mut index = AggregateIndex::new();
    if window.is_empty() {
        debug!("Time window {} is inverted, nothing to aggregate", window);
        return index;
    }

    for record in records {
        if !window.contains(record.month()) {
            continue;
        }
        for key in record.keys() {
            index.accumulate(key, &record.region_name, record.value);
        }
    }

    debug!(
        "Aggregated {} records over {} into {} region keys",
        records.len(),
        window,
        index.len()
    );
    index
}
