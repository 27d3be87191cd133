//! Defines the raw climate observation consumed by the aggregation engine.

use crate::types::region::RegionKey;
use crate::types::traits::types::YearMonth;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One observation for a country at a point in time, as delivered by the climate API.
///
/// The serialized field names follow the upstream data (`country_id`, `country_name`,
/// `country_code`), so a JSON export of the API can be deserialized directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Timestamp of the observation (RFC 3339 in JSON).
    pub time: DateTime<Utc>,
    /// Identifier used by the climate data provider (e.g. "GM" for Germany).
    #[serde(rename = "country_id")]
    pub region_id: String,
    /// Human readable country name.
    #[serde(rename = "country_name")]
    pub region_name: String,
    /// ISO-style country code (e.g. "DE").
    #[serde(rename = "country_code", default)]
    pub region_code: String,
    /// The measured value, e.g. an average temperature in °C.
    pub value: f64,
    /// Name of the measurement series (e.g. "Average_Temperature"), if tagged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement: Option<String>,
}

impl RawRecord {
    pub fn month(&self) -> YearMonth {
        YearMonth::of(&self.time)
    }

    pub fn date(&self) -> NaiveDate {
        self.time.date_naive()
    }

    /// The index keys this record contributes to. Empty identifiers are skipped.
    pub fn keys(&self) -> impl Iterator<Item = RegionKey> + '_ {
        [
            RegionKey::id(&self.region_id),
            RegionKey::code(&self.region_code),
            RegionKey::name(&self.region_name),
        ]
        .into_iter()
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_upstream_field_names() {
        let json = r#"{
            "time": "2020-06-15T00:00:00Z",
            "country_id": "FR",
            "country_name": "France",
            "country_code": "FR",
            "value": 21.5,
            "measurement": "Average_Temperature"
        }"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.region_id, "FR");
        assert_eq!(record.region_name, "France");
        assert_eq!(record.month(), YearMonth::new(2020, 6).unwrap());
        assert_eq!(record.measurement.as_deref(), Some("Average_Temperature"));
    }

    #[test]
    fn test_keys_skip_missing_code() {
        let json = r#"{"time": "2020-06-15T00:00:00Z", "country_id": "GM",
                       "country_name": "Germany", "value": 9.0}"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        let keys: Vec<RegionKey> = record.keys().collect();
        assert_eq!(
            keys,
            vec![
                RegionKey::Id("GM".to_string()),
                RegionKey::Name("Germany".to_string())
            ]
        );
    }
}
