//! Calculation history as reported by the history store.
//!
//! Entries are owned by the store; the client only keeps an immutable
//! snapshot of the last sequence it read, in the order the store gave it.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One past calculation.
///
/// # Example
///
/// ```rust
/// use tally::core::HistoryEntry;
///
/// let entry: HistoryEntry = serde_json::from_str(
///     r#"{"id": 1, "expression": "5.0 + 3.0 = 8.0", "timestamp": "2024-05-01T09:30:00.250000"}"#,
/// ).unwrap();
///
/// assert_eq!(entry.id, 1);
/// assert_eq!(entry.expression, "5.0 + 3.0 = 8.0");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Store-assigned identifier
    pub id: i64,
    /// Human-readable expression, e.g. `"2.0 × 4.0 = 8.0"`
    pub expression: String,
    /// When the store recorded the calculation
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Timestamp in the local time zone, formatted for display.
    pub fn local_time(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

/// Parse a store timestamp.
///
/// RFC 3339 values keep their offset; naive ISO 8601 values (no offset)
/// are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// Ordered snapshot of the history store.
///
/// Immutable: [`HistoryLog::replace`] and [`HistoryLog::cleared`] return a
/// new log and leave the receiver untouched.
///
/// # Example
///
/// ```rust
/// use tally::core::{HistoryEntry, HistoryLog};
/// use chrono::Utc;
///
/// let log = HistoryLog::new();
/// let entry = HistoryEntry {
///     id: 7,
///     expression: "1.0 + 1.0 = 2.0".to_string(),
///     timestamp: Utc::now(),
/// };
///
/// let updated = log.replace(vec![entry]);
/// assert_eq!(updated.len(), 1);
/// assert!(log.is_empty()); // Original unchanged
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// A log holding `entries` in the given order.
    pub fn replace(&self, entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    /// An empty log.
    pub fn cleared(&self) -> Self {
        Self::new()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<HistoryEntry>> for HistoryLog {
    fn from(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};
    use serde_json::json;

    fn entry(id: i64, expression: &str, seconds: i64) -> HistoryEntry {
        HistoryEntry {
            id,
            expression: expression.to_string(),
            timestamp: Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap(),
        }
    }

    #[test]
    fn naive_timestamps_are_utc() {
        let ts = parse_timestamp("2024-03-10T14:05:09.123456").unwrap();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.hour(), 14);
        assert_eq!(ts.nanosecond(), 123_456_000);
    }

    #[test]
    fn naive_timestamps_without_fraction_parse() {
        let ts = parse_timestamp("2024-03-10T14:05:09").unwrap();
        assert_eq!(ts.second(), 9);
        assert_eq!(ts.nanosecond(), 0);
    }

    #[test]
    fn rfc3339_offsets_are_normalized() {
        let ts = parse_timestamp("2024-03-10T16:05:09+02:00").unwrap();
        assert_eq!(ts.hour(), 14);
    }

    #[test]
    fn garbage_timestamp_is_rejected() {
        assert!(parse_timestamp("yesterday").is_err());

        let result = serde_json::from_value::<HistoryEntry>(json!({
            "id": 1,
            "expression": "1 + 1 = 2",
            "timestamp": "yesterday",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn store_payload_ignores_extra_fields() {
        let entries: Vec<HistoryEntry> = serde_json::from_value(json!([
            {
                "id": 2,
                "num1": 2.0,
                "num2": 4.0,
                "operation": "multiply",
                "result": 8.0,
                "timestamp": "2024-03-10T14:05:10",
                "expression": "2.0 × 4.0 = 8.0",
            }
        ]))
        .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].expression, "2.0 × 4.0 = 8.0");
    }

    #[test]
    fn entry_round_trips_through_rfc3339() {
        let original = entry(3, "9.0 - 1.0 = 8.0", 0);
        let json = serde_json::to_string(&original).unwrap();
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(original, back);
    }

    #[test]
    fn replace_keeps_store_order() {
        let log = HistoryLog::new().replace(vec![
            entry(2, "b", 10),
            entry(1, "a", 0),
            entry(3, "c", 5),
        ]);

        let ids: Vec<i64> = log.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn cleared_is_immutable() {
        let log = HistoryLog::from(vec![entry(1, "a", 0)]);
        let cleared = log.cleared();

        assert!(cleared.is_empty());
        assert_eq!(log.len(), 1);
    }
}
