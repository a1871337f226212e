//! Table Session Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// One continuous occupancy period of a table.
///
/// Created when a table is started, closed exactly once when it is
/// stopped (`end_time` and `total` are set together by the backend).
/// Invariant: `end_time`, when present, is `>= start_time`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSession {
    pub id: i64,
    pub table_id: i64,
    /// Session open time (ISO 8601)
    pub start_time: DateTime<Utc>,
    /// Session close time, absent while the session is running
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    /// Server-priced total, present only once closed
    #[serde(default)]
    pub total: Option<Money>,
}

impl TableSession {
    /// A session is active while it has no end time.
    pub fn is_active(&self) -> bool {
        self.end_time.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_session_wire_format() {
        let json = r#"{
            "id": 12,
            "tableId": 5,
            "startTime": "2024-01-01T10:00:00Z"
        }"#;
        let session: TableSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.table_id, 5);
        assert!(session.is_active());
        assert!(session.total.is_none());
    }

    #[test]
    fn test_closed_session_wire_format() {
        let json = r#"{
            "id": 12,
            "tableId": 5,
            "startTime": "2024-01-01T10:00:00Z",
            "endTime": "2024-01-01T11:30:00Z",
            "total": 75000
        }"#;
        let session: TableSession = serde_json::from_str(json).unwrap();
        assert!(!session.is_active());
        assert_eq!(session.total, Some(Money::from_units(75_000)));
        assert!(session.end_time.unwrap() >= session.start_time);
    }
}
