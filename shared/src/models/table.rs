//! Billiard Table Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Occupancy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    Available,
    Occupied,
    Reserved,
}

impl Default for TableStatus {
    fn default() -> Self {
        Self::Available
    }
}

/// Billiard table entity
///
/// `status == Occupied` iff the backend holds an active session for the
/// table; the session itself is the authoritative record (see
/// [`super::session::TableSession`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BilliardTable {
    pub id: i64,
    pub name: String,
    pub price_per_hour: Money,
    pub status: TableStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub reservation_time: Option<DateTime<Utc>>,
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCreate {
    pub name: String,
    pub price_per_hour: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// New tables start out available
    #[serde(default)]
    pub status: TableStatus,
}

/// Update table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TableStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&TableStatus::Available).unwrap(),
            "\"AVAILABLE\""
        );
        let status: TableStatus = serde_json::from_str("\"OCCUPIED\"").unwrap();
        assert_eq!(status, TableStatus::Occupied);
    }

    #[test]
    fn test_table_deserializes_backend_row() {
        let json = r#"{
            "id": 5,
            "name": "Table 5",
            "pricePerHour": 50000,
            "status": "AVAILABLE",
            "description": null,
            "imageUrl": "/uploads/t5.png"
        }"#;
        let table: BilliardTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.id, 5);
        assert_eq!(table.price_per_hour, Money::from_units(50_000));
        assert_eq!(table.status, TableStatus::Available);
        assert!(table.reservation_time.is_none());
        assert_eq!(table.image_url.as_deref(), Some("/uploads/t5.png"));
    }
}
