//! Dashboard Stats Model

use serde::{Deserialize, Serialize};

/// Headline counters shown on the admin dashboard.
///
/// Every field defaults to zero; the backend omits counters it cannot
/// compute.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub table_count: u64,
    #[serde(default)]
    pub product_count: u64,
    #[serde(default)]
    pub employee_count: u64,
    #[serde(default)]
    pub today_invoice_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_counters_default_to_zero() {
        let stats: DashboardStats = serde_json::from_str(r#"{"tableCount": 8}"#).unwrap();
        assert_eq!(stats.table_count, 8);
        assert_eq!(stats.today_invoice_count, 0);
    }
}
