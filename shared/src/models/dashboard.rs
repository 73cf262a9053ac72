//! Dashboard Statistics Model

use serde::{Deserialize, Serialize};

/// Aggregate counters for a date window (`GET /dashboard/stats`).
///
/// Computed server-side; every field defaults to zero so a partial
/// response never fails ingestion.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_sale: f64,
    #[serde(default)]
    pub sale_amount_received: f64,
    #[serde(default)]
    pub due_amount_received: f64,
    #[serde(default)]
    pub total_received: f64,
    #[serde(default)]
    pub due: f64,
    #[serde(default)]
    pub walkin_sales: i64,
    #[serde(default)]
    pub profile_sales: i64,
    #[serde(default)]
    pub total_orders: i64,
    #[serde(default)]
    pub new_customers: i64,
    #[serde(default)]
    pub total_jars_sold: i64,
    #[serde(default)]
    pub jar_due: i64,
    #[serde(default)]
    pub jar_returned: i64,
    #[serde(default)]
    pub expense: f64,
    #[serde(default)]
    pub profit: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_stats_default_to_zero() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"total_sale": 120.0, "total_orders": 4}"#).unwrap();
        assert_eq!(stats.total_sale, 120.0);
        assert_eq!(stats.total_orders, 4);
        assert_eq!(stats.profit, 0.0);
        assert_eq!(stats.jar_due, 0);
    }
}
