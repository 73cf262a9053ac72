//! Sale Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sale entity
///
/// `customer_id == None` marks a walk-in sale; `customer_name` is then
/// the only identity the record has. `due_amount = total_cost -
/// amount_paid` is maintained server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
    /// Profile name resolved by the backend for profiled sales.
    pub profile_name: Option<String>,
    pub total_jars: i64,
    /// Jars the customer brought back of their own stock.
    #[serde(default)]
    pub customer_own_jars: i64,
    /// Our jars that left with this sale (jar-due contribution).
    pub our_jars: i64,
    pub total_cost: f64,
    pub amount_paid: f64,
    pub due_amount: f64,
    pub date: DateTime<Utc>,
}

impl Sale {
    /// Walk-in sales carry no customer id.
    pub fn is_walkin(&self) -> bool {
        self.customer_id.is_none()
    }

    /// Display name: profile name when resolved, else the free-text name.
    pub fn display_name(&self) -> &str {
        self.profile_name
            .as_deref()
            .or(self.customer_name.as_deref())
            .unwrap_or("")
    }
}

/// Create sale payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreate {
    pub is_profiled: bool,
    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
    pub total_jars: i64,
    #[serde(default)]
    pub customer_own_jars: i64,
    /// Overrides the customer's fixed price when set.
    pub cost_per_jar: Option<f64>,
    pub amount_paid: f64,
    /// Backdated entry; the backend stamps "now" when absent.
    pub date: Option<DateTime<Utc>>,
}

/// Outstanding-due probe payload (`POST /sales/total-due`)
///
/// Identifies a customer either by id (profiled) or by name (walk-in).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalDueRequest {
    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
}

/// Outstanding-due probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalDueResponse {
    #[serde(default)]
    pub total_due: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_missing_optional_fields() {
        // The customers page variant of the payload omits
        // customer_own_jars and profile_name.
        let s: Sale = serde_json::from_str(
            r#"{"id": 7, "customer_id": null, "customer_name": "Amit",
                "total_jars": 2, "our_jars": 2, "total_cost": 60.0,
                "amount_paid": 30.0, "due_amount": 30.0,
                "date": "2024-01-05T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(s.is_walkin());
        assert_eq!(s.customer_own_jars, 0);
        assert_eq!(s.display_name(), "Amit");
    }

    #[test]
    fn test_display_name_prefers_profile() {
        let s: Sale = serde_json::from_str(
            r#"{"id": 8, "customer_id": 3, "customer_name": "rv",
                "profile_name": "Ravi", "total_jars": 1, "our_jars": 1,
                "total_cost": 30.0, "amount_paid": 30.0, "due_amount": 0.0,
                "date": "2024-01-05T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(s.display_name(), "Ravi");
    }
}
