//! Payment Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment entity: a collection event against outstanding dues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub customer_id: Option<i64>,
    pub customer_name: String,
    pub amount_paid: f64,
    pub date: DateTime<Utc>,
}

/// Pay-due payload (`POST /sales/paydue`)
///
/// The backend applies the amount to the oldest outstanding sales
/// first (FIFO); the client only submits the total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayDueRequest {
    pub amount: f64,
    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
}

/// Pay-due response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayDueResponse {
    pub paid_amount: f64,
    /// Outstanding due after settlement.
    pub total_due_now: f64,
}
