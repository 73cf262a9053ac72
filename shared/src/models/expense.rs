//! Expense Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Expense entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

/// Create expense payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCreate {
    pub description: String,
    pub amount: f64,
}

/// Update expense payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseUpdate {
    pub description: String,
    pub amount: f64,
}
