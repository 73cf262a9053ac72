//! Jar Tracking Model

use serde::{Deserialize, Serialize};

/// Jar-ledger entry: outstanding jars owed back to the business.
///
/// The balance is authoritative from the backend's FIFO ledger; the
/// client never recomputes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JarTrack {
    pub id: i64,
    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
    #[serde(default)]
    pub current_due_jars: i64,
}

/// Jar return payload (`POST /jartracking/return`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JarReturnRequest {
    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
    pub returned_count: i64,
}

/// Jar return response: the ledger balance after FIFO settlement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JarReturnResponse {
    #[serde(default)]
    pub remaining_due_jars: i64,
}
