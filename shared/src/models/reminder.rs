//! Delivery Reminder Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reminder lifecycle state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    #[default]
    Pending,
    Completed,
    Skipped,
    Rescheduled,
}

impl ReminderStatus {
    /// Wire name. The mark-status endpoint takes this as a raw
    /// text/plain body rather than JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderStatus::Pending => "pending",
            ReminderStatus::Completed => "completed",
            ReminderStatus::Skipped => "skipped",
            ReminderStatus::Rescheduled => "rescheduled",
        }
    }
}

/// Delivery reminder entity
///
/// Profiled reminders carry a `customer_id` and a recurrence
/// `frequency` in days; custom reminders carry only a free-text
/// `custom_name` and fire once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: i64,
    pub customer_id: Option<i64>,
    pub custom_name: Option<String>,
    pub reason: String,
    #[serde(default)]
    pub frequency: i64,
    pub next_date: DateTime<Utc>,
    pub note: Option<String>,
    #[serde(default)]
    pub status: ReminderStatus,
}

/// Create/update reminder payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderCreate {
    pub customer_id: Option<i64>,
    pub custom_name: Option<String>,
    pub reason: String,
    #[serde(default)]
    pub frequency: i64,
    pub next_date: DateTime<Utc>,
    pub note: Option<String>,
    #[serde(default)]
    pub status: ReminderStatus,
}

/// Reschedule payload (`PUT /reminders/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderReschedule {
    pub next_date: DateTime<Utc>,
    pub status: ReminderStatus,
}

/// Reminder list response (`GET /reminders`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReminderLists {
    #[serde(default)]
    pub profiled: Vec<Reminder>,
    #[serde(default)]
    pub customs: Vec<Reminder>,
}
