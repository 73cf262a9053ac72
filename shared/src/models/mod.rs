//! Data models
//!
//! Mirrors the backend REST API response shapes. Collection endpoints
//! return bare JSON arrays of these records. All IDs are `i64`,
//! backend-assigned. Timestamps are RFC 3339 (`DateTime<Utc>`).

pub mod customer;
pub mod dashboard;
pub mod expense;
pub mod jar_track;
pub mod payment;
pub mod reminder;
pub mod sale;

// Re-exports
pub use customer::*;
pub use dashboard::*;
pub use expense::*;
pub use jar_track::*;
pub use payment::*;
pub use reminder::*;
pub use sale::*;
