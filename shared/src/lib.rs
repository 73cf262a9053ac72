//! Shared types for Aqua Tasty
//!
//! Common types used across crates: data models for the backend REST
//! API and the pure view-derivation pipeline (row aggregation,
//! filtering, sorting, summaries).

pub mod models;
pub mod view;

// Re-exports
pub use serde::{Deserialize, Serialize};

// View pipeline re-exports (for convenient access)
pub use view::{CustomerRow, CustomerSummary, RowFilter, RowSort};
