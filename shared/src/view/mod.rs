//! View-derivation pipeline
//!
//! Pure, synchronous projections from the raw backend collections to
//! what a page renders: aggregate → filter/sort → summarize. Every
//! function here is referentially transparent so callers can memoize
//! against their inputs; none of them touch I/O or mutate their
//! arguments. The pages own the fetch/refresh cycle and delegate all
//! derivation to this module.

pub mod filter;
pub mod range;
pub mod records;
pub mod row;
pub mod summary;

// Re-exports
pub use filter::{RowFilter, RowSort, filter_and_sort};
pub use range::{DateSelection, QuickRange, local_today};
pub use records::{DatedRecord, RecordQuery, RecordSort, filter_records};
pub use row::{CustomerRow, aggregate};
pub use summary::{CustomerSummary, SaleSummary, expense_total, summarize};
