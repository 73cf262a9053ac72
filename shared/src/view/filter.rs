//! Row filtering and sorting
//!
//! Reduces the aggregated row list to what the current UI state should
//! display: search → categorical filter → sort, in that order.

use chrono::DateTime;

use super::row::CustomerRow;
use crate::models::ActivityStatus;

/// Categorical row filter. Closed set; unknown UI values fall back to
/// `All` rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowFilter {
    #[default]
    All,
    /// Outstanding money due
    Due,
    /// Outstanding jars due
    JarDue,
    Profiled,
    Walkin,
    Status(ActivityStatus),
}

impl RowFilter {
    /// Parse a UI filter key. Unmatched values behave as `All`.
    pub fn parse(key: &str) -> Self {
        match key {
            "due" => RowFilter::Due,
            "jar-due" => RowFilter::JarDue,
            "profiled" => RowFilter::Profiled,
            "walkin" => RowFilter::Walkin,
            _ => ActivityStatus::parse(key).map_or(RowFilter::All, RowFilter::Status),
        }
    }

    pub fn matches(&self, row: &CustomerRow) -> bool {
        match self {
            RowFilter::All => true,
            RowFilter::Due => row.total_due > 0.0,
            RowFilter::JarDue => row.current_due_jars > 0,
            RowFilter::Profiled => row.is_profiled,
            RowFilter::Walkin => !row.is_profiled,
            RowFilter::Status(s) => row.activity_status == Some(*s),
        }
    }
}

/// Row sort order. All orders are descending; ties keep the
/// aggregation order (stable sort) so tables render predictably
/// across re-renders with unchanged data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowSort {
    /// Descending by outstanding jars
    #[default]
    Jars,
    /// Descending by outstanding amount
    Amount,
    /// Most recent purchase first; rows with no purchase sort last
    Recent,
}

impl RowSort {
    /// Parse a UI sort key. Unmatched values behave as `Jars`.
    pub fn parse(key: &str) -> Self {
        match key {
            "amount" => RowSort::Amount,
            "recent" => RowSort::Recent,
            _ => RowSort::Jars,
        }
    }
}

/// Apply search, filter, and sort to the aggregated rows.
///
/// Search is a case-insensitive substring match against the row name;
/// an empty search matches everything. Sort runs last, over the
/// already-reduced set.
pub fn filter_and_sort(
    rows: &[CustomerRow],
    search: &str,
    filter: RowFilter,
    sort: RowSort,
) -> Vec<CustomerRow> {
    let needle = search.to_lowercase();
    let mut out: Vec<CustomerRow> = rows
        .iter()
        .filter(|r| needle.is_empty() || r.name.to_lowercase().contains(&needle))
        .filter(|r| filter.matches(r))
        .cloned()
        .collect();

    match sort {
        RowSort::Jars => out.sort_by(|a, b| b.current_due_jars.cmp(&a.current_due_jars)),
        RowSort::Amount => out.sort_by(|a, b| b.total_due.total_cmp(&a.total_due)),
        RowSort::Recent => out.sort_by(|a, b| {
            let key = |r: &CustomerRow| r.last_buy_date.unwrap_or(DateTime::UNIX_EPOCH);
            key(b).cmp(&key(a))
        }),
    }

    out
}
