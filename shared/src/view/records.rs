//! Generalized record filter-sort
//!
//! The sales, payments, and expenses pages share the same shape: raw
//! records → date-window filter → free-text search → sort. This
//! module factors that shape out once, parameterized over the record
//! type; the customer board keeps its own richer pipeline in
//! [`row`](super::row) / [`filter`](super::filter).

use chrono::{DateTime, Local, NaiveDate, Utc};

use super::range::{DateSelection, QuickRange};
use crate::models::{Expense, Payment, Sale};

/// A record that can pass through the date/search/sort pipeline.
pub trait DatedRecord {
    fn record_date(&self) -> DateTime<Utc>;
    /// Field the free-text search matches against.
    fn search_key(&self) -> &str;
    /// Field the amount sorts order by.
    fn amount(&self) -> f64;
    /// Categorical tag for equality filtering, when the record type
    /// has one.
    fn category(&self) -> Option<&str> {
        None
    }
}

impl DatedRecord for Sale {
    fn record_date(&self) -> DateTime<Utc> {
        self.date
    }

    fn search_key(&self) -> &str {
        self.display_name()
    }

    fn amount(&self) -> f64 {
        self.total_cost
    }

    fn category(&self) -> Option<&str> {
        Some(if self.is_walkin() { "walkin" } else { "profiled" })
    }
}

impl DatedRecord for Payment {
    fn record_date(&self) -> DateTime<Utc> {
        self.date
    }

    fn search_key(&self) -> &str {
        &self.customer_name
    }

    fn amount(&self) -> f64 {
        self.amount_paid
    }
}

impl DatedRecord for Expense {
    fn record_date(&self) -> DateTime<Utc> {
        self.date
    }

    fn search_key(&self) -> &str {
        &self.description
    }

    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Record sort order. Closed set; unknown UI values fall back to
/// `Newest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordSort {
    #[default]
    Newest,
    Oldest,
    AmountDesc,
    AmountAsc,
}

impl RecordSort {
    pub fn parse(key: &str) -> Self {
        match key {
            "oldest" => RecordSort::Oldest,
            "amount-desc" => RecordSort::AmountDesc,
            "amount-asc" => RecordSort::AmountAsc,
            _ => RecordSort::Newest,
        }
    }
}

/// Record query - the predicates and sort a page view applies.
///
/// Predicates are independent and conjunctive: date-window
/// membership, free-text match against the record's search field,
/// and category equality. An explicit calendar range replaces any
/// quick range by construction (they share the one `selection`
/// slot).
#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    pub selection: DateSelection,
    pub search: String,
    pub category: Option<String>,
    pub sort: RecordSort,
}

impl RecordQuery {
    /// No date filtering (all time).
    pub fn all() -> Self {
        Self::default()
    }

    /// Quick range relative to today.
    pub fn quick(range: QuickRange) -> Self {
        Self {
            selection: DateSelection::Quick(range),
            ..Self::default()
        }
    }

    /// Explicit inclusive calendar range; `start == end` selects a
    /// single day.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            selection: DateSelection::Calendar { start, end },
            ..Self::default()
        }
    }

    /// Add a free-text search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Add a category-equality predicate.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the sort order.
    pub fn order_by(mut self, sort: RecordSort) -> Self {
        self.sort = sort;
        self
    }

    fn matches<T: DatedRecord>(&self, record: &T, needle: &str, today: NaiveDate) -> bool {
        let local = record.record_date().with_timezone(&Local).date_naive();
        if !self.selection.contains(local, today) {
            return false;
        }
        if !needle.is_empty() && !record.search_key().to_lowercase().contains(needle) {
            return false;
        }
        if let Some(category) = self.category.as_deref() {
            if record.category() != Some(category) {
                return false;
            }
        }
        true
    }
}

/// Apply a query to a record list.
///
/// Window membership uses the record's calendar date in the caller's
/// local time zone. Sorts are stable so equal keys keep their fetch
/// order.
pub fn filter_records<T: DatedRecord + Clone>(
    records: &[T],
    query: &RecordQuery,
    today: NaiveDate,
) -> Vec<T> {
    let needle = query.search.to_lowercase();
    let mut out: Vec<T> = records
        .iter()
        .filter(|r| query.matches(*r, &needle, today))
        .cloned()
        .collect();

    match query.sort {
        RecordSort::Newest => out.sort_by_key(|r| std::cmp::Reverse(r.record_date())),
        RecordSort::Oldest => out.sort_by_key(|r| r.record_date()),
        RecordSort::AmountDesc => out.sort_by(|a, b| b.amount().total_cmp(&a.amount())),
        RecordSort::AmountAsc => out.sort_by(|a, b| a.amount().total_cmp(&b.amount())),
    }

    out
}
