//! Record store - raw collection snapshot
//!
//! Holds the collections as last fetched from the backend. The store
//! is a read-only snapshot per refresh cycle: refreshes replace whole
//! collections, nothing mutates them in place, and every derived view
//! is rebuilt from scratch through `shared::view`.

use chrono::NaiveDate;
use shared::models::{Customer, Expense, JarTrack, Payment, ReminderLists, Sale};
use shared::view::{self, CustomerRow, CustomerSummary, RecordQuery, RowFilter, RowSort};

/// Snapshot of the raw backend collections.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    pub customers: Vec<Customer>,
    pub sales: Vec<Sale>,
    pub jar_tracks: Vec<JarTrack>,
    pub payments: Vec<Payment>,
    pub expenses: Vec<Expense>,
    pub reminders: ReminderLists,
}

impl RecordStore {
    /// Aggregate the customer board rows from the current snapshot.
    pub fn customer_rows(&self) -> Vec<CustomerRow> {
        view::aggregate(&self.customers, &self.sales, &self.jar_tracks)
    }

    /// Aggregated, filtered, sorted rows plus their summary, the
    /// full customer-board derivation in one call. The summary
    /// reflects the visible rows, not the whole dataset.
    pub fn customer_board(
        &self,
        search: &str,
        filter: RowFilter,
        sort: RowSort,
    ) -> (Vec<CustomerRow>, CustomerSummary) {
        let rows = view::filter_and_sort(&self.customer_rows(), search, filter, sort);
        let summary = view::summarize(&rows);
        (rows, summary)
    }

    /// Sales visible under a record query.
    pub fn filtered_sales(&self, query: &RecordQuery, today: NaiveDate) -> Vec<Sale> {
        view::filter_records(&self.sales, query, today)
    }

    /// Payments visible under a record query.
    pub fn filtered_payments(&self, query: &RecordQuery, today: NaiveDate) -> Vec<Payment> {
        view::filter_records(&self.payments, query, today)
    }

    /// Expenses visible under a record query.
    pub fn filtered_expenses(&self, query: &RecordQuery, today: NaiveDate) -> Vec<Expense> {
        view::filter_records(&self.expenses, query, today)
    }
}
