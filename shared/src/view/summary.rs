//! Summary reducers
//!
//! Folds over whatever record set is currently visible; the summary
//! bar reflects the active view, not the full dataset. Presentation
//! formats the numbers; no currency rounding happens here.

use serde::Serialize;

use super::row::CustomerRow;
use crate::models::{ActivityStatus, Expense, Sale};

/// Customer board counters.
#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq)]
pub struct CustomerSummary {
    pub total_customers: usize,
    pub active_count: usize,
    pub walkin_count: usize,
    pub total_due: f64,
    pub total_jar_due: i64,
}

/// Fold the visible rows into the board counters. Single pass.
pub fn summarize(rows: &[CustomerRow]) -> CustomerSummary {
    let mut summary = CustomerSummary::default();
    for r in rows {
        summary.total_customers += 1;
        if r.activity_status == Some(ActivityStatus::Active) {
            summary.active_count += 1;
        }
        if !r.is_profiled {
            summary.walkin_count += 1;
        }
        summary.total_due += r.total_due;
        summary.total_jar_due += r.current_due_jars;
    }
    summary
}

/// Sales page counters over the visible sales.
#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq)]
pub struct SaleSummary {
    pub count: usize,
    pub total_amount: f64,
    pub total_due: f64,
    /// Our jars that went out (jar-due contribution)
    pub total_jars: i64,
    /// Jars sold including customer-owned refills
    pub jars_sold: i64,
}

impl SaleSummary {
    pub fn from_sales(sales: &[Sale]) -> Self {
        let mut summary = SaleSummary::default();
        for s in sales {
            summary.count += 1;
            summary.total_amount += s.total_cost;
            summary.total_due += s.due_amount;
            summary.total_jars += s.our_jars;
            summary.jars_sold += s.total_jars;
        }
        summary
    }
}

/// Total of the visible expenses.
pub fn expense_total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rows_give_zero_counters() {
        let summary = summarize(&[]);
        assert_eq!(summary, CustomerSummary::default());
    }

    #[test]
    fn test_summarize_counts_and_sums() {
        let profiled = CustomerRow {
            id: Some(1),
            name: "Ravi".to_string(),
            is_profiled: true,
            current_due_jars: 2,
            total_due: 50.0,
            last_buy_date: None,
            phone: None,
            address: None,
            fixed_price_per_jar: None,
            delivery_type: None,
            activity_status: Some(ActivityStatus::Active),
        };
        let walkin = CustomerRow {
            id: None,
            name: "Amit".to_string(),
            is_profiled: false,
            current_due_jars: 1,
            total_due: 30.0,
            activity_status: None,
            ..profiled.clone()
        };

        let summary = summarize(&[profiled, walkin]);
        assert_eq!(summary.total_customers, 2);
        assert_eq!(summary.active_count, 1);
        assert_eq!(summary.walkin_count, 1);
        assert_eq!(summary.total_due, 80.0);
        assert_eq!(summary.total_jar_due, 3);
    }

    #[test]
    fn test_sale_summary_sums_all_columns() {
        let sale = |cost: f64, due: f64, ours: i64, total: i64| Sale {
            id: 0,
            customer_id: None,
            customer_name: Some("Amit".to_string()),
            profile_name: None,
            total_jars: total,
            customer_own_jars: total - ours,
            our_jars: ours,
            total_cost: cost,
            amount_paid: cost - due,
            due_amount: due,
            date: "2024-01-01T00:00:00Z".parse().unwrap(),
        };
        let summary = SaleSummary::from_sales(&[sale(60.0, 10.0, 2, 3), sale(30.0, 0.0, 1, 1)]);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_amount, 90.0);
        assert_eq!(summary.total_due, 10.0);
        assert_eq!(summary.total_jars, 3);
        assert_eq!(summary.jars_sold, 4);
    }
}
