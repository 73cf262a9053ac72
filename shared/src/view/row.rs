//! Customer row aggregation
//!
//! Joins the three raw collections into one display row per profiled
//! customer and one per distinct walk-in name. Rows are rebuilt from
//! scratch on every pass; nothing is carried over between refreshes.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{ActivityStatus, Customer, DeliveryType, JarTrack, Sale};

/// Unified customer display row.
///
/// `id == None` marks a walk-in. Profile fields (`phone`, `address`,
/// `fixed_price_per_jar`, `delivery_type`, `activity_status`) are only
/// populated for profiled rows.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CustomerRow {
    pub id: Option<i64>,
    pub name: String,
    pub is_profiled: bool,
    pub current_due_jars: i64,
    pub total_due: f64,
    pub last_buy_date: Option<DateTime<Utc>>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub fixed_price_per_jar: Option<f64>,
    pub delivery_type: Option<DeliveryType>,
    pub activity_status: Option<ActivityStatus>,
}

impl CustomerRow {
    fn walkin(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            is_profiled: false,
            current_due_jars: 0,
            total_due: 0.0,
            last_buy_date: None,
            phone: None,
            address: None,
            fixed_price_per_jar: None,
            delivery_type: None,
            activity_status: None,
        }
    }
}

/// Merge customers, sales, and jar-ledger entries into display rows.
///
/// Policies:
/// - Profiled jar balance: first jar-ledger match for the customer id
///   wins (duplicate entries are a backend data-quality case, not
///   validated here).
/// - Profiled `total_due`: the backend value when present (it may
///   include linked-account dues), otherwise the sum of that
///   customer's sale dues.
/// - Walk-ins group by trimmed name, case-sensitive; sales with an
///   empty or whitespace-only name cannot form a display identity and
///   are skipped.
/// - Walk-in jar balance: the last jar-ledger entry for a name wins;
///   a jar entry with no sales still yields a zero-due row.
///
/// Output order is profiled rows in customer order, then walk-ins in
/// first-seen order; callers must not rely on it; ordering is
/// [`filter_and_sort`](crate::view::filter_and_sort)'s job.
pub fn aggregate(customers: &[Customer], sales: &[Sale], jar_tracks: &[JarTrack]) -> Vec<CustomerRow> {
    let mut rows = Vec::with_capacity(customers.len());

    for c in customers {
        let jar = jar_tracks.iter().find(|j| j.customer_id == Some(c.id));

        let mut due_from_sales = 0.0;
        let mut last_buy: Option<DateTime<Utc>> = None;
        for s in sales.iter().filter(|s| s.customer_id == Some(c.id)) {
            due_from_sales += s.due_amount;
            if last_buy.is_none_or(|d| s.date > d) {
                last_buy = Some(s.date);
            }
        }

        rows.push(CustomerRow {
            id: Some(c.id),
            name: c.name.clone(),
            is_profiled: true,
            current_due_jars: jar.map_or(0, |j| j.current_due_jars),
            total_due: c.total_due.unwrap_or(due_from_sales),
            last_buy_date: last_buy,
            phone: c.phone.clone(),
            address: c.address.clone(),
            fixed_price_per_jar: c.fixed_price_per_jar,
            delivery_type: Some(c.delivery_type),
            activity_status: Some(c.activity_status.unwrap_or_default()),
        });
    }

    // Walk-in groups, keyed by trimmed name in first-seen order.
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut walkins: Vec<CustomerRow> = Vec::new();

    for s in sales.iter().filter(|s| s.customer_id.is_none()) {
        let name = s.customer_name.as_deref().unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        let idx = *index.entry(name.to_string()).or_insert_with(|| {
            let mut row = CustomerRow::walkin(name);
            row.last_buy_date = Some(s.date);
            walkins.push(row);
            walkins.len() - 1
        });
        let row = &mut walkins[idx];
        row.total_due += s.due_amount;
        if row.last_buy_date.is_some_and(|d| s.date > d) {
            row.last_buy_date = Some(s.date);
        }
    }

    for j in jar_tracks.iter().filter(|j| j.customer_id.is_none()) {
        let name = j.customer_name.as_deref().unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        match index.get(name) {
            Some(&idx) => walkins[idx].current_due_jars = j.current_due_jars,
            None => {
                let mut row = CustomerRow::walkin(name);
                row.current_due_jars = j.current_due_jars;
                index.insert(name.to_string(), walkins.len());
                walkins.push(row);
            }
        }
    }

    rows.append(&mut walkins);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn customer(id: i64, name: &str, total_due: Option<f64>) -> Customer {
        Customer {
            id,
            name: name.to_string(),
            phone: None,
            address: None,
            fixed_price_per_jar: None,
            delivery_type: DeliveryType::SelfPickup,
            activity_status: None,
            total_due,
            parent_customer_id: None,
        }
    }

    fn walkin_sale(name: &str, due: f64, date: &str) -> Sale {
        Sale {
            id: 0,
            customer_id: None,
            customer_name: Some(name.to_string()),
            profile_name: None,
            total_jars: 1,
            customer_own_jars: 0,
            our_jars: 1,
            total_cost: due,
            amount_paid: 0.0,
            due_amount: due,
            date: dt(date),
        }
    }

    fn jar(id: i64, customer_id: Option<i64>, name: Option<&str>, due: i64) -> JarTrack {
        JarTrack {
            id,
            customer_id,
            customer_name: name.map(str::to_string),
            current_due_jars: due,
        }
    }

    #[test]
    fn test_profiled_with_backend_due_and_jar_entry() {
        // Scenario: one customer, no sales, one jar entry.
        let customers = vec![customer(1, "Ravi", Some(50.0))];
        let jars = vec![jar(9, Some(1), None, 2)];

        let rows = aggregate(&customers, &[], &jars);
        assert_eq!(rows.len(), 1);
        let r = &rows[0];
        assert_eq!(r.id, Some(1));
        assert_eq!(r.name, "Ravi");
        assert!(r.is_profiled);
        assert_eq!(r.current_due_jars, 2);
        assert_eq!(r.total_due, 50.0);
        assert_eq!(r.last_buy_date, None);
    }

    #[test]
    fn test_profiled_with_no_records_yields_zero_row() {
        let rows = aggregate(&[customer(1, "Ravi", None)], &[], &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].current_due_jars, 0);
        assert_eq!(rows[0].total_due, 0.0);
        assert_eq!(rows[0].last_buy_date, None);
        assert_eq!(rows[0].activity_status, Some(ActivityStatus::NoPattern));
    }

    #[test]
    fn test_profiled_due_falls_back_to_sale_sum() {
        let customers = vec![customer(1, "Ravi", None)];
        let sales = vec![
            Sale {
                customer_id: Some(1),
                customer_name: None,
                ..walkin_sale("", 30.0, "2024-01-01T08:00:00Z")
            },
            Sale {
                customer_id: Some(1),
                customer_name: None,
                ..walkin_sale("", 20.0, "2024-01-05T08:00:00Z")
            },
        ];

        let rows = aggregate(&customers, &sales, &[]);
        assert_eq!(rows[0].total_due, 50.0);
        assert_eq!(rows[0].last_buy_date, Some(dt("2024-01-05T08:00:00Z")));
    }

    #[test]
    fn test_profiled_first_jar_match_wins() {
        let customers = vec![customer(1, "Ravi", Some(0.0))];
        let jars = vec![jar(1, Some(1), None, 4), jar(2, Some(1), None, 9)];
        let rows = aggregate(&customers, &[], &jars);
        assert_eq!(rows[0].current_due_jars, 4);
    }

    #[test]
    fn test_walkin_sales_group_by_trimmed_name() {
        // Scenario: two walk-in sales under the same name.
        let sales = vec![
            walkin_sale("Amit", 30.0, "2024-01-01T00:00:00Z"),
            walkin_sale(" Amit ", 20.0, "2024-01-05T00:00:00Z"),
        ];

        let rows = aggregate(&[], &sales, &[]);
        assert_eq!(rows.len(), 1);
        let r = &rows[0];
        assert_eq!(r.id, None);
        assert_eq!(r.name, "Amit");
        assert!(!r.is_profiled);
        assert_eq!(r.total_due, 50.0);
        assert_eq!(r.last_buy_date, Some(dt("2024-01-05T00:00:00Z")));
    }

    #[test]
    fn test_walkin_names_are_case_sensitive() {
        let sales = vec![
            walkin_sale("amit", 10.0, "2024-01-01T00:00:00Z"),
            walkin_sale("Amit", 10.0, "2024-01-01T00:00:00Z"),
        ];
        assert_eq!(aggregate(&[], &sales, &[]).len(), 2);
    }

    #[test]
    fn test_walkin_empty_name_excluded() {
        let sales = vec![
            walkin_sale("  ", 30.0, "2024-01-01T00:00:00Z"),
            walkin_sale("Amit", 20.0, "2024-01-01T00:00:00Z"),
        ];
        let rows = aggregate(&[], &sales, &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Amit");
    }

    #[test]
    fn test_walkin_due_sum_is_conserved() {
        let sales = vec![
            walkin_sale("Amit", 30.0, "2024-01-01T00:00:00Z"),
            walkin_sale("Bina", 15.0, "2024-01-02T00:00:00Z"),
            walkin_sale("Amit", 20.0, "2024-01-03T00:00:00Z"),
            walkin_sale("", 99.0, "2024-01-04T00:00:00Z"),
        ];
        let rows = aggregate(&[], &sales, &[]);
        let named_due: f64 = sales
            .iter()
            .filter(|s| !s.customer_name.as_deref().unwrap_or("").trim().is_empty())
            .map(|s| s.due_amount)
            .sum();
        let row_due: f64 = rows.iter().map(|r| r.total_due).sum();
        assert_eq!(row_due, named_due);
    }

    #[test]
    fn test_walkin_jar_entry_seeds_and_overwrites() {
        let sales = vec![walkin_sale("Amit", 30.0, "2024-01-01T00:00:00Z")];
        let jars = vec![
            jar(1, None, Some("Amit"), 2),
            jar(2, None, Some("Amit"), 5), // last entry for a name wins
            jar(3, None, Some("Chand"), 1),
        ];

        let rows = aggregate(&[], &sales, &jars);
        assert_eq!(rows.len(), 2);

        let amit = rows.iter().find(|r| r.name == "Amit").unwrap();
        assert_eq!(amit.current_due_jars, 5);
        assert_eq!(amit.total_due, 30.0);

        // Jar-only walk-in: zero due, no purchase date.
        let chand = rows.iter().find(|r| r.name == "Chand").unwrap();
        assert_eq!(chand.current_due_jars, 1);
        assert_eq!(chand.total_due, 0.0);
        assert_eq!(chand.last_buy_date, None);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let customers = vec![customer(1, "Ravi", None), customer(2, "Sita", Some(10.0))];
        let sales = vec![
            walkin_sale("Amit", 30.0, "2024-01-01T00:00:00Z"),
            walkin_sale("Amit", 20.0, "2024-01-05T00:00:00Z"),
        ];
        let jars = vec![jar(1, Some(1), None, 3), jar(2, None, Some("Amit"), 2)];

        let a = aggregate(&customers, &sales, &jars);
        let b = aggregate(&customers, &sales, &jars);
        assert_eq!(a, b);
    }
}
