// aqua-client/tests/session_test.rs
// Session and store behavior that needs no running backend.

use aqua_client::{ClientConfig, RecordStore, Session};
use shared::models::{Customer, DeliveryType, JarTrack, Sale};
use shared::view::{RowFilter, RowSort};

#[test]
fn test_config_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, "http://localhost:8000");
    assert_eq!(config.timeout, 30);

    let config = ClientConfig::new("http://10.0.0.5:9000/").with_timeout(5);
    assert_eq!(config.timeout, 5);
}

#[tokio::test]
async fn test_new_session_starts_empty() {
    let session = Session::new(&ClientConfig::default());
    assert!(session.store().customers.is_empty());
    assert!(session.store().sales.is_empty());

    let (rows, summary) = session.store().customer_board("", RowFilter::All, RowSort::Jars);
    assert!(rows.is_empty());
    assert_eq!(summary.total_customers, 0);
    assert_eq!(summary.total_due, 0.0);
}

#[test]
fn test_store_board_derivation_end_to_end() {
    let store = RecordStore {
        customers: vec![Customer {
            id: 1,
            name: "Ravi".to_string(),
            phone: None,
            address: None,
            fixed_price_per_jar: Some(30.0),
            delivery_type: DeliveryType::Delivery,
            activity_status: None,
            total_due: Some(50.0),
            parent_customer_id: None,
        }],
        sales: vec![Sale {
            id: 10,
            customer_id: None,
            customer_name: Some("Amit".to_string()),
            profile_name: None,
            total_jars: 2,
            customer_own_jars: 0,
            our_jars: 2,
            total_cost: 60.0,
            amount_paid: 40.0,
            due_amount: 20.0,
            date: "2024-01-05T10:00:00Z".parse().unwrap(),
        }],
        jar_tracks: vec![JarTrack {
            id: 9,
            customer_id: Some(1),
            customer_name: None,
            current_due_jars: 2,
        }],
        ..RecordStore::default()
    };

    let (rows, summary) = store.customer_board("", RowFilter::All, RowSort::Amount);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Ravi");
    assert_eq!(rows[1].name, "Amit");
    assert_eq!(summary.total_due, 70.0);
    assert_eq!(summary.total_jar_due, 2);
    assert_eq!(summary.walkin_count, 1);

    // Only Ravi has jars outstanding.
    let (jar_rows, _) = store.customer_board("", RowFilter::JarDue, RowSort::Jars);
    assert_eq!(jar_rows.len(), 1);
    assert_eq!(jar_rows[0].name, "Ravi");
}
