//! Customer Model

use serde::{Deserialize, Serialize};

/// How jars reach the customer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DeliveryType {
    /// Customer picks jars up themselves
    #[default]
    #[serde(rename = "self")]
    SelfPickup,
    /// We deliver to the customer's address
    #[serde(rename = "delivery")]
    Delivery,
}

/// Backend-computed engagement classification.
///
/// Opaque to the client: the classifier runs server-side, we only
/// display and filter on the result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Active,
    Inactive,
    Onetime,
    Occasional,
    WasRegular,
    #[default]
    NoPattern,
}

impl ActivityStatus {
    /// Wire name, matching the backend's snake_case values.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Active => "active",
            ActivityStatus::Inactive => "inactive",
            ActivityStatus::Onetime => "onetime",
            ActivityStatus::Occasional => "occasional",
            ActivityStatus::WasRegular => "was_regular",
            ActivityStatus::NoPattern => "no_pattern",
        }
    }

    /// Parse a wire name. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(ActivityStatus::Active),
            "inactive" => Some(ActivityStatus::Inactive),
            "onetime" => Some(ActivityStatus::Onetime),
            "occasional" => Some(ActivityStatus::Occasional),
            "was_regular" => Some(ActivityStatus::WasRegular),
            "no_pattern" => Some(ActivityStatus::NoPattern),
            _ => None,
        }
    }
}

/// Profiled customer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub fixed_price_per_jar: Option<f64>,
    #[serde(default)]
    pub delivery_type: DeliveryType,
    pub activity_status: Option<ActivityStatus>,
    /// Outstanding due as computed by the backend. May include
    /// linked-account totals the client cannot derive from sales alone;
    /// when absent the client falls back to summing sale dues.
    pub total_due: Option<f64>,
    /// Combined-billing parent account, if this account is linked.
    pub parent_customer_id: Option<i64>,
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub fixed_price_per_jar: Option<f64>,
    #[serde(default)]
    pub delivery_type: DeliveryType,
}

/// Update customer payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub fixed_price_per_jar: Option<f64>,
    pub delivery_type: Option<DeliveryType>,
}

/// Convert a walk-in into a profiled customer.
///
/// `customer_name` is the walk-in's free-text identity; the backend
/// re-homes that name's sales and jar ledger onto the new profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertWalkin {
    pub customer_name: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub fixed_price_per_jar: Option<f64>,
    #[serde(default)]
    pub delivery_type: DeliveryType,
}

/// Create customer response (`POST /customers`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreated {
    pub customer: Customer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_status_wire_names() {
        let s: ActivityStatus = serde_json::from_str("\"was_regular\"").unwrap();
        assert_eq!(s, ActivityStatus::WasRegular);
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"was_regular\"");
        assert_eq!(ActivityStatus::parse("occasional"), Some(ActivityStatus::Occasional));
        assert_eq!(ActivityStatus::parse("vip"), None);
    }

    #[test]
    fn test_customer_optional_fields() {
        let c: Customer = serde_json::from_str(
            r#"{"id": 1, "name": "Ravi", "phone": null, "address": null,
                "fixed_price_per_jar": null, "activity_status": null,
                "total_due": 50.0, "parent_customer_id": null}"#,
        )
        .unwrap();
        assert_eq!(c.delivery_type, DeliveryType::SelfPickup);
        assert_eq!(c.total_due, Some(50.0));
        assert!(c.activity_status.is_none());
    }

    #[test]
    fn test_delivery_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&DeliveryType::SelfPickup).unwrap(),
            "\"self\""
        );
        let d: DeliveryType = serde_json::from_str("\"delivery\"").unwrap();
        assert_eq!(d, DeliveryType::Delivery);
    }
}
