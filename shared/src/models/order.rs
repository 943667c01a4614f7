//! Order Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status as reported by the order service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Confirmed,
    Failed,
    /// Any other status string, kept verbatim
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Failed => "FAILED",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "CONFIRMED" => Self::Confirmed,
            "FAILED" => Self::Failed,
            _ => Self::Other(value),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub roll_number: Option<String>,
    pub item_id: i64,
    /// Only set on orders placed after the service started recording names
    #[serde(default)]
    pub item_name: Option<String>,
    /// Item price at the time the order was placed
    pub amount: f64,
    /// Local wall-clock time of the order service (no zone)
    pub order_time: NaiveDateTime,
    pub status: OrderStatus,
}

impl Order {
    /// Recorded item name, treating an empty string as absent.
    pub fn item_name(&self) -> Option<&str> {
        self.item_name.as_deref().filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_from_service_json() {
        let json = r#"{
            "id": 12,
            "rollNumber": "101",
            "itemId": 3,
            "itemName": "Masala Chai",
            "amount": 15.0,
            "orderTime": "2026-10-19T13:05:42.118204",
            "status": "CONFIRMED"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.item_name(), Some("Masala Chai"));
        assert_eq!(order.order_time.format("%H:%M").to_string(), "13:05");
    }

    #[test]
    fn test_legacy_order_without_name() {
        let json = r#"{"id": 1, "itemId": 2, "itemName": "", "amount": 80,
                       "orderTime": "2026-01-02T09:00:00", "status": "PENDING"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert!(order.item_name().is_none());
        assert_eq!(order.status, OrderStatus::Other("PENDING".into()));
        assert_eq!(serde_json::to_value(&order).unwrap()["status"], "PENDING");
    }
}
