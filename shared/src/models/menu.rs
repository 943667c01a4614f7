//! Menu Model

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dietary type of a menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FoodType {
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
    /// Anything the menu service sends that is neither of the above
    #[default]
    #[serde(other)]
    Unknown,
}

impl FoodType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Veg => "Veg",
            Self::NonVeg => "Non-Veg",
            Self::Unknown => "Unknown",
        }
    }

    pub fn is_veg(&self) -> bool {
        matches!(self, Self::Veg)
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for FoodType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "Veg" => Self::Veg,
            "Non-Veg" => Self::NonVeg,
            _ => Self::Unknown,
        })
    }
}

/// The menu service stores these columns as nullable; `null` reads as the
/// field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// e.g. "Snacks", "Drinks"
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub food_type: FoodType,
    /// Flag as stored by the menu service. Rendering goes by
    /// [`MenuItem::is_available`] instead.
    #[serde(default)]
    pub available: bool,
}

impl MenuItem {
    /// An item can be ordered iff it has stock left.
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    pub fn is_low_stock(&self) -> bool {
        (1..=5).contains(&self.quantity)
    }

    pub fn is_bestseller(&self) -> bool {
        self.quantity > 50
    }
}

/// Add/update payload posted by the admin console.
///
/// `id == None` creates a new item; the menu service treats a present id as
/// an update of that row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDraft {
    pub id: Option<i64>,
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub food_type: FoodType,
    pub price: f64,
    pub quantity: i32,
    pub is_available: bool,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_from_service_json() {
        let json = r#"{
            "id": 5,
            "name": "Chicken Momos",
            "category": "Snacks",
            "price": 100.0,
            "available": false,
            "imageUrl": "https://placehold.co/600x400/grey/white?text=Momos",
            "type": "Non-Veg",
            "quantity": 0
        }"#;

        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 5);
        assert_eq!(item.food_type, FoodType::NonVeg);
        assert!(!item.is_available());
        assert!(!item.is_bestseller());
    }

    #[test]
    fn test_unknown_food_type_is_tolerated() {
        let json = r#"{"id": 1, "name": "Jain Thali", "price": 70, "type": "Jain", "quantity": 3}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.food_type, FoodType::Unknown);
        assert!(item.is_low_stock());
        assert!(item.image_url.is_none());
    }

    #[test]
    fn test_null_columns_read_as_defaults() {
        let json = r#"[{"id": 7, "name": "Samosa", "category": null, "price": 20.0,
                        "available": true, "imageUrl": null, "type": null, "quantity": 5},
                       {"id": 8, "name": null, "category": "Snacks", "price": 10.0,
                        "type": "Veg", "quantity": 0}]"#;
        let items: Vec<MenuItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].category, "");
        assert_eq!(items[0].food_type, FoodType::Unknown);
        assert!(items[0].is_available());
        assert_eq!(items[1].name, "");
        assert_eq!(items[1].food_type, FoodType::Veg);
    }

    #[test]
    fn test_draft_uses_service_field_names() {
        let draft = MenuItemDraft {
            id: None,
            name: "Veg Burger".into(),
            category: "Snacks".into(),
            food_type: FoodType::Veg,
            price: 50.0,
            quantity: 10,
            is_available: true,
            image_url: "x".into(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value["id"].is_null());
        assert_eq!(value["type"], "Veg");
        assert_eq!(value["isAvailable"], true);
        assert_eq!(value["imageUrl"], "x");
    }

    #[test]
    fn test_food_type_parse() {
        assert_eq!("Non-Veg".parse::<FoodType>().unwrap(), FoodType::NonVeg);
        assert_eq!(" Veg ".parse::<FoodType>().unwrap(), FoodType::Veg);
        assert_eq!("vegan".parse::<FoodType>().unwrap(), FoodType::Unknown);
    }
}
