//! Shared types for the canteen client
//!
//! Wire models exchanged with the menu, wallet, order and notification
//! services, plus the request/response payloads the client sends.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{FoodType, MenuItem, MenuItemDraft, Order, OrderStatus, Wallet};
