//! Data models
//!
//! Plain records as the backend services send them. Field names follow the
//! services' camelCase JSON; money stays `f64` because that is what the
//! services store and return.

pub mod menu;
pub mod order;
pub mod wallet;

// Re-exports
pub use menu::*;
pub use order::*;
pub use wallet::*;
