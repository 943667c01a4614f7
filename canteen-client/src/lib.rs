//! Canteen Client - page logic for the campus canteen
//!
//! Talks to the menu, wallet, order and notification services over HTTP and
//! drives the student and admin pages through the [`View`], [`Navigator`]
//! and [`Storage`] seams.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod http;
pub mod pages;
pub mod route;
pub mod services;
pub mod storage;
pub mod ui;
pub mod validator;
pub mod view;

pub use auth::Auth;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use pages::PageContext;
pub use route::{Navigator, RecordingNavigator, Route};
pub use services::{MenuApi, NotificationApi, OrderApi, Services, WalletApi};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageExt};
pub use view::{MemoryView, View};

// Re-export shared types for convenience
pub use shared::{FoodType, MenuItem, MenuItemDraft, Order, OrderStatus, Wallet};
