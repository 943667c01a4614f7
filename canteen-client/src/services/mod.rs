//! Backend service clients
//!
//! Each service sits behind an object-safe trait so page controllers can run
//! against the real HTTP clients or any other implementation.

pub mod menu;
pub mod notification;
pub mod order;
pub mod wallet;

use std::sync::Arc;

use crate::http::{build_client, HttpClient};
use crate::{ClientConfig, ClientResult};

pub use menu::{MenuApi, MenuService};
pub use notification::{NotificationApi, NotificationService};
pub use order::{OrderApi, OrderService};
pub use wallet::{WalletApi, WalletService};

/// The four collaborators a page may talk to
#[derive(Clone)]
pub struct Services {
    pub menu: Arc<dyn MenuApi>,
    pub wallet: Arc<dyn WalletApi>,
    pub orders: Arc<dyn OrderApi>,
    pub notifications: Arc<dyn NotificationApi>,
}

impl Services {
    /// HTTP clients for every service, sharing one connection pool
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let client = build_client(config.timeout_duration())?;
        Ok(Self {
            menu: Arc::new(MenuService::new(HttpClient::with_client(
                client.clone(),
                &config.menu_url,
            ))),
            wallet: Arc::new(WalletService::new(HttpClient::with_client(
                client.clone(),
                &config.wallet_url,
            ))),
            orders: Arc::new(OrderService::new(HttpClient::with_client(
                client.clone(),
                &config.order_url,
            ))),
            notifications: Arc::new(NotificationService::new(HttpClient::with_client(
                client,
                &config.notify_url,
            ))),
        })
    }
}
