//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | CANTEEN_MENU_URL | http://localhost:8081 | menu service host |
//! | CANTEEN_WALLET_URL | http://localhost:8082 | wallet service host |
//! | CANTEEN_ORDER_URL | http://localhost:8083 | order service host |
//! | CANTEEN_NOTIFY_URL | http://localhost:8084 | notification service host |
//! | CANTEEN_TIMEOUT_SECS | unset | per-request timeout, none when unset |
//! | CANTEEN_SESSION_FILE | ./canteen-session.json | file-backed session store |

use std::path::PathBuf;
use std::time::Duration;

use crate::services::Services;
use crate::ClientResult;

pub const DEFAULT_MENU_URL: &str = "http://localhost:8081";
pub const DEFAULT_WALLET_URL: &str = "http://localhost:8082";
pub const DEFAULT_ORDER_URL: &str = "http://localhost:8083";
pub const DEFAULT_NOTIFY_URL: &str = "http://localhost:8084";
pub const DEFAULT_SESSION_FILE: &str = "canteen-session.json";

/// Client configuration for the four backend services
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Menu service host (e.g., "http://localhost:8081")
    pub menu_url: String,

    /// Wallet service host
    pub wallet_url: String,

    /// Order service host
    pub order_url: String,

    /// Notification service host
    pub notify_url: String,

    /// Request timeout in seconds. `None` waits indefinitely.
    pub timeout: Option<u64>,

    /// Where [`crate::storage::FileStorage`] keeps the session
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Configuration pointing at the local default ports
    pub fn new() -> Self {
        Self {
            menu_url: DEFAULT_MENU_URL.into(),
            wallet_url: DEFAULT_WALLET_URL.into(),
            order_url: DEFAULT_ORDER_URL.into(),
            notify_url: DEFAULT_NOTIFY_URL.into(),
            timeout: None,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }

    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::new();
        Self {
            menu_url: std::env::var("CANTEEN_MENU_URL").unwrap_or(defaults.menu_url),
            wallet_url: std::env::var("CANTEEN_WALLET_URL").unwrap_or(defaults.wallet_url),
            order_url: std::env::var("CANTEEN_ORDER_URL").unwrap_or(defaults.order_url),
            notify_url: std::env::var("CANTEEN_NOTIFY_URL").unwrap_or(defaults.notify_url),
            timeout: std::env::var("CANTEEN_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
            session_file: std::env::var("CANTEEN_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
        }
    }

    /// Set the menu service host
    pub fn with_menu_url(mut self, url: impl Into<String>) -> Self {
        self.menu_url = url.into();
        self
    }

    /// Set the wallet service host
    pub fn with_wallet_url(mut self, url: impl Into<String>) -> Self {
        self.wallet_url = url.into();
        self
    }

    /// Set the order service host
    pub fn with_order_url(mut self, url: impl Into<String>) -> Self {
        self.order_url = url.into();
        self
    }

    /// Set the notification service host
    pub fn with_notify_url(mut self, url: impl Into<String>) -> Self {
        self.notify_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Set the session file path
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = path.into();
        self
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Create the HTTP-backed service clients from this configuration
    pub fn build_services(&self) -> ClientResult<Services> {
        Services::from_config(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
