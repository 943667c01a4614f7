//! Page routes and navigation

use std::fmt;
use std::sync::{Mutex, PoisonError};
use urlencoding::encode;

/// Pages served by the order service's web front
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Landing page, target of logout
    Welcome,
    Login,
    Signup,
    Home,
    Wallet,
    History { roll_number: String },
    /// Server-side order placement; renders the home page with the result
    PlaceOrder { roll_number: String, item_id: i64 },
    AdminLogin,
    Admin,
    ForgotPassword,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Welcome => "/".into(),
            Self::Login => "/login".into(),
            Self::Signup => "/signup".into(),
            Self::Home => "/home".into(),
            Self::Wallet => "/wallet".into(),
            Self::History { roll_number } => {
                format!("/history?rollNumber={}", encode(roll_number))
            }
            Self::PlaceOrder {
                roll_number,
                item_id,
            } => format!(
                "/order-ui/place?rollNumber={}&itemId={}",
                encode(roll_number),
                item_id
            ),
            Self::AdminLogin => "/admin-login".into(),
            Self::Admin => "/admin".into(),
            Self::ForgotPassword => "/forgot-password".into(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Leaves the current page
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that only remembers where it was sent
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<Route> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.visited().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(%route, "navigate");
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}
