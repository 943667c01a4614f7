//! Page controllers
//!
//! One controller per page. Each follows the same cycle: guard the session,
//! fetch what it needs, render fragments into the [`View`], then react to
//! user actions with another fetch/mutate/render round or a navigation.
//!
//! Actions are not sequenced against each other. A slow response can land
//! after a newer action has already re-rendered, and it will overwrite that
//! newer view.

pub mod admin;
pub mod forgot_password;
pub mod history;
pub mod home;
pub mod login;
pub mod signup;
pub mod wallet;

use std::sync::Arc;

use crate::auth::Auth;
use crate::route::Navigator;
use crate::services::Services;
use crate::storage::Storage;
use crate::ui::{Alert, Expiring};
use crate::view::View;

pub use admin::{AdminForm, AdminPage};
pub use forgot_password::{ForgotPasswordPage, ResetStep};
pub use history::HistoryPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use signup::SignupPage;
pub use wallet::WalletPage;

/// Container for inline form alerts
pub const ALERT_TARGET: &str = "alertMessage";

/// Everything a page needs from its environment
#[derive(Clone)]
pub struct PageContext {
    pub services: Services,
    pub storage: Arc<dyn Storage>,
    pub view: Arc<dyn View>,
    pub navigator: Arc<dyn Navigator>,
}

impl PageContext {
    pub fn new(
        services: Services,
        storage: Arc<dyn Storage>,
        view: Arc<dyn View>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            services,
            storage,
            view,
            navigator,
        }
    }

    pub fn auth(&self) -> Auth {
        Auth::new(self.storage.clone())
    }
}

/// The inline alert of a form page
#[derive(Debug, Default)]
pub struct AlertSlot {
    current: Option<Expiring<Alert>>,
}

impl AlertSlot {
    pub fn show(&mut self, view: &dyn View, alert: Alert) {
        view.set_html(ALERT_TARGET, alert.render());
        let ttl = alert.ttl();
        self.current = Some(Expiring::new(alert, ttl));
    }

    /// Alert still visible, if any
    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref().and_then(|a| a.get())
    }
}
