//! Session guard
//!
//! Purely presence-based: a stored roll number means logged in. There is no
//! token, no expiry and no server-side session.

use std::sync::Arc;

use crate::route::{Navigator, Route};
use crate::storage::{Storage, ADMIN_KEY, SESSION_KEY};
use crate::ClientResult;

#[derive(Clone)]
pub struct Auth {
    storage: Arc<dyn Storage>,
}

impl Auth {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub fn is_logged_in(&self) -> bool {
        self.roll_number().is_some()
    }

    /// Roll number of the current student
    pub fn roll_number(&self) -> Option<String> {
        self.storage.get_item(SESSION_KEY)
    }

    /// Save the student session
    pub fn login(&self, roll_number: &str) -> ClientResult<()> {
        self.storage.set_item(SESSION_KEY, roll_number)
    }

    /// Clear the student session and go back to the landing page
    pub fn logout(&self, navigator: &dyn Navigator) -> ClientResult<()> {
        self.storage.remove_item(SESSION_KEY)?;
        navigator.navigate(Route::Welcome);
        Ok(())
    }

    /// Protect a page: sends the user to the login page when no session
    /// exists. Returns the roll number when the guard passes.
    pub fn require_auth(&self, navigator: &dyn Navigator) -> Option<String> {
        let roll_number = self.roll_number();
        if roll_number.is_none() {
            navigator.navigate(Route::Login);
        }
        roll_number
    }

    pub fn is_admin(&self) -> bool {
        self.storage.get_item(ADMIN_KEY).as_deref() == Some("true")
    }

    /// Open an admin session
    pub fn grant_admin(&self) -> ClientResult<()> {
        self.storage.set_item(ADMIN_KEY, "true")
    }

    /// Admin pages: sends the user to the admin login when the flag is unset
    pub fn require_admin(&self, navigator: &dyn Navigator) -> bool {
        let ok = self.is_admin();
        if !ok {
            navigator.navigate(Route::AdminLogin);
        }
        ok
    }

    pub fn admin_logout(&self, navigator: &dyn Navigator) -> ClientResult<()> {
        self.storage.remove_item(ADMIN_KEY)?;
        navigator.navigate(Route::AdminLogin);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RecordingNavigator;
    use crate::storage::MemoryStorage;

    fn auth() -> Auth {
        Auth::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_login_logout_cycle() {
        let auth = auth();
        let nav = RecordingNavigator::new();
        assert!(!auth.is_logged_in());

        auth.login("CS101").unwrap();
        assert!(auth.is_logged_in());
        assert_eq!(auth.roll_number().as_deref(), Some("CS101"));

        auth.logout(&nav).unwrap();
        assert!(!auth.is_logged_in());
        assert_eq!(nav.last(), Some(Route::Welcome));
    }

    #[test]
    fn test_require_auth_redirects_when_missing() {
        let auth = auth();
        let nav = RecordingNavigator::new();
        assert!(auth.require_auth(&nav).is_none());
        assert_eq!(nav.last(), Some(Route::Login));

        auth.login("101").unwrap();
        assert_eq!(auth.require_auth(&nav).as_deref(), Some("101"));
        assert_eq!(nav.visited().len(), 1);
    }

    #[test]
    fn test_admin_flag() {
        let auth = auth();
        let nav = RecordingNavigator::new();
        assert!(!auth.require_admin(&nav));
        assert_eq!(nav.last(), Some(Route::AdminLogin));

        auth.grant_admin().unwrap();
        assert!(auth.is_admin());
        assert!(auth.require_admin(&nav));

        auth.admin_logout(&nav).unwrap();
        assert!(!auth.is_admin());
    }
}
