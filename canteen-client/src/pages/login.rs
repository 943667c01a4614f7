//! Student login

use super::{AlertSlot, PageContext};
use crate::route::Route;
use crate::ui::timing::LOGIN_REDIRECT_DELAY;
use crate::ui::{Alert, LoadingButton};
use crate::validator::is_required;

pub struct LoginPage {
    ctx: PageContext,
    alert: AlertSlot,
    button: LoadingButton,
}

impl LoginPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            alert: AlertSlot::default(),
            button: LoadingButton::new("loginBtn", "Login"),
        }
    }

    /// Submit the form. On success the session is stored and, after a short
    /// pause showing the success alert, the browser moves to the home page.
    pub async fn login(&mut self, roll_number: &str, password: &str) -> bool {
        let roll_number = roll_number.trim();

        if !is_required(roll_number) {
            self.show_error("Please enter your roll number");
            return false;
        }
        if !is_required(password) {
            self.show_error("Please enter your password");
            return false;
        }

        self.set_loading(true);

        let result = self.ctx.services.wallet.login(roll_number, password).await;
        let stored = result.and_then(|_| self.ctx.auth().login(roll_number));
        if let Err(e) = stored {
            tracing::error!(error = %e, "Login error");
            self.show_error("Invalid credentials! Please check your roll number and password.");
            self.set_loading(false);
            return false;
        }

        tracing::info!(roll_number, "Student logged in");
        self.alert.show(
            self.ctx.view.as_ref(),
            Alert::success("Login successful! Redirecting..."),
        );

        tokio::time::sleep(LOGIN_REDIRECT_DELAY).await;
        self.ctx.navigator.navigate(Route::Home);
        true
    }

    fn show_error(&mut self, message: &str) {
        self.alert
            .show(self.ctx.view.as_ref(), Alert::error(message));
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            self.button.start();
        } else {
            self.button.stop();
        }
        self.ctx.view.set_html(self.button.id(), self.button.render());
    }

    /// Alert currently shown above the form
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.current()
    }

    pub fn button(&self) -> &LoadingButton {
        &self.button
    }
}
