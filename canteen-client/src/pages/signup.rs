//! Student registration

use super::{AlertSlot, PageContext};
use crate::route::Route;
use crate::ui::timing::SIGNUP_REDIRECT_DELAY;
use crate::ui::{Alert, LoadingButton};
use crate::validator::{check_password_strength, is_required, MIN_PASSWORD_LEN};

pub const STRENGTH_BAR: &str = "strengthBar";
pub const STRENGTH_LABEL: &str = "strengthLabel";

/// Strength bar and label for the password typed so far
pub fn password_strength_html(password: &str) -> (String, String) {
    match check_password_strength(password) {
        None => (
            r#"<div class="password-strength-bar" style="width: 0%"></div>"#.to_string(),
            String::new(),
        ),
        Some(strength) => (
            format!(
                r#"<div class="password-strength-bar strength-{}"></div>"#,
                strength.as_str()
            ),
            format!(
                r#"<span style="color: {}">{}</span>"#,
                strength.color(),
                strength.label()
            ),
        ),
    }
}

pub struct SignupPage {
    ctx: PageContext,
    alert: AlertSlot,
    button: LoadingButton,
}

impl SignupPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            alert: AlertSlot::default(),
            button: LoadingButton::new("signupBtn", "Create Account"),
        }
    }

    /// Password field input
    pub fn password_input(&self, password: &str) {
        let (bar, label) = password_strength_html(password);
        self.ctx.view.set_html(STRENGTH_BAR, bar);
        self.ctx.view.set_html(STRENGTH_LABEL, label);
    }

    /// Submit the form. Every field is checked before anything is sent.
    pub async fn signup(&mut self, student_name: &str, roll_number: &str, password: &str) -> bool {
        let student_name = student_name.trim();
        let roll_number = roll_number.trim();

        if !is_required(student_name) {
            self.show_error("Please enter your full name");
            return false;
        }
        if !is_required(roll_number) {
            self.show_error("Please enter your roll number");
            return false;
        }
        if !is_required(password) {
            self.show_error("Please enter a password");
            return false;
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            self.show_error("Password must be at least 4 characters long");
            return false;
        }

        self.set_loading(true);

        if let Err(e) = self
            .ctx
            .services
            .wallet
            .register(student_name, roll_number, password)
            .await
        {
            tracing::error!(error = %e, "Signup error");
            let message = if e.to_string().contains("already") {
                "Roll number already registered! Please login instead."
            } else {
                "Registration failed. Please try again."
            };
            self.show_error(message);
            self.set_loading(false);
            return false;
        }

        tracing::info!(roll_number, "Student registered");
        self.alert.show(
            self.ctx.view.as_ref(),
            Alert::success(
                "Registration Successful! You received ₹500 welcome bonus. Redirecting to login...",
            ),
        );

        tokio::time::sleep(SIGNUP_REDIRECT_DELAY).await;
        self.ctx.navigator.navigate(Route::Login);
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

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.current()
    }

    pub fn button(&self) -> &LoadingButton {
        &self.button
    }
}
