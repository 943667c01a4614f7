//! Password recovery: confirm identity, then choose a new password

use super::{AlertSlot, PageContext};
use crate::route::Route;
use crate::ui::timing::SIGNUP_REDIRECT_DELAY;
use crate::ui::{Alert, LoadingButton};
use crate::validator::{is_required, MIN_PASSWORD_LEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetStep {
    Verify,
    /// Identity confirmed for this roll number
    NewPassword { roll_number: String },
}

pub struct ForgotPasswordPage {
    ctx: PageContext,
    alert: AlertSlot,
    step: ResetStep,
    verify_button: LoadingButton,
    reset_button: LoadingButton,
}

impl ForgotPasswordPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            alert: AlertSlot::default(),
            step: ResetStep::Verify,
            verify_button: LoadingButton::new("verifyBtn", "Verify"),
            reset_button: LoadingButton::new("resetBtn", "Reset Password"),
        }
    }

    /// Step one: roll number and name must match the wallet record
    pub async fn verify(&mut self, roll_number: &str, student_name: &str) -> bool {
        let roll_number = roll_number.trim();
        let student_name = student_name.trim();

        if !is_required(roll_number) {
            self.show_error("Please enter your roll number");
            return false;
        }
        if !is_required(student_name) {
            self.show_error("Please enter your full name");
            return false;
        }

        self.verify_button.start();
        let result = self
            .ctx
            .services
            .wallet
            .verify_student(roll_number, student_name)
            .await;
        self.verify_button.stop();

        match result {
            Ok(response) if response.verified => {
                self.step = ResetStep::NewPassword {
                    roll_number: roll_number.to_string(),
                };
                self.show(Alert::success(response.message));
                true
            }
            Ok(response) => {
                self.show_error(&response.message);
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "Verification error");
                self.show_error("Verification failed. Please try again.");
                false
            }
        }
    }

    /// Step two: store the new password and return to the login page
    pub async fn reset_password(&mut self, new_password: &str, confirm_password: &str) -> bool {
        let ResetStep::NewPassword { roll_number } = self.step.clone() else {
            self.show_error("Please verify your identity first");
            return false;
        };

        if new_password.chars().count() < MIN_PASSWORD_LEN {
            self.show_error("Password must be at least 4 characters long");
            return false;
        }
        if new_password != confirm_password {
            self.show_error("Passwords do not match");
            return false;
        }

        self.reset_button.start();
        let result = self
            .ctx
            .services
            .wallet
            .reset_password(&roll_number, new_password)
            .await;
        self.reset_button.stop();

        match result {
            Ok(response) if response.success => {
                tracing::info!(roll_number = %roll_number, "Password reset");
                self.show(Alert::success(format!(
                    "{}! Redirecting to login...",
                    response.message
                )));
                tokio::time::sleep(SIGNUP_REDIRECT_DELAY).await;
                self.ctx.navigator.navigate(Route::Login);
                true
            }
            Ok(response) => {
                self.show_error(&response.message);
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "Password reset error");
                self.show_error("Failed to reset password");
                false
            }
        }
    }

    fn show(&mut self, alert: Alert) {
        self.alert.show(self.ctx.view.as_ref(), alert);
    }

    fn show_error(&mut self, message: &str) {
        self.show(Alert::error(message));
    }

    pub fn step(&self) -> &ResetStep {
        &self.step
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.current()
    }
}
