//! Form field predicates

use regex::Regex;
use std::sync::LazyLock;

/// Shortest password the signup and reset forms accept
pub const MIN_PASSWORD_LEN: usize = 4;

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

pub fn is_valid_email(email: &str) -> bool {
    match EMAIL_RE.as_ref() {
        Ok(re) => re.is_match(email),
        Err(_) => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weak => "😟 Weak",
            Self::Medium => "😐 Medium",
            Self::Strong => "😊 Strong",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Weak => "var(--error)",
            Self::Medium => "var(--warning)",
            Self::Strong => "var(--success)",
        }
    }
}

/// `None` for an empty password, otherwise graded by length
pub fn check_password_strength(password: &str) -> Option<PasswordStrength> {
    match password.chars().count() {
        0 => None,
        1..6 => Some(PasswordStrength::Weak),
        6..10 => Some(PasswordStrength::Medium),
        _ => Some(PasswordStrength::Strong),
    }
}

pub fn is_valid_roll_number(roll: &str) -> bool {
    is_required(roll)
}

/// Non-empty after trimming
pub fn is_required(value: &str) -> bool {
    !value.trim().is_empty()
}
