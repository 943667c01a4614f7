//! UI timing constants

use std::time::Duration;

/// Search input inactivity before a filter pass runs
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// How long a toast stays up
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// How long an inline error alert stays up. Success alerts stay.
pub const ALERT_ERROR_DURATION: Duration = Duration::from_secs(5);

/// Pause between a successful login and the jump to the home page
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(1000);

/// Pause between a successful signup or password reset and the login page
pub const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Placeholder cards shown while a grid loads
pub const SKELETON_CARDS: usize = 6;
