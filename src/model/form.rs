//! Form widget state: fields, validation, submission.
//!
//! Validation runs at submit time only; while typing, values are stored
//! verbatim. An invalid submit produces per-field messages and blocks; a
//! valid submit captures the record (logged only, there is no server) and
//! raises the success flag, which the app auto-clears after 3 seconds.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::state::TextField;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Conventional address shape, the same level of checking a browser's
/// email input performs. Not RFC 5322.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles"));

/// A field that failed validation, with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Enter a valid email address")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,
}

impl ValidationError {
    /// The input this error belongs to, as an automation id.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "name-input",
            ValidationError::EmailRequired | ValidationError::EmailInvalid => "email-input",
            ValidationError::PasswordRequired | ValidationError::PasswordTooShort => {
                "password-input"
            }
        }
    }
}

/// The captured payload of a successful submit. The password never leaves
/// the widget; only its length is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subscribe: bool,
    pub password_len: usize,
}

/// The form widget's state.
#[derive(Debug, Default)]
pub struct FormModel {
    pub name: TextField,
    pub email: TextField,
    pub password: TextField,
    pub subscribe: bool,
    submitted: bool,
    errors: Vec<ValidationError>,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the success indicator is currently showing.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Validation messages from the last blocked submit.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The message for one input, if its last submit failed on it.
    pub fn error_for(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    pub fn toggle_subscribe(&mut self) {
        self.subscribe = !self.subscribe;
    }

    /// Validate the current values without changing any state.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.value().trim().is_empty() {
            errors.push(ValidationError::NameRequired);
        }

        let email = self.email.value().trim();
        if email.is_empty() {
            errors.push(ValidationError::EmailRequired);
        } else if !EMAIL_RE.is_match(email) {
            errors.push(ValidationError::EmailInvalid);
        }

        let password_len = self.password.value().chars().count();
        if password_len == 0 {
            errors.push(ValidationError::PasswordRequired);
        } else if password_len < MIN_PASSWORD_LEN {
            errors.push(ValidationError::PasswordTooShort);
        }

        errors
    }

    /// Attempt a submit. On success the captured record is returned (for
    /// the caller to log and to arm the auto-hide timer) and the success
    /// flag raises; on failure the per-field errors are stored and
    /// nothing else changes. Re-submitting while the success indicator is
    /// up is allowed and restarts the caller's 3-second window.
    pub fn submit(&mut self) -> Option<Submission> {
        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }

        self.errors.clear();
        self.submitted = true;

        let submission = Submission {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
            subscribe: self.subscribe,
            password_len: self.password.value().chars().count(),
        };
        info!(name = %submission.name, email = %submission.email, "form submitted");
        Some(submission)
    }

    /// Hide the success indicator (auto-hide timer fired).
    pub fn clear_submitted(&mut self) {
        self.submitted = false;
    }
}

// =============================================================================
// Tests
// =============================================================================
