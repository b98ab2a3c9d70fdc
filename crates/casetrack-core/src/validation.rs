//! Client-side field rules.
//!
//! Forms are checked before submission; a failing form is never sent to the
//! server. The rules mirror what the dashboard forms enforce and are not a
//! substitute for server-side validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// National identity card number, e.g. `42231-5495533-9`.
pub static CNIC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}-\d{7}-\d$").expect("valid CNIC regex"));

/// Pakistani phone number, e.g. `+92 300 1234567`.
pub static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+92\s?\d{3}\s?\d{6,7}$").expect("valid phone regex"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All rule violations found in one form, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn first_message(&self) -> &str {
        self.errors
            .first()
            .map(|e| e.message.as_str())
            .unwrap_or("Invalid input")
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

/// Implemented by every form payload the client can submit.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Fluent rule checker used by the `Validate` impls.
///
/// Only the first failing rule per field is recorded.
pub struct FieldRules<'a> {
    errors: &'a mut ValidationErrors,
    field: &'static str,
    value: &'a str,
    failed: bool,
}

impl<'a> FieldRules<'a> {
    pub fn new(errors: &'a mut ValidationErrors, field: &'static str, value: &'a str) -> Self {
        Self {
            errors,
            field,
            value,
            failed: false,
        }
    }

    fn fail(&mut self, message: &str) {
        if !self.failed {
            self.errors.push(self.field, message);
            self.failed = true;
        }
    }

    pub fn required(mut self, message: &str) -> Self {
        if self.value.trim().is_empty() {
            self.fail(message);
        }
        self
    }

    pub fn min_len(mut self, min: usize, message: &str) -> Self {
        if !self.failed && self.value.chars().count() < min {
            self.fail(message);
        }
        self
    }

    pub fn pattern(mut self, pattern: &Regex, message: &str) -> Self {
        if !self.failed && !pattern.is_match(self.value) {
            self.fail(message);
        }
        self
    }

    pub fn email(mut self, message: &str) -> Self {
        if !self.failed && !EMAIL_PATTERN.is_match(self.value) {
            self.fail(message);
        }
        self
    }
}

/// Shorthand for starting a rule chain.
pub fn field<'a>(
    errors: &'a mut ValidationErrors,
    name: &'static str,
    value: &'a str,
) -> FieldRules<'a> {
    FieldRules::new(errors, name, value)
}
