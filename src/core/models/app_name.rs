//! Application name field
//!
//! The tag attached to uploads and optionally forwarded with checks.

use crate::core::error::WorkflowError;

/// The session-wide application name plus its "missing name" alert flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppNameField {
    value: String,
    alert: bool,
}

impl AppNameField {
    /// Create a field holding `value`
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            alert: false,
        }
    }

    /// Replace the value unconditionally and clear the alert
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.alert = false;
    }

    /// The value exactly as entered
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the value is empty or whitespace-only
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// The value to forward with a check, if any
    #[must_use]
    pub fn value_if_present(&self) -> Option<&str> {
        if self.is_blank() { None } else { Some(&self.value) }
    }

    /// Gate an upload on a non-blank name
    ///
    /// Raises the alert flag on failure.
    pub fn validate_for_upload(&mut self) -> Result<&str, WorkflowError> {
        if self.is_blank() {
            self.alert = true;
            return Err(WorkflowError::MissingAppName);
        }
        Ok(&self.value)
    }

    /// Whether the missing-name alert is currently raised
    #[must_use]
    pub const fn alert_raised(&self) -> bool {
        self.alert
    }
}
