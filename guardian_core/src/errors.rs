//! # Error Types
//!
//! Structured error types for guardian_core. Every form in the application
//! validates through these, and the UI turns them into error toasts via
//! [`Notification::from_error`](crate::notifications::Notification::from_error).
//!
//! ## Example
//!
//! ```rust
//! use guardian_core::errors::{GuardianError, GuardianResult};
//!
//! fn validate_phone(phone: &str) -> GuardianResult<()> {
//!     if phone.trim().is_empty() {
//!         return Err(GuardianError::invalid_input("phone", phone, "Phone must not be blank"));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for guardian_core operations
pub type GuardianResult<T> = Result<T, GuardianError>;

/// Structured error type for guardian operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum GuardianError {
    /// A form was submitted with required fields left blank.
    ///
    /// `summary` is the user-facing sentence shown in the error toast.
    #[error("{summary}")]
    IncompleteForm {
        form: String,
        missing: Vec<String>,
        summary: String,
    },

    /// An input value is invalid
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// No contact with the given id exists in the book
    #[error("Contact not found: {id}")]
    ContactNotFound { id: Uuid },

    /// Configuration could not be loaded or failed validation
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl GuardianError {
    /// Create an IncompleteForm error
    pub fn incomplete_form(
        form: impl Into<String>,
        missing: Vec<String>,
        summary: impl Into<String>,
    ) -> Self {
        GuardianError::IncompleteForm {
            form: form.into(),
            missing,
            summary: summary.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        GuardianError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ContactNotFound error
    pub fn contact_not_found(id: Uuid) -> Self {
        GuardianError::ContactNotFound { id }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        GuardianError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Check if the user can fix this error by editing the form and retrying
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GuardianError::IncompleteForm { .. } | GuardianError::InvalidInput { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            GuardianError::IncompleteForm { .. } => "INCOMPLETE_FORM",
            GuardianError::InvalidInput { .. } => "INVALID_INPUT",
            GuardianError::ContactNotFound { .. } => "CONTACT_NOT_FOUND",
            GuardianError::InvalidConfig { .. } => "INVALID_CONFIG",
            GuardianError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<figment::Error> for GuardianError {
    fn from(err: figment::Error) -> Self {
        GuardianError::invalid_config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = GuardianError::incomplete_form(
            "contact",
            vec!["name".to_string()],
            "Name and phone number are required",
        );
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("IncompleteForm"));
        let roundtrip: GuardianError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_incomplete_form_displays_summary() {
        let error = GuardianError::incomplete_form(
            "route",
            vec!["origin".to_string(), "destination".to_string()],
            "Please enter both origin and destination",
        );
        assert_eq!(error.to_string(), "Please enter both origin and destination");
        assert!(error.is_recoverable());
    }

    #[test]
    fn test_invalid_input_is_recoverable() {
        let error = GuardianError::invalid_input("setting", "wifi", "unknown setting");
        assert_eq!(error.error_code(), "INVALID_INPUT");
        assert_eq!(error.to_string(), "Invalid input for 'setting': wifi - unknown setting");
        assert!(error.is_recoverable());

        let internal = GuardianError::Internal { message: "boom".to_string() };
        assert!(!internal.is_recoverable());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(GuardianError::contact_not_found(Uuid::nil()).error_code(), "CONTACT_NOT_FOUND");
        assert_eq!(GuardianError::invalid_config("bad").error_code(), "INVALID_CONFIG");
        assert!(!GuardianError::invalid_config("bad").is_recoverable());
    }
}
