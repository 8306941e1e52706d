//! Validation errors for SkillStack payloads.

/// Result alias for core validation.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while validating domain data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// A form field failed validation
    #[error("{field}: {message}")]
    Validation {
        /// Field name as sent on the wire
        field: &'static str,
        /// Human-readable reason
        message: String,
    },

    /// A percentage or rate fell outside its declared domain
    #[error("{field} out of range: {value}")]
    DomainViolation {
        /// Field name as sent on the wire
        field: &'static str,
        /// Offending value
        value: f64,
    },
}

impl CoreError {
    /// Build a validation error.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Validation { field, .. } | Self::DomainViolation { field, .. } => field,
        }
    }
}

/// Check that a percentage lies in `[0, 100]` and is finite.
pub fn check_percentage(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(CoreError::DomainViolation { field, value })
    }
}

/// Trim a required text field, rejecting blank input.
pub(crate) fn required(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CoreError::validation(field, "This field may not be blank."))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Trim an optional text field; blank input becomes `None`.
pub(crate) fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
