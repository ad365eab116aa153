//! Error types for building generation options.

use thiserror::Error;

/// Errors that can occur when constructing [`GenerationOptions`](crate::GenerationOptions).
///
/// Generation itself never fails; every error surfaces while the options
/// are being built or parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// An option value is outside its accepted range or vocabulary.
    #[error("invalid argument '{field}': {message}")]
    InvalidArgument {
        field: &'static str,
        message: String,
    },
}

impl IdError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        IdError::InvalidArgument {
            field,
            message: message.into(),
        }
    }

    /// Returns true if this error rejected an option value.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, IdError::InvalidArgument { .. })
    }

    /// Returns the name of the offending option.
    pub fn field(&self) -> &'static str {
        match self {
            IdError::InvalidArgument { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = IdError::invalid("randomLength", "must be >= 0, got -3");
        assert!(err.is_invalid_argument());
        assert_eq!(err.field(), "randomLength");
        assert_eq!(
            err.to_string(),
            "invalid argument 'randomLength': must be >= 0, got -3"
        );
    }
}
