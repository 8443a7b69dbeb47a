//! Error types for the calorie engine

use thiserror::Error;

/// Errors raised by the calorie engine
///
/// The engine either returns a fully populated output or one of these;
/// it never hands back a partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid {field}: {message}")]
    InvalidInput { field: String, message: String },

    #[error("Computation error: {0}")]
    Computation(String),
}

impl EngineError {
    /// Build an `InvalidInput` error for a named field
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Field name for validation errors
    pub fn field(&self) -> Option<&str> {
        match self {
            EngineError::InvalidInput { field, .. } => Some(field),
            EngineError::Computation(_) => None,
        }
    }
}

/// Result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_field() {
        let err = EngineError::invalid("weight", "Weight is required");
        assert_eq!(err.to_string(), "Invalid weight: Weight is required");
        assert_eq!(err.field(), Some("weight"));
    }

    #[test]
    fn test_computation_error_has_no_field() {
        let err = EngineError::Computation("non-finite BMR".to_string());
        assert!(err.field().is_none());
    }
}
