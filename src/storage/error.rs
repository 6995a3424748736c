//! Storage error definitions.

use thiserror::Error;

/// Errors returned by [`PersonRepository`](crate::storage::PersonRepository).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No stored person carries this identification.
    #[error("no person with identification {identification}")]
    NotFound { identification: String },

    /// The configured capacity is already used up.
    #[error("storage capacity of {capacity} persons reached")]
    CapacityExceeded { capacity: usize },
}

impl StoreError {
    pub fn not_found(identification: &str) -> Self {
        Self::NotFound {
            identification: identification.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::not_found("123");
        assert_eq!(err.to_string(), "no person with identification 123");
        assert!(err.is_not_found());

        let err = StoreError::CapacityExceeded { capacity: 2 };
        assert!(err.to_string().contains('2'));
        assert!(!err.is_not_found());
    }
}
