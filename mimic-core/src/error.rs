//! Error types for Mimic.
//!
//! This module provides a small error hierarchy using `thiserror`:
//!
//! - [`MimicError`] - Top-level error type
//! - [`InterfaceError`] - Errors raised by the registry itself

use thiserror::Error;

/// A boxed error type returned by method bodies.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Mimic operations.
#[derive(Error, Debug)]
pub enum MimicError {
    /// The registry rejected an operation.
    #[error("interface error: {0}")]
    Interface(#[from] InterfaceError),

    /// A dispatched method returned an error.
    #[error("method failed")]
    Method(#[source] BoxError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors raised by interface declaration, registration and classification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterfaceError {
    /// The caller supplied a malformed input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A registry invariant was violated.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl InterfaceError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        InterfaceError::InvalidArgument(msg.into())
    }

    /// Whether this is an [`InterfaceError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, InterfaceError::InvalidArgument(_))
    }

    /// Whether this is an [`InterfaceError::InvalidState`].
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, InterfaceError::InvalidState(_))
    }
}

impl From<BoxError> for MimicError {
    fn from(err: BoxError) -> Self {
        MimicError::Custom(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InterfaceError::InvalidArgument("method `fly` is not declared".into());
        assert_eq!(
            err.to_string(),
            "invalid argument: method `fly` is not declared"
        );

        let top: MimicError = err.into();
        assert!(matches!(top, MimicError::Interface(_)));
        assert_eq!(
            top.to_string(),
            "interface error: invalid argument: method `fly` is not declared"
        );
    }

    #[test]
    fn test_kind_helpers() {
        assert!(InterfaceError::InvalidState("x".into()).is_invalid_state());
        assert!(!InterfaceError::InvalidState("x".into()).is_invalid_argument());
    }
}
