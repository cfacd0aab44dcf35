//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every business-rule violation collapses into `InvalidPurchase`: callers
/// are not meant to branch on which rule fired, only on accept vs reject.
/// The carried message exists for diagnostics and API responses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The purchase attempt violated a validation or business rule.
    #[error("invalid purchase: {0}")]
    InvalidPurchase(String),

    /// An identifier was invalid (e.g. parse failure at the boundary).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_purchase(msg: impl Into<String>) -> Self {
        Self::InvalidPurchase(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
