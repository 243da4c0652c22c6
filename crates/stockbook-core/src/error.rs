//! # Error Types
//!
//! Domain-specific error types for stockbook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockbook-core errors (this file)                                      │
//! │  ├── CoreError        - Business rule violations                        │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  stockbook-store errors (separate crate)                                │
//! │  └── StoreError       - Snapshot persistence failures                   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → caller                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, ID, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//!
//! Note: a store-level `update`/`remove` against a missing id is NOT an
//! error anywhere in this system. It is silently absorbed (the mutation
//! reports whether it matched). Only the service-level flows below signal
//! typed not-found errors, because they are about to touch stock.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations raised by the
/// inventory flows (recording sales, receiving purchases). They should be
/// caught and translated to user-friendly messages by the shell.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A sale or purchase line references a product that does not exist.
    ///
    /// ## When This Occurs
    /// - Product was deleted while a draft was being composed
    /// - A stale id from an old snapshot
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A purchase draft references a supplier that does not exist.
    #[error("Supplier not found: {0}")]
    SupplierNotFound(String),

    /// Insufficient stock to complete a sale.
    ///
    /// ## When This Occurs
    /// - Trying to sell more units than are on hand
    ///
    /// The raw product store never enforces this (manual adjustments may
    /// drive stock negative); only the sale flow checks it, before any
    /// write happens.
    #[error("Insufficient stock for {sku}: available {available}, requested {requested}")]
    InsufficientStock {
        sku: String,
        available: i64,
        requested: i64,
    },

    /// A sale draft with no line items.
    #[error("Sale must contain at least one item")]
    EmptySale,

    /// A purchase draft with no line items.
    #[error("Purchase must contain at least one item")]
    EmptyPurchase,

    /// Purchase not found.
    #[error("Purchase not found: {0}")]
    PurchaseNotFound(String),

    /// The purchase is not in a status that allows the requested transition.
    ///
    /// ## When This Occurs
    /// - Receiving an already received purchase
    /// - Cancelling a received purchase
    ///
    /// `Received` and `Cancelled` are terminal; only `Pending` moves.
    #[error("Purchase {id} is {current}, cannot perform transition")]
    InvalidPurchaseStatus { id: String, current: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before any record is built.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            sku: "KB-MECH-87".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for KB-MECH-87: available 3, requested 5"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "sku".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_purchase_status_message() {
        let err = CoreError::InvalidPurchaseStatus {
            id: "1700000000000-a1b2c3d4".to_string(),
            current: "received".to_string(),
        };
        assert!(err.to_string().contains("received"));
    }
}
