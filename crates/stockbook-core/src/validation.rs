//! # Validation Module
//!
//! Input validation for Stockbook.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form/shell (whatever frontend sits on the store crate)        │
//! │  ├── Basic format checks (empty, length)                                │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - the only enforced layer                         │
//! │  ├── Required/trimmed-non-empty fields per entity                       │
//! │  └── Length caps, sign checks, basic email shape                        │
//! │                                                                         │
//! │  There is no layer 3: snapshots are written as-is, no schema on disk.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed validation maps 1:1 to a toast message in any shell; the
//! submit aborts and nothing is persisted.

use crate::error::{ValidationError, ValidationResult};
use crate::types::{NewClient, NewProduct, NewSupplier};

/// Maximum length for names, skus, and other single-line fields.
pub const MAX_FIELD_LEN: usize = 200;

/// Maximum units in a single sale/purchase line.
pub const MAX_LINE_QUANTITY: i64 = 9_999;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a required single-line field: trimmed, non-empty, capped.
pub fn validate_required(field: &'static str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_FIELD_LEN,
        });
    }

    Ok(())
}

/// Validates an email address shape: something, an `@`, something with a
/// dot after it. Deliverability is not this layer's problem.
pub fn validate_email(field: &'static str, email: &str) -> ValidationResult<()> {
    let email = email.trim();

    validate_required(field, email)?;

    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    };

    if !valid {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a valid email address".to_string(),
        });
    }

    Ok(())
}

/// Validates a line quantity: positive, capped.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price/cost in cents: non-negative. Zero is allowed
/// (free items exist).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a product input before the record is built.
///
/// ## Rules
/// - name and sku required
/// - price non-negative
/// - min_stock non-negative (stock itself may be any sign)
pub fn validate_new_product(input: &NewProduct) -> ValidationResult<()> {
    validate_required("name", &input.name)?;
    validate_required("sku", &input.sku)?;
    validate_price_cents(input.price.cents())?;

    if input.min_stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "min_stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a client input. Only the name is required; everything else
/// on the contact card is optional.
pub fn validate_new_client(input: &NewClient) -> ValidationResult<()> {
    validate_required("name", &input.name)?;

    if let Some(email) = &input.email {
        validate_email("email", email)?;
    }

    Ok(())
}

/// Validates a supplier input: name, contact person, email, and phone
/// are all required.
pub fn validate_new_supplier(input: &NewSupplier) -> ValidationResult<()> {
    validate_required("name", &input.name)?;
    validate_required("contact_name", &input.contact_name)?;
    validate_email("email", &input.email)?;
    validate_required("phone", &input.phone)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
