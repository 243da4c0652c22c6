//! # Record Identifiers
//!
//! Generation of record ids in the `<unix-millis>-<8-hex-suffix>` form,
//! e.g. `1717171717171-9f3a1c44`.
//!
//! ## Why This Shape?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1717171717171 - 9f3a1c44                                               │
//! │  └────┬──────┘   └───┬──┘                                               │
//! │  creation instant   random suffix                                       │
//! │  (sorts roughly     (8 hex chars from a UUID v4,                        │
//! │   by insertion)      collision-safe within one instant)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are opaque strings everywhere else in the system; nothing parses
//! the embedded timestamp back out.

use chrono::Utc;
use uuid::Uuid;

/// Generates a fresh record id.
///
/// ## Example
/// ```rust
/// use stockbook_core::ident::new_record_id;
///
/// let id = new_record_id();
/// assert!(id.contains('-'));
/// ```
pub fn new_record_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", millis, &suffix[..8])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_shape() {
        let id = new_record_id();
        let (millis, suffix) = id.split_once('-').expect("id has a dash");
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = new_record_id();
        let b = new_record_id();
        assert_ne!(a, b);
    }
}
