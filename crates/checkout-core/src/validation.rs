//! # Validation Module
//!
//! Field checks run while a catalogue is being built.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CatalogueBuilder::insert(sku, spec)                                    │
//! │       │                                                                 │
//! │       ├── validate_sku ──────────── empty? → Err                      │
//! │       ├── validate_price_cents ──── unit price < 0? → Err              │
//! │       ├── NonZeroU32::new ───────── 0 units per bundle? → Err          │
//! │       └── validate_price_cents ──── bundle price < 0? → Err            │
//! │                                                                         │
//! │  Scanning never validates: a SKU is either in the catalogue or not.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a SKU.
///
/// A SKU is an opaque key matched exactly at scan time, so the only rule is
/// that it is not empty. Spaces, case and length are the caller's business.
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_sku;
///
/// assert!(validate_sku("A").is_ok());
/// assert!(validate_sku("Coke 330").is_ok());
/// assert!(validate_sku("").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in the smallest currency unit.
///
/// Zero is allowed (free items, free bundles).
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("A").is_ok());
        assert!(validate_sku("product_1").is_ok());
        assert!(validate_sku("Coke 330").is_ok());
        assert!(validate_sku(" ").is_ok());
        assert!(validate_sku(&"A".repeat(500)).is_ok());

        assert!(matches!(
            validate_sku(""),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents("unit price", 0).is_ok());
        assert!(validate_price_cents("unit price", 50).is_ok());
        assert!(validate_price_cents("unit price", -1).is_err());
    }
}
