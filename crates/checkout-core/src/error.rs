//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  Build time (catalogue)               Scan / read time (session)        │
//! │  ├── ConfigError                      └── CheckoutError                 │
//! │  │   ├── InvalidBulkQuantity              ├── UnknownItem               │
//! │  │   │                                    └── Overflow                  │
//! │  │   ├── DuplicateSku                                                   │
//! │  │   └── Validation ──► ValidationError                                 │
//! │                                                                         │
//! │  A catalogue that fails to build never reaches a session.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Checkout Error
// =============================================================================

/// Errors raised while scanning or pricing a checkout session.
///
/// None of these corrupt the session. A rejected scan leaves the tally
/// exactly as it was, so the caller may keep scanning or give up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The SKU has no pricing rule in the catalogue.
    ///
    /// ## When This Occurs
    /// - `scan` with a SKU that was never registered
    /// - `total_price` / `applied_promotions` find a tallied SKU that the
    ///   catalogue does not know (a broken invariant, not user input)
    #[error("invalid SKU: {0}")]
    UnknownItem(String),

    /// A count or amount for the SKU does not fit its integer type.
    ///
    /// Prices and counts are unbounded, so a valid catalogue can still
    /// produce a figure past `i64::MAX` (or a count past `u32::MAX`).
    #[error("amount for {sku} exceeds the representable range")]
    Overflow { sku: String },
}

impl CheckoutError {
    /// The SKU that caused the error.
    pub fn sku(&self) -> &str {
        match self {
            CheckoutError::UnknownItem(sku) => sku,
            CheckoutError::Overflow { sku } => sku,
        }
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Catalogue construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A bulk offer needs at least one unit per bundle.
    #[error("bulk offer for {sku} must require at least 1 unit")]
    InvalidBulkQuantity { sku: String },

    /// The same SKU was registered twice.
    #[error("sku '{0}' already exists in the catalogue")]
    DuplicateSku(String),

    /// A field of the rule failed validation.
    #[error("invalid rule for {sku}: {source}")]
    Validation {
        sku: String,
        #[source]
        source: ValidationError,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Results of session operations.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

/// Results of catalogue construction.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
