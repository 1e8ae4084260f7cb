//! # checkout-core: Pure Pricing Engine for Titan Checkout
//!
//! This crate prices a supermarket-style checkout: a catalogue of unit
//! prices with optional "buy N for P" offers, a session that tallies scanned
//! SKUs, and the total with every offer applied as many times as it fits.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Titan Checkout Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 checkout-cli (thin I/O glue)                    │   │
//! │  │   prompts ──► catalogue files ──► scanning ──► printed summary │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ checkout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │ catalogue │  │ checkout  │  │  summary  │  │   │
//! │  │   │   Rule    │  │  Builder  │  │   scan    │  │  savings  │  │   │
//! │  │   │ BulkOffer │  │   Spec    │  │   total   │  │   lines   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO STDIN • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Integer money in the smallest currency unit
//! - [`pricing`] - Pricing rules and bulk offers
//! - [`catalogue`] - Validated SKU → rule table
//! - [`checkout`] - Scanning session and totals
//! - [`summary`] - Receipt/report view with savings
//! - [`shared`] - Mutex-guarded session handle
//! - [`validation`] - Field checks used at catalogue build time
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use checkout_core::{Catalogue, Checkout, RuleSpec};
//!
//! let mut builder = Catalogue::builder();
//! builder
//!     .insert("A", RuleSpec::unit(50).with_bulk(3, 130))?
//!     .insert("B", RuleSpec::unit(30).with_bulk(2, 45))?
//!     .insert("C", RuleSpec::unit(20))?
//!     .insert("D", RuleSpec::unit(15))?;
//!
//! let mut checkout = Checkout::new(Arc::new(builder.build()));
//! for sku in ["A", "A", "B", "B", "A", "C", "D"] {
//!     checkout.scan(sku).unwrap();
//! }
//!
//! assert_eq!(checkout.total_price().unwrap().cents(), 210);
//! # Ok::<(), checkout_core::ConfigError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalogue;
pub mod checkout;
pub mod error;
pub mod money;
pub mod pricing;
pub mod shared;
pub mod summary;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalogue::{Catalogue, CatalogueBuilder, CatalogueSpec};
pub use checkout::{Checkout, ScanOutcome, ScanPolicy};
pub use error::{CheckoutError, CheckoutResult, ConfigError, ConfigResult, ValidationError};
pub use money::Money;
pub use pricing::{BulkOffer, BulkSpec, PricingRule, RuleSpec};
pub use shared::SharedCheckout;
pub use summary::{AppliedPromotion, CheckoutSummary, LineSummary};
