//! # Catalogue
//!
//! The SKU → [`PricingRule`] table a checkout prices against.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CatalogueBuilder ──insert()──► validated rules ──build()──► Catalogue │
//! │         ▲                                                  │            │
//! │         │                                                  ▼            │
//! │  CatalogueSpec (file) ──try_from()──────────────►  Arc<Catalogue>      │
//! │                                                            │            │
//! │                                        shared, read-only by sessions   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A catalogue is never edited once built. Sessions hold an `Arc` to it.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::pricing::{PricingRule, RuleSpec};
use crate::validation::validate_sku;

// =============================================================================
// Catalogue
// =============================================================================

/// Immutable pricing table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    rules: HashMap<String, PricingRule>,
}

impl Catalogue {
    /// Starts an empty builder.
    pub fn builder() -> CatalogueBuilder {
        CatalogueBuilder::new()
    }

    /// Looks up the rule for `sku`. Matching is exact.
    #[inline]
    pub fn rule(&self, sku: &str) -> Option<&PricingRule> {
        self.rules.get(sku)
    }

    #[inline]
    pub fn contains(&self, sku: &str) -> bool {
        self.rules.contains_key(sku)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// SKUs in sorted order.
    pub fn skus(&self) -> Vec<&str> {
        let mut skus: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        skus.sort_unstable();
        skus
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Validating builder for [`Catalogue`].
///
/// ## Usage
/// ```rust
/// use checkout_core::{Catalogue, RuleSpec};
///
/// let mut builder = Catalogue::builder();
/// builder
///     .insert("A", RuleSpec::unit(50).with_bulk(3, 130))?
///     .insert("C", RuleSpec::unit(20))?;
/// let catalogue = builder.build();
///
/// assert_eq!(catalogue.len(), 2);
/// # Ok::<(), checkout_core::ConfigError>(())
/// ```
///
/// A rejected insert leaves the builder unchanged, so interactive callers
/// can report the problem and keep going.
#[derive(Debug, Default)]
pub struct CatalogueBuilder {
    rules: HashMap<String, PricingRule>,
}

impl CatalogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and adds a rule.
    ///
    /// ## Errors
    /// - `ConfigError::Validation` for an empty SKU or a negative price
    /// - `ConfigError::InvalidBulkQuantity` for a zero-unit offer
    /// - `ConfigError::DuplicateSku` if the SKU is already present
    pub fn insert(&mut self, sku: impl Into<String>, spec: RuleSpec) -> ConfigResult<&mut Self> {
        let sku = sku.into();

        validate_sku(&sku).map_err(|source| ConfigError::Validation {
            sku: sku.clone(),
            source,
        })?;

        if self.rules.contains_key(&sku) {
            return Err(ConfigError::DuplicateSku(sku));
        }

        let rule = spec.into_rule(&sku)?;
        tracing::debug!(%sku, unit_price = rule.unit_price().cents(), has_bulk = rule.bulk().is_some(), "Pricing rule registered");
        self.rules.insert(sku, rule);
        Ok(self)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Finishes the catalogue. Every rule has already been validated.
    pub fn build(self) -> Catalogue {
        Catalogue { rules: self.rules }
    }
}

// =============================================================================
// File Representation
// =============================================================================

/// Serde shape of a catalogue file.
///
/// ```toml
/// [items.A]
/// unit_price = 50
/// bulk = { quantity = 3, price = 130 }
///
/// [items.C]
/// unit_price = 20
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogueSpec {
    #[serde(default)]
    pub items: BTreeMap<String, RuleSpec>,
}

impl TryFrom<CatalogueSpec> for Catalogue {
    type Error = ConfigError;

    fn try_from(spec: CatalogueSpec) -> ConfigResult<Self> {
        let mut builder = CatalogueBuilder::new();
        for (sku, rule) in spec.items {
            builder.insert(sku, rule)?;
        }
        Ok(builder.build())
    }
}

impl From<&Catalogue> for CatalogueSpec {
    fn from(catalogue: &Catalogue) -> Self {
        CatalogueSpec {
            items: catalogue
                .rules
                .iter()
                .map(|(sku, rule)| (sku.clone(), RuleSpec::from(rule)))
                .collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
