//! # Pricing Rules
//!
//! Per-SKU pricing: a unit price plus an optional "buy N for P" bulk offer.
//!
//! ## Two Shapes of a Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RuleSpec (raw input)              PricingRule (validated)              │
//! │  ─────────────────────             ─────────────────────────            │
//! │  unit_price: i64          ──►      unit_price: Money (>= 0)             │
//! │  bulk: Option<BulkSpec>   ──►      bulk: Option<BulkOffer>              │
//! │    quantity: u32                     quantity: NonZeroU32               │
//! │    price: i64                        price: Money (>= 0)                │
//! │                                                                         │
//! │  Only RuleSpec::into_rule turns one into the other, so every           │
//! │  PricingRule in a catalogue has already passed validation.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Promotion Math
//! ```text
//! unit 50, bulk 3 for 130, count 7
//!
//!   bundles   = 7 / 3 = 2      → 2 × 130 = 260
//!   remainder = 7 % 3 = 1      → 1 ×  50 =  50
//!                                          ───
//!                                          310
//! ```

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::money::Money;
use crate::validation::validate_price_cents;

// =============================================================================
// Bulk Offer
// =============================================================================

/// "Buy `quantity` units for `price`", applied as many whole times as fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkOffer {
    quantity: NonZeroU32,
    price: Money,
}

impl BulkOffer {
    /// Units needed for one bundle.
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Price of one bundle.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Amount saved by buying `bundles` bundles instead of paying
    /// `unit_price` for every unit in them.
    ///
    /// Negative when the bundle costs more than its units would at unit
    /// price. `None` if the figure does not fit in [`Money`].
    pub fn savings(&self, unit_price: Money, bundles: u32) -> Option<Money> {
        let full = i128::from(unit_price.cents()) * i128::from(self.quantity.get());
        let per_bundle = full - i128::from(self.price.cents());
        per_bundle
            .checked_mul(i128::from(bundles))
            .and_then(Money::from_wide)
    }
}

// =============================================================================
// Pricing Rule
// =============================================================================

/// A validated pricing rule for one SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingRule {
    unit_price: Money,
    bulk: Option<BulkOffer>,
}

impl PricingRule {
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn bulk(&self) -> Option<&BulkOffer> {
        self.bulk.as_ref()
    }

    /// How many bundles the offer covers for `quantity` units.
    ///
    /// Zero when there is no offer or the threshold is not reached.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::RuleSpec;
    ///
    /// let rule = RuleSpec::unit(50).with_bulk(3, 130).into_rule("A").unwrap();
    /// assert_eq!(rule.bundles(2), 0);
    /// assert_eq!(rule.bundles(6), 2);
    /// assert_eq!(rule.bundles(7), 2);
    /// ```
    pub fn bundles(&self, quantity: u32) -> u32 {
        match self.bulk {
            Some(offer) if quantity >= offer.quantity() => quantity / offer.quantity(),
            _ => 0,
        }
    }

    /// Price of `quantity` units with the bulk offer applied.
    ///
    /// `None` if the price does not fit in [`Money`].
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::RuleSpec;
    ///
    /// let rule = RuleSpec::unit(50).with_bulk(3, 130).into_rule("A").unwrap();
    /// assert_eq!(rule.price_for(2).unwrap().cents(), 100);
    /// assert_eq!(rule.price_for(6).unwrap().cents(), 260);
    /// assert_eq!(rule.price_for(7).unwrap().cents(), 310);
    /// ```
    pub fn price_for(&self, quantity: u32) -> Option<Money> {
        let unit = i128::from(self.unit_price.cents());
        let cents = match self.bulk {
            Some(offer) if quantity >= offer.quantity() => {
                let bundles = quantity / offer.quantity();
                let remainder = quantity % offer.quantity();
                i128::from(offer.price().cents()) * i128::from(bundles)
                    + unit * i128::from(remainder)
            }
            _ => unit * i128::from(quantity),
        };
        Money::from_wide(cents)
    }
}

// =============================================================================
// Raw Rule Input
// =============================================================================

/// Unvalidated bulk offer as entered or read from a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BulkSpec {
    pub quantity: u32,
    pub price: i64,
}

/// Unvalidated pricing rule as entered or read from a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    pub unit_price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulk: Option<BulkSpec>,
}

impl RuleSpec {
    /// A rule with only a unit price.
    pub const fn unit(unit_price: i64) -> Self {
        RuleSpec {
            unit_price,
            bulk: None,
        }
    }

    /// Adds a "buy `quantity` for `price`" offer.
    pub const fn with_bulk(mut self, quantity: u32, price: i64) -> Self {
        self.bulk = Some(BulkSpec { quantity, price });
        self
    }

    /// Validates the raw rule into a [`PricingRule`] for `sku`.
    pub fn into_rule(self, sku: &str) -> ConfigResult<PricingRule> {
        let invalid = |source| ConfigError::Validation {
            sku: sku.to_string(),
            source,
        };

        validate_price_cents("unit price", self.unit_price).map_err(invalid)?;

        let bulk = match self.bulk {
            None => None,
            Some(spec) => {
                let quantity = NonZeroU32::new(spec.quantity).ok_or_else(|| {
                    ConfigError::InvalidBulkQuantity {
                        sku: sku.to_string(),
                    }
                })?;
                validate_price_cents("bulk price", spec.price).map_err(invalid)?;

                Some(BulkOffer {
                    quantity,
                    price: Money::from_cents(spec.price),
                })
            }
        };

        Ok(PricingRule {
            unit_price: Money::from_cents(self.unit_price),
            bulk,
        })
    }
}

impl From<&PricingRule> for RuleSpec {
    fn from(rule: &PricingRule) -> Self {
        RuleSpec {
            unit_price: rule.unit_price.cents(),
            bulk: rule.bulk.map(|offer| BulkSpec {
                quantity: offer.quantity(),
                price: offer.price().cents(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
