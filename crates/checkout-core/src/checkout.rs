//! # Checkout Session
//!
//! Accumulates scanned SKUs against a [`Catalogue`] and prices the tally.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Session Operations                          │
//! │                                                                         │
//! │  Caller                    Session                  Tally change        │
//! │  ──────                    ───────                  ────────────        │
//! │                                                                         │
//! │  Checkout::new(cat) ─────► empty tally ──────────► {}                   │
//! │                                                                         │
//! │  scan("A") ──────────────► rule exists? ── yes ──► {A: n + 1}           │
//! │                                   │                                     │
//! │                                   └─ no ─► UnknownItem("A"), unchanged  │
//! │                                                                         │
//! │  total_price() ──────────► Σ rule.price_for(count), checked (read only) │
//! │  applied_promotions() ───► {sku: bundles} where bundles > 0 (read only) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! A session has no internal locking. One session per worker, or wrap it in
//! [`SharedCheckout`](crate::SharedCheckout).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalogue::Catalogue;
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::pricing::PricingRule;
use crate::summary::CheckoutSummary;

// =============================================================================
// Scan Policy
// =============================================================================

/// What `scan_all` does with a SKU the catalogue does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPolicy {
    /// Record the rejection and keep scanning.
    SkipUnknown,
    /// Stop at the first unknown SKU and return its error.
    #[default]
    Abort,
}

impl FromStr for ScanPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" | "skip_unknown" => Ok(ScanPolicy::SkipUnknown),
            "abort" => Ok(ScanPolicy::Abort),
            other => Err(format!("unknown scan policy '{}' (expected skip or abort)", other)),
        }
    }
}

impl fmt::Display for ScanPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanPolicy::SkipUnknown => f.write_str("skip"),
            ScanPolicy::Abort => f.write_str("abort"),
        }
    }
}

/// Result of a `scan_all` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Number of scans that reached the tally.
    pub accepted: usize,
    /// Scans rejected under [`ScanPolicy::SkipUnknown`], in input order.
    pub rejected: Vec<CheckoutError>,
}

impl ScanOutcome {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

// =============================================================================
// Checkout
// =============================================================================

/// A single checkout session.
#[derive(Debug, Clone)]
pub struct Checkout {
    id: Uuid,
    started_at: DateTime<Utc>,
    catalogue: Arc<Catalogue>,
    tally: BTreeMap<String, u32>,
}

impl Checkout {
    /// Opens a session with an empty tally.
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        let checkout = Checkout {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            catalogue,
            tally: BTreeMap::new(),
        };
        debug!(session = %checkout.id, rules = checkout.catalogue.len(), "Checkout session opened");
        checkout
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[inline]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Adds one unit of `sku` to the tally.
    ///
    /// ## Errors
    /// - `CheckoutError::UnknownItem` if the catalogue has no rule for `sku`
    /// - `CheckoutError::Overflow` if `sku` already has `u32::MAX` units
    ///
    /// The tally is untouched in both cases.
    pub fn scan(&mut self, sku: &str) -> CheckoutResult<()> {
        if !self.catalogue.contains(sku) {
            info!(session = %self.id, %sku, "Rejected scan of unknown SKU");
            return Err(CheckoutError::UnknownItem(sku.to_string()));
        }

        let count = self.count(sku).checked_add(1).ok_or_else(|| overflow(sku))?;
        self.tally.insert(sku.to_string(), count);
        debug!(session = %self.id, %sku, count, "Item scanned");
        Ok(())
    }

    /// Scans a sequence of SKUs under `policy`.
    ///
    /// With [`ScanPolicy::Abort`] the SKUs before the failing one stay in
    /// the tally.
    pub fn scan_all<I, S>(&mut self, skus: I, policy: ScanPolicy) -> CheckoutResult<ScanOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcome = ScanOutcome::default();

        for sku in skus {
            match self.scan(sku.as_ref()) {
                Ok(()) => outcome.accepted += 1,
                Err(err) => match policy {
                    ScanPolicy::Abort => return Err(err),
                    ScanPolicy::SkipUnknown => outcome.rejected.push(err),
                },
            }
        }

        Ok(outcome)
    }

    /// Units of `sku` scanned so far.
    #[inline]
    pub fn count(&self, sku: &str) -> u32 {
        self.tally.get(sku).copied().unwrap_or(0)
    }

    /// The tally, ordered by SKU.
    #[inline]
    pub fn tally(&self) -> &BTreeMap<String, u32> {
        &self.tally
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tally.is_empty()
    }

    /// Number of distinct SKUs scanned.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.tally.len()
    }

    /// Number of units scanned across all SKUs.
    pub fn total_quantity(&self) -> u64 {
        self.tally.values().map(|&q| u64::from(q)).sum()
    }

    /// Total price of the tally with every bulk offer applied.
    ///
    /// ## Errors
    /// `CheckoutError::Overflow` names the first SKU (in SKU order) whose
    /// line, or whose addition to the running total, leaves the `i64` range.
    pub fn total_price(&self) -> CheckoutResult<Money> {
        let mut total = Money::zero();
        for (sku, &quantity) in &self.tally {
            let line = self.line_price(sku, quantity)?;
            total = total.checked_add(line).ok_or_else(|| overflow(sku))?;
        }
        Ok(total)
    }

    /// Bundles applied per SKU. SKUs with no applied bundle are absent.
    pub fn applied_promotions(&self) -> CheckoutResult<BTreeMap<String, u32>> {
        let mut applied = BTreeMap::new();
        for (sku, &quantity) in &self.tally {
            let bundles = self.rule_for(sku)?.bundles(quantity);
            if bundles > 0 {
                applied.insert(sku.clone(), bundles);
            }
        }
        Ok(applied)
    }

    /// Reporting view of the current tally.
    pub fn summary(&self) -> CheckoutResult<CheckoutSummary> {
        CheckoutSummary::from_checkout(self)
    }

    pub(crate) fn rule_for(&self, sku: &str) -> CheckoutResult<&PricingRule> {
        self.catalogue
            .rule(sku)
            .ok_or_else(|| CheckoutError::UnknownItem(sku.to_string()))
    }

    pub(crate) fn line_price(&self, sku: &str, quantity: u32) -> CheckoutResult<Money> {
        self.rule_for(sku)?
            .price_for(quantity)
            .ok_or_else(|| overflow(sku))
    }

    #[cfg(test)]
    pub(crate) fn force_tally(&mut self, sku: &str, quantity: u32) {
        self.tally.insert(sku.to_string(), quantity);
    }
}

pub(crate) fn overflow(sku: &str) -> CheckoutError {
    CheckoutError::Overflow {
        sku: sku.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
