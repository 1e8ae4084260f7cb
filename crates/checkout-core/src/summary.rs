//! # Checkout Summary
//!
//! Reporting view built purely from a session's engine outputs.
//!
//! ```text
//! total_price()  ─────────────────────────────┐
//! applied_promotions() ──► savings per SKU ───┼──► CheckoutSummary
//! tally + catalogue ─────► per-line figures ──┘
//! ```
//!
//! Savings per promotion are `(bulk.quantity × unit_price − bulk.price) ×
//! bundles`. They are derived here rather than tracked by the session.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::checkout::{overflow, Checkout};
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;

/// One scanned SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSummary {
    pub sku: String,
    pub quantity: u32,
    pub unit_price: Money,
    /// Quantity × unit price, before any offer.
    pub subtotal: Money,
    /// Price of the line with its offer applied.
    pub line_total: Money,
}

/// One bulk offer that applied at least once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedPromotion {
    pub sku: String,
    pub bundle_quantity: u32,
    pub bundle_price: Money,
    /// Number of bundles applied.
    pub times: u32,
    pub saved: Money,
}

/// Everything a receipt or report needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub lines: Vec<LineSummary>,
    pub promotions: Vec<AppliedPromotion>,
    pub total: Money,
}

impl CheckoutSummary {
    /// Builds the summary for `checkout`.
    ///
    /// Lines and promotions are ordered by SKU.
    pub fn from_checkout(checkout: &Checkout) -> CheckoutResult<Self> {
        let total = checkout.total_price()?;

        let lines = checkout
            .tally()
            .iter()
            .map(|(sku, &quantity)| {
                let rule = checkout.rule_for(sku)?;
                Ok(LineSummary {
                    sku: sku.clone(),
                    quantity,
                    unit_price: rule.unit_price(),
                    subtotal: rule
                        .unit_price()
                        .checked_mul_quantity(quantity)
                        .ok_or_else(|| overflow(sku))?,
                    line_total: checkout.line_price(sku, quantity)?,
                })
            })
            .collect::<CheckoutResult<Vec<_>>>()?;

        let promotions = checkout
            .applied_promotions()?
            .into_iter()
            .map(|(sku, times)| {
                let rule = checkout.rule_for(&sku)?;
                let offer = rule
                    .bulk()
                    .ok_or_else(|| CheckoutError::UnknownItem(sku.clone()))?;
                let saved = offer
                    .savings(rule.unit_price(), times)
                    .ok_or_else(|| overflow(&sku))?;
                Ok(AppliedPromotion {
                    bundle_quantity: offer.quantity(),
                    bundle_price: offer.price(),
                    times,
                    saved,
                    sku,
                })
            })
            .collect::<CheckoutResult<Vec<_>>>()?;

        Ok(CheckoutSummary {
            session_id: checkout.id(),
            started_at: checkout.started_at(),
            lines,
            promotions,
            total,
        })
    }

    /// Sum of all promotion savings, `None` if it overflows.
    pub fn total_savings(&self) -> Option<Money> {
        Money::checked_sum(self.promotions.iter().map(|p| p.saved))
    }

    /// Sum of line subtotals before any offer, `None` if it overflows.
    pub fn subtotal(&self) -> Option<Money> {
        Money::checked_sum(self.lines.iter().map(|l| l.subtotal))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalogue::Catalogue;
    use crate::pricing::RuleSpec;

    fn checkout(items: &[&str]) -> Checkout {
        let mut builder = Catalogue::builder();
        builder
            .insert("A", RuleSpec::unit(50).with_bulk(3, 130))
            .unwrap()
            .insert("B", RuleSpec::unit(30).with_bulk(2, 45))
            .unwrap()
            .insert("C", RuleSpec::unit(20))
            .unwrap();
        let mut checkout = Checkout::new(Arc::new(builder.build()));
        checkout.scan_all(items, crate::ScanPolicy::Abort).unwrap();
        checkout
    }

    #[test]
    fn test_summary_lines_and_promotions() {
        let summary = checkout(&["A", "A", "A", "A", "A", "A", "A", "B", "C"])
            .summary()
            .unwrap();

        assert_eq!(summary.lines.len(), 3);
        let a = &summary.lines[0];
        assert_eq!(a.sku, "A");
        assert_eq!(a.quantity, 7);
        assert_eq!(a.subtotal.cents(), 350);
        assert_eq!(a.line_total.cents(), 310);

        assert_eq!(
            summary.promotions,
            vec![AppliedPromotion {
                sku: "A".to_string(),
                bundle_quantity: 3,
                bundle_price: Money::from_cents(130),
                times: 2,
                saved: Money::from_cents(40),
            }]
        );

        assert_eq!(summary.total.cents(), 310 + 30 + 20);
        let subtotal = summary.subtotal().unwrap();
        let savings = summary.total_savings().unwrap();
        assert_eq!(subtotal.checked_sub(savings), Some(summary.total));
    }

    #[test]
    fn test_summary_of_empty_checkout() {
        let summary = checkout(&[]).summary().unwrap();
        assert!(summary.lines.is_empty());
        assert!(summary.promotions.is_empty());
        assert_eq!(summary.total, Money::zero());
        assert_eq!(summary.total_savings(), Some(Money::zero()));
    }

    #[test]
    fn test_summary_overflow_in_subtotal() {
        // The bundle is free, so the total fits but the undiscounted
        // subtotal does not
        let mut builder = Catalogue::builder();
        builder
            .insert("X", RuleSpec::unit(i64::MAX).with_bulk(2, 0))
            .unwrap();
        let mut checkout = Checkout::new(Arc::new(builder.build()));
        checkout.scan_all(["X", "X"], crate::ScanPolicy::Abort).unwrap();

        assert_eq!(checkout.total_price().unwrap(), Money::zero());
        assert_eq!(
            checkout.summary().unwrap_err(),
            CheckoutError::Overflow {
                sku: "X".to_string()
            }
        );
    }

    #[test]
    fn test_summary_serializes_to_camel_case() {
        let summary = checkout(&["B", "B"]).summary().unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["total"], 45);
        assert_eq!(json["promotions"][0]["bundleQuantity"], 2);
        assert_eq!(json["promotions"][0]["saved"], 15);
        assert_eq!(json["lines"][0]["lineTotal"], 45);
    }
}
