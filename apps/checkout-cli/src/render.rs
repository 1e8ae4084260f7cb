//! Summary rendering.
//!
//! ```text
//! Checkout Summary:
//! ------------------
//! A: 3 x 0.50 = 1.50
//!
//! Applied Promotions:
//! ------------------
//! A: 3 for 1.30 applied 1 times. You saved 0.20
//!
//! Total Price: 1.30
//! ```

use std::io::{self, Write};

use checkout_core::{CheckoutSummary, Money};

use crate::config::OutputFormat;

const RULE: &str = "------------------";

/// Writes `summary` in the requested format.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &CheckoutSummary,
    format: OutputFormat,
    currency_symbol: &str,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, summary, currency_symbol),
        OutputFormat::Json => write_json(out, summary),
    }
}

fn write_text<W: Write>(out: &mut W, summary: &CheckoutSummary, symbol: &str) -> io::Result<()> {
    let amount = |money: Money| format!("{}{}", symbol, money);

    writeln!(out, "\nCheckout Summary:")?;
    writeln!(out, "{}", RULE)?;
    for line in &summary.lines {
        writeln!(
            out,
            "{}: {} x {} = {}",
            line.sku,
            line.quantity,
            amount(line.unit_price),
            amount(line.subtotal)
        )?;
    }

    writeln!(out, "\nApplied Promotions:")?;
    writeln!(out, "{}", RULE)?;
    for promotion in &summary.promotions {
        writeln!(
            out,
            "{}: {} for {} applied {} times. You saved {}",
            promotion.sku,
            promotion.bundle_quantity,
            amount(promotion.bundle_price),
            promotion.times,
            amount(promotion.saved)
        )?;
    }

    writeln!(out, "\nTotal Price: {}", amount(summary.total))
}

fn write_json<W: Write>(out: &mut W, summary: &CheckoutSummary) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)
}
