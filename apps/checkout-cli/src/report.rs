//! Non-interactive report: catalogue file + SKU list → summary.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use checkout_core::{Catalogue, Checkout, ScanPolicy};
use tracing::{error, info, warn};

use crate::config::OutputFormat;
use crate::render::write_summary;

/// Settings for one report run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub on_unknown: ScanPolicy,
    pub format: OutputFormat,
    pub currency_symbol: String,
}

/// Reads SKUs one per line, ignoring blank lines.
pub fn read_skus<R: BufRead>(input: R) -> Result<Vec<String>> {
    let mut skus = Vec::new();
    for line in input.lines() {
        let line = line?;
        let sku = line.trim();
        if !sku.is_empty() {
            skus.push(sku.to_string());
        }
    }
    Ok(skus)
}

/// Prices `skus` against `catalogue` and writes the summary to `out`.
///
/// Scan and pricing failures go to `err_out`. Returns `Ok(false)` when no
/// total was printed.
pub fn run_report<W: Write, E: Write>(
    catalogue: Arc<Catalogue>,
    skus: &[String],
    options: &ReportOptions,
    out: &mut W,
    err_out: &mut E,
) -> Result<bool> {
    let mut checkout = Checkout::new(catalogue);

    let outcome = match checkout.scan_all(skus, options.on_unknown) {
        Ok(outcome) => outcome,
        Err(err) => {
            error!(session = %checkout.id(), error = %err, "Scan aborted report");
            writeln!(err_out, "Error: {}", err)?;
            return Ok(false);
        }
    };

    for rejected in &outcome.rejected {
        warn!(session = %checkout.id(), sku = rejected.sku(), "Skipped rejected scan");
        writeln!(err_out, "Error: {}", rejected)?;
    }

    let summary = match checkout.summary() {
        Ok(summary) => summary,
        Err(err) => {
            error!(session = %checkout.id(), error = %err, "Total price failed");
            writeln!(err_out, "Error calculating total price: {}", err)?;
            return Ok(false);
        }
    };

    info!(
        session = %checkout.id(),
        accepted = outcome.accepted,
        rejected = outcome.rejected.len(),
        total = summary.total.cents(),
        "Report priced"
    );
    write_summary(out, &summary, options.format, &options.currency_symbol)?;
    Ok(true)
}
