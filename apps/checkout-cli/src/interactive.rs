//! Interactive checkout.
//!
//! ## Prompt Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Catalogue setup                                                     │
//! │     SKU? ──(empty)──────────────────────────────────► step 2            │
//! │       │                                                                 │
//! │       ├── unit price? (re-prompt until a whole number)                  │
//! │       ├── special offer? y/n                                            │
//! │       │     └── y: offer quantity? offer price?                         │
//! │       └── builder.insert() ── Err ─► print, skip this SKU               │
//! │                                                                         │
//! │  2. Scanning                                                            │
//! │     SKU? ──(empty)──────────────────────────────────► step 3            │
//! │       └── scan() ── Err ─► "Error: invalid SKU: X", keep scanning       │
//! │                                                                         │
//! │  3. Summary, or "Error calculating total price" and stop                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! End of input counts as an empty line at the SKU prompts.

use std::io::{BufRead, Write};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{bail, Result};
use checkout_core::{Catalogue, CatalogueBuilder, Checkout, RuleSpec};
use tracing::{debug, error};

use crate::config::{CliConfig, OutputFormat};
use crate::render::write_summary;

/// Interactive session over any line reader and writer.
pub struct InteractiveSession<R, W> {
    input: R,
    out: W,
    config: CliConfig,
}

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    pub fn new(input: R, out: W, config: CliConfig) -> Self {
        InteractiveSession { input, out, config }
    }

    /// Runs all three steps.
    ///
    /// Returns `Ok(false)` when the total could not be computed.
    pub fn run(&mut self) -> Result<bool> {
        writeln!(self.out, "Welcome to the Supermarket Checkout System!")?;

        let catalogue = Arc::new(self.build_catalogue()?);
        let mut checkout = Checkout::new(catalogue);
        self.scan_items(&mut checkout)?;

        match checkout.summary() {
            Ok(summary) => {
                write_summary(
                    &mut self.out,
                    &summary,
                    OutputFormat::Text,
                    &self.config.currency_symbol,
                )?;
                Ok(true)
            }
            Err(err) => {
                error!(session = %checkout.id(), error = %err, "Total price failed");
                writeln!(self.out, "Error calculating total price: {}", err)?;
                Ok(false)
            }
        }
    }

    fn build_catalogue(&mut self) -> Result<Catalogue> {
        writeln!(self.out, "\nLet's set up the product catalogue.")?;
        let mut builder = CatalogueBuilder::new();

        loop {
            let sku = self.prompt("Enter product SKU (or press Enter to finish): ")?;
            let Some(sku) = sku.filter(|s| !s.is_empty()) else {
                break;
            };

            let unit_price: i64 = self.prompt_number(&format!("Enter unit price for {}: ", sku))?;
            let mut spec = RuleSpec::unit(unit_price);

            let offer = self.prompt(&format!("Is there a special offer for {}? (y/n): ", sku))?;
            if offer.is_some_and(|answer| answer.eq_ignore_ascii_case("y")) {
                let quantity: u32 = self.prompt_number("Enter special offer quantity: ")?;
                let price: i64 = self.prompt_number("Enter special offer price: ")?;
                spec = spec.with_bulk(quantity, price);
            }

            if let Err(err) = builder.insert(sku, spec) {
                writeln!(self.out, "Error: {}", err)?;
            }
        }

        debug!(rules = builder.len(), "Interactive catalogue complete");
        Ok(builder.build())
    }

    fn scan_items(&mut self, checkout: &mut Checkout) -> Result<()> {
        writeln!(self.out, "\nNow, let's scan items.")?;

        loop {
            let sku = self.prompt("Scan an item (enter SKU or press Enter to finish): ")?;
            let Some(sku) = sku.filter(|s| !s.is_empty()) else {
                return Ok(());
            };

            match checkout.scan(&sku) {
                Ok(()) => writeln!(self.out, "Item scanned successfully.")?,
                Err(err) => writeln!(self.out, "Error: {}", err)?,
            }
        }
    }

    /// Prints `message` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.out, "{}", message)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_number<T: FromStr>(&mut self, message: &str) -> Result<T> {
        loop {
            let Some(raw) = self.prompt(message)? else {
                bail!("Input ended while waiting for a number");
            };
            match raw.parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.out, "'{}' is not a whole number, try again.", raw)?,
            }
        }
    }
}
