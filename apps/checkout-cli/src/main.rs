//! # Titan Checkout
//!
//! ```bash
//! # Prompted catalogue entry and scanning
//! checkout
//!
//! # Batch pricing
//! checkout report --catalogue demos/catalogue.toml A A B B A C D
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    match checkout_cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
