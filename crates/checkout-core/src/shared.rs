//! # Shared Checkout
//!
//! Mutual-exclusion wrapper for embedding a session where several threads
//! may touch it.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>`:
//! 1. Several callers may scan into or read the same session
//! 2. Only one of them may touch the tally at a time
//! 3. The pricing code itself stays lock-free
//!
//! ```text
//! thread 1 ── scan("A") ──┐
//!                          ├──► Mutex<Checkout> ──► tally
//! thread 2 ── scan("B") ──┘
//! ```

use std::sync::{Arc, Mutex};

use crate::catalogue::Catalogue;
use crate::checkout::Checkout;
use crate::error::CheckoutResult;
use crate::money::Money;

/// Cloneable handle to one locked session.
#[derive(Debug, Clone)]
pub struct SharedCheckout {
    checkout: Arc<Mutex<Checkout>>,
}

impl SharedCheckout {
    /// Opens a new session against `catalogue`.
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self::from(Checkout::new(catalogue))
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = shared.with_checkout(|c| c.total_price())?;
    /// ```
    pub fn with_checkout<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Checkout) -> R,
    {
        let checkout = self.checkout.lock().expect("Checkout mutex poisoned");
        f(&checkout)
    }

    /// Executes a function with write access to the session.
    pub fn with_checkout_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Checkout) -> R,
    {
        let mut checkout = self.checkout.lock().expect("Checkout mutex poisoned");
        f(&mut checkout)
    }

    pub fn scan(&self, sku: &str) -> CheckoutResult<()> {
        self.with_checkout_mut(|checkout| checkout.scan(sku))
    }

    pub fn total_price(&self) -> CheckoutResult<Money> {
        self.with_checkout(Checkout::total_price)
    }
}

impl From<Checkout> for SharedCheckout {
    fn from(checkout: Checkout) -> Self {
        SharedCheckout {
            checkout: Arc::new(Mutex::new(checkout)),
        }
    }
}
