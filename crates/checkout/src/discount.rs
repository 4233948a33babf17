//! Discount codes and their resolution.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A percentage discount identified by its code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    code: String,
    percent: f64,
}

impl Discount {
    /// Creates a discount. The rate is expressed as a percent in 0..=100.
    pub fn new(code: impl Into<String>, percent: f64) -> Self {
        Self {
            code: code.into(),
            percent,
        }
    }

    /// Returns the code customers enter.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the discount rate as a percent.
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Returns the discount value for the given subtotal.
    pub fn amount_of(&self, subtotal: Money) -> Money {
        subtotal.percentage(self.percent)
    }
}

/// Resolves discount codes against a fixed catalog.
///
/// Holds at most one applied code. Applying a second valid code replaces
/// the first; an unknown code leaves the applied one untouched.
#[derive(Debug, Clone)]
pub struct DiscountService {
    catalog: Vec<Discount>,
    applied: Option<String>,
}

impl DiscountService {
    /// Creates a resolver with the standard catalog:
    /// SUMMER10 (10%), WELCOME20 (20%), VIP30 (30%).
    pub fn new() -> Self {
        Self::with_catalog(vec![
            Discount::new("SUMMER10", 10.0),
            Discount::new("WELCOME20", 20.0),
            Discount::new("VIP30", 30.0),
        ])
    }

    /// Creates a resolver with a custom catalog.
    pub fn with_catalog(catalog: Vec<Discount>) -> Self {
        Self {
            catalog,
            applied: None,
        }
    }

    /// Attempts to apply a code. Codes match exactly, case sensitive.
    ///
    /// Returns true and records the code on a match. Returns false and
    /// keeps any previously applied code otherwise.
    pub fn apply(&mut self, code: &str) -> bool {
        match self.resolve(code) {
            Some(discount) => {
                tracing::info!(code, percent = discount.percent(), "discount applied");
                self.applied = Some(code.to_string());
                true
            }
            None => {
                tracing::warn!(code, "invalid discount code");
                false
            }
        }
    }

    /// Returns the currently applied code, if any.
    pub fn active_code(&self) -> Option<&str> {
        self.applied.as_deref()
    }

    /// Returns the discount value for the given subtotal under the
    /// applied code. Zero when no code is applied or the applied code no
    /// longer resolves.
    pub fn amount(&self, subtotal: Money) -> Money {
        self.applied
            .as_deref()
            .and_then(|code| self.resolve(code))
            .map(|discount| discount.amount_of(subtotal))
            .unwrap_or_else(Money::zero)
    }

    fn resolve(&self, code: &str) -> Option<&Discount> {
        self.catalog.iter().find(|d| d.code() == code)
    }
}

impl Default for DiscountService {
    fn default() -> Self {
        Self::new()
    }
}
