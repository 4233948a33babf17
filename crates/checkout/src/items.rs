//! Cart line items.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A product line held by the cart.
///
/// Lines are immutable once added. Changing a quantity means adding
/// another line for the same product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Human-readable product name.
    pub product_name: String,

    /// Price per unit. Signed; the store applies no sign validation.
    pub unit_price: Money,

    /// Units ordered. Zero is accepted and contributes nothing.
    pub quantity: u32,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(product_name: impl Into<String>, unit_price: Money, quantity: u32) -> Self {
        Self {
            product_name: product_name.into(),
            unit_price,
            quantity,
        }
    }

    /// Returns the value of this line (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// Ordered collection of cart lines.
///
/// Append-only. Lines keep insertion order, and duplicate product names
/// stay as separate lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItems {
    items: Vec<LineItem>,
}

impl LineItems {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line.
    pub fn add(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Returns true if no lines have been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the lines as a slice.
    pub fn as_slice(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns a detached copy of the lines.
    pub fn to_vec(&self) -> Vec<LineItem> {
        self.items.clone()
    }

    /// Sums the line values. Zero for an empty collection.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }
}
