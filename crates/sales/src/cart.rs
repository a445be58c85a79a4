//! Customer shopping cart.
//!
//! Lines are keyed by product id; products that have not been saved (no id)
//! cannot be added.

use serde::{Deserialize, Serialize};

use inventix_core::RecordId;
use inventix_products::Product;

/// One product in the cart with its requested quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i64,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }

    fn is_for(&self, product_id: &RecordId) -> bool {
        self.product.id.as_ref() == Some(product_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn unit_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().fold(0.0, |acc, l| acc + l.line_total())
    }

    /// Add one unit of `product`.
    ///
    /// Returns `false` (cart unchanged) when the product is out of stock or
    /// has no id. Stock is not reserved; repeated adds may exceed it.
    pub fn add(&mut self, product: &Product) -> bool {
        if product.stock <= 0 {
            return false;
        }
        let Some(id) = product.id.as_ref() else {
            return false;
        };

        match self.lines.iter_mut().find(|l| l.is_for(id)) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            }),
        }
        true
    }

    /// Remove the line for `product_id`, returning it if present.
    pub fn remove(&mut self, product_id: &RecordId) -> Option<CartLine> {
        let pos = self.lines.iter().position(|l| l.is_for(product_id))?;
        Some(self.lines.remove(pos))
    }

    /// Set the quantity for `product_id`; zero or less removes the line.
    pub fn update_quantity(&mut self, product_id: &RecordId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.is_for(product_id)) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
