//! Stock level classification used by the inventory views.

use serde::{Deserialize, Serialize};

/// Stock health of a single product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    /// Above the minimum level.
    Good,
    /// At or below the minimum level (includes negative stock).
    Low,
    /// Exactly zero on hand.
    OutOfStock,
}

impl StockStatus {
    /// Classify `stock` against an effective minimum level.
    ///
    /// Zero is checked first, so a product with a minimum level of 0 that runs
    /// dry is still out of stock rather than low.
    pub fn classify(stock: i64, min_level: i64) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock > min_level {
            StockStatus::Good
        } else {
            StockStatus::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Good => "Good",
            StockStatus::Low => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// Whether the product should be surfaced as needing attention.
    pub fn needs_attention(&self) -> bool {
        !matches!(self, StockStatus::Good)
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
