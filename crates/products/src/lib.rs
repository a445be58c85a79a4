//! Product records and the catalog rules built on them.
//!
//! Everything here is deterministic and performs no IO.

pub mod catalog;
pub mod image;
pub mod product;
pub mod stock;

pub use catalog::default_catalog;
pub use image::{resolve_image, DEFAULT_CATEGORY, KNOWN_CATEGORIES};
pub use product::{Product, DEFAULT_MIN_LEVEL};
pub use stock::StockStatus;
