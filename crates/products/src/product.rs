use serde::{Deserialize, Serialize};

use inventix_core::{coerce, DomainError, RecordId};

use crate::image::resolve_image;
use crate::stock::StockStatus;

/// Minimum stock level assumed when a product does not carry one.
pub const DEFAULT_MIN_LEVEL: i64 = 10;

/// Product record as exchanged with the backend.
///
/// Numeric fields are coerced leniently (see [`inventix_core::coerce`]), so a
/// record with a missing or malformed `stock`/`price` still deserializes, with
/// the value read as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier; `None` until the product has been saved.
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub name: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub category: String,
    #[serde(default, deserialize_with = "coerce::int")]
    pub stock: i64,
    #[serde(default, deserialize_with = "coerce::float")]
    pub price: f64,
    #[serde(default, deserialize_with = "coerce::opt_int", skip_serializing_if = "Option::is_none")]
    pub min_level: Option<i64>,
    #[serde(default, deserialize_with = "coerce::opt_text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// New unsaved product with no minimum level or image.
    pub fn new(name: impl Into<String>, category: impl Into<String>, stock: i64, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: category.into(),
            stock,
            price,
            min_level: None,
            image: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<RecordId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_min_level(mut self, min_level: i64) -> Self {
        self.min_level = Some(min_level);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Minimum level used for stock alerts.
    ///
    /// A missing level and a level of 0 both fall back to [`DEFAULT_MIN_LEVEL`].
    pub fn effective_min_level(&self) -> i64 {
        match self.min_level {
            Some(level) if level != 0 => level,
            _ => DEFAULT_MIN_LEVEL,
        }
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.stock, self.effective_min_level())
    }

    /// True when some stock remains but no more than the minimum level.
    pub fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock <= self.effective_min_level()
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Stock value at list price.
    pub fn inventory_value(&self) -> f64 {
        self.stock as f64 * self.price
    }

    /// Explicit image if set and non-blank.
    pub fn explicit_image(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Image to display: the explicit one, or the resolved placeholder.
    pub fn display_image(&self) -> &str {
        match self.explicit_image() {
            Some(url) => url,
            None => resolve_image(&self.category, &self.name),
        }
    }

    /// Replace a missing or blank image with the resolved placeholder.
    pub fn with_placeholder_image(mut self) -> Self {
        if self.explicit_image().is_none() {
            self.image = Some(resolve_image(&self.category, &self.name).to_string());
        }
        self
    }

    /// Checks applied before a product is sent to the backend.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }
        if self.price.is_nan() || self.price < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        if matches!(self.min_level, Some(level) if level < 0) {
            return Err(DomainError::validation("minimum level cannot be negative"));
        }
        Ok(())
    }
}
