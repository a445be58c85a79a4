//! Order placement: codes, totals and delivery estimates.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use inventix_core::{DomainError, DomainResult};

use crate::cart::CartLine;
use crate::order::{Order, OrderStatus};

/// Days between placement and estimated delivery.
pub const DELIVERY_LEAD_DAYS: i64 = 7;

/// Sequential order code: `ORD-001`, `ORD-042`, `ORD-1000`.
pub fn order_code(sequence: u64) -> String {
    format!("ORD-{sequence:03}")
}

/// Code for the next order appended to `existing`.
pub fn next_order_code(existing: &[Order]) -> String {
    order_code(existing.len() as u64 + 1)
}

/// Order payload sent to the backend when an order is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub order_id: String,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
    pub total: f64,
    pub status: OrderStatus,
    pub date: NaiveDate,
    pub estimated_delivery: NaiveDate,
}

impl NewOrder {
    /// Place an order for `quantity` units at `unit_price`.
    ///
    /// The order starts out `Processing`, dated on the UTC day of `now`, with
    /// delivery estimated [`DELIVERY_LEAD_DAYS`] later.
    pub fn place(
        customer_name: impl Into<String>,
        product_name: impl Into<String>,
        unit_price: f64,
        quantity: i64,
        order_id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let customer_name = customer_name.into();
        let product_name = product_name.into();

        if customer_name.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        if product_name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(DomainError::validation("unit price must be a non-negative number"));
        }

        let date = now.date_naive();
        Ok(Self {
            order_id: order_id.into(),
            customer_name,
            product_name,
            quantity,
            price: unit_price,
            total: unit_price * quantity as f64,
            status: OrderStatus::Processing,
            date,
            estimated_delivery: date + Duration::days(DELIVERY_LEAD_DAYS),
        })
    }

    /// Place the order for one cart line; the code is derived from `now`.
    pub fn from_cart_line(
        customer_name: impl Into<String>,
        line: &CartLine,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Self::place(
            customer_name,
            line.product.name.clone(),
            line.product.price,
            line.quantity,
            format!("ORD-{}", now.timestamp_millis()),
            now,
        )
    }

    /// Local record for the order, before the backend assigns an id.
    pub fn into_order(self) -> Order {
        Order {
            id: None,
            order_id: self.order_id,
            customer_name: self.customer_name,
            product_name: self.product_name,
            quantity: self.quantity,
            price: self.price,
            total: self.total,
            status: self.status,
            date: Some(self.date.format("%Y-%m-%d").to_string()),
            estimated_delivery: Some(self.estimated_delivery.format("%Y-%m-%d").to_string()),
            created_at: None,
        }
    }
}
