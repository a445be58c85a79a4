use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use inventix_core::{coerce, RecordId};

/// Order status.
///
/// Only `Processing` and `Completed` carry meaning for reporting; any other
/// value the backend holds is preserved verbatim and treated as neither.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Processing,
    Completed,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Other(s) => s,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, OrderStatus::Processing)
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        match value {
            "Processing" => OrderStatus::Processing,
            "Completed" => OrderStatus::Completed,
            other => OrderStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Processing" => OrderStatus::Processing,
            "Completed" => OrderStatus::Completed,
            _ => OrderStatus::Other(value),
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        coerce::text(deserializer).map(OrderStatus::from)
    }
}

/// Order record as exchanged with the backend.
///
/// `total` is taken as given: it is expected to equal `quantity * price` but
/// is never recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Human-facing order code, e.g. `ORD-001`.
    #[serde(default, deserialize_with = "coerce::text")]
    pub order_id: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "coerce::text")]
    pub product_name: String,
    #[serde(default, deserialize_with = "coerce::int")]
    pub quantity: i64,
    /// Unit price.
    #[serde(default, deserialize_with = "coerce::float")]
    pub price: f64,
    #[serde(default, deserialize_with = "coerce::float")]
    pub total: f64,
    #[serde(default = "unknown_status")]
    pub status: OrderStatus,
    /// Placement date as `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "coerce::opt_text", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "coerce::opt_text", skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,
    /// Backend creation timestamp (RFC 3339).
    #[serde(default, deserialize_with = "coerce::opt_text", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

fn unknown_status() -> OrderStatus {
    OrderStatus::Other(String::new())
}

impl Order {
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    pub fn is_processing(&self) -> bool {
        self.status.is_processing()
    }

    /// Calendar day the order was placed (UTC).
    ///
    /// Prefers the backend `createdAt` timestamp and falls back to `date`.
    /// Unparseable values yield `None`.
    pub fn placed_on(&self) -> Option<NaiveDate> {
        self.created_at
            .as_deref()
            .and_then(parse_day)
            .or_else(|| self.date.as_deref().and_then(parse_day))
    }

    /// Whether this order was placed by `customer` (exact name match).
    pub fn belongs_to(&self, customer: &str) -> bool {
        self.customer_name == customer
    }
}

fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
