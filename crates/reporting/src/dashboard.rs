//! Admin dashboard figures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use inventix_products::Product;
use inventix_sales::Order;

/// Headline numbers shown on the admin dashboard and sales pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub total_products: usize,
    /// Revenue from completed orders.
    pub completed_revenue: f64,
    /// Sum of totals over every order, whatever its status.
    pub total_sales: f64,
    pub completed_orders: usize,
    pub processing_orders: usize,
    /// Orders whose placement day equals `today`.
    pub todays_orders: usize,
    pub low_stock_items: usize,
    pub out_of_stock_items: usize,
    /// Share of products with stock on hand, rounded to a whole percent.
    pub stock_availability_pct: u32,
}

impl DashboardSnapshot {
    pub fn compute(orders: &[Order], products: &[Product], today: NaiveDate) -> Self {
        let mut snapshot = DashboardSnapshot {
            total_products: products.len(),
            ..DashboardSnapshot::default()
        };

        for order in orders {
            snapshot.total_sales += order.total;
            if order.is_completed() {
                snapshot.completed_revenue += order.total;
                snapshot.completed_orders += 1;
            } else if order.is_processing() {
                snapshot.processing_orders += 1;
            }
            if order.placed_on() == Some(today) {
                snapshot.todays_orders += 1;
            }
        }

        let mut in_stock = 0usize;
        for product in products {
            if product.is_low_stock() {
                snapshot.low_stock_items += 1;
            }
            if product.is_out_of_stock() {
                snapshot.out_of_stock_items += 1;
            }
            if product.stock > 0 {
                in_stock += 1;
            }
        }

        if !products.is_empty() {
            let pct = in_stock as f64 / products.len() as f64 * 100.0;
            snapshot.stock_availability_pct = pct.round() as u32;
        }

        snapshot
    }

    /// Products that are low or out of stock.
    pub fn attention_items(&self) -> usize {
        self.low_stock_items + self.out_of_stock_items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: &str, total: f64, date: &str) -> Order {
        serde_json::from_value(serde_json::json!({
            "productName": "Laptop Pro",
            "status": status,
            "total": total,
            "date": date,
        }))
        .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn empty_snapshot() {
        let snapshot = DashboardSnapshot::compute(&[], &[], today());
        assert_eq!(snapshot, DashboardSnapshot::default());
        assert_eq!(snapshot.stock_availability_pct, 0);
    }

    #[test]
    fn order_figures() {
        let orders = vec![
            order("Completed", 100.0, "2024-06-01"),
            order("Processing", 40.0, "2024-05-31"),
            order("Cancelled", 5.0, "2024-06-01"),
        ];
        let snapshot = DashboardSnapshot::compute(&orders, &[], today());
        assert_eq!(snapshot.completed_revenue, 100.0);
        assert_eq!(snapshot.total_sales, 145.0);
        assert_eq!(snapshot.completed_orders, 1);
        assert_eq!(snapshot.processing_orders, 1);
        assert_eq!(snapshot.todays_orders, 2);
    }

    #[test]
    fn created_at_takes_precedence_for_today() {
        let placed: Order = serde_json::from_value(serde_json::json!({
            "status": "Processing",
            "date": "2024-06-01",
            "createdAt": "2024-05-30T23:00:00Z",
        }))
        .unwrap();
        let snapshot = DashboardSnapshot::compute(&[placed], &[], today());
        assert_eq!(snapshot.todays_orders, 0);
    }

    #[test]
    fn stock_figures_and_availability() {
        let products = vec![
            Product::new("A", "Home", 0, 1.0),
            Product::new("B", "Home", 4, 1.0),
            Product::new("C", "Home", 50, 1.0),
        ];
        let snapshot = DashboardSnapshot::compute(&[], &products, today());
        assert_eq!(snapshot.out_of_stock_items, 1);
        assert_eq!(snapshot.low_stock_items, 1);
        assert_eq!(snapshot.attention_items(), 2);
        // 2 of 3 in stock: 66.67% rounds to 67.
        assert_eq!(snapshot.stock_availability_pct, 67);
    }
}
