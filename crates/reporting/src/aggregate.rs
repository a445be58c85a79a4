//! Business report figures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use inventix_products::Product;
use inventix_sales::Order;

/// Number of entries kept in [`ReportSummary::top_products`].
pub const TOP_PRODUCTS_LIMIT: usize = 5;

/// Revenue summed over all orders for one product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRevenue {
    pub product_name: String,
    pub revenue: f64,
}

/// Report figures over one snapshot of orders and products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Sum of totals over `Completed` orders.
    pub total_revenue: f64,
    /// Sum of totals over `Processing` orders.
    pub pending_revenue: f64,
    pub total_orders: usize,
    pub completed_orders: usize,
    pub processing_orders: usize,
    pub total_products: usize,
    /// Supplied by the caller; not derived from orders.
    pub total_customers: usize,
    /// Sum of `stock * price` over all products.
    pub total_inventory_value: f64,
    /// Products with `0 < stock <= effective minimum level`.
    pub low_stock_items: usize,
    /// Products with exactly zero stock.
    pub out_of_stock_items: usize,
    /// Highest-revenue products, descending, at most [`TOP_PRODUCTS_LIMIT`].
    pub top_products: Vec<ProductRevenue>,
}

/// Compute the business report.
///
/// Orders whose status is neither `Completed` nor `Processing` count toward
/// `total_orders` (and `top_products`) but toward neither revenue bucket.
pub fn aggregate_report(orders: &[Order], products: &[Product], total_customers: usize) -> ReportSummary {
    let mut summary = ReportSummary {
        total_orders: orders.len(),
        total_products: products.len(),
        total_customers,
        ..ReportSummary::default()
    };

    for order in orders {
        if order.is_completed() {
            summary.total_revenue += order.total;
            summary.completed_orders += 1;
        } else if order.is_processing() {
            summary.pending_revenue += order.total;
            summary.processing_orders += 1;
        }
    }

    for product in products {
        summary.total_inventory_value += product.inventory_value();
        if product.is_low_stock() {
            summary.low_stock_items += 1;
        }
        if product.is_out_of_stock() {
            summary.out_of_stock_items += 1;
        }
    }

    summary.top_products = top_products(orders, TOP_PRODUCTS_LIMIT);
    summary
}

/// Group orders by product name, sum their totals, and keep the `limit`
/// highest.
///
/// Groups are formed in first-encounter order and the sort is stable, so ties
/// keep that order.
pub fn top_products(orders: &[Order], limit: usize) -> Vec<ProductRevenue> {
    let mut ranked: Vec<ProductRevenue> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for order in orders {
        match index.get(order.product_name.as_str()) {
            Some(&i) => ranked[i].revenue += order.total,
            None => {
                index.insert(order.product_name.as_str(), ranked.len());
                ranked.push(ProductRevenue {
                    product_name: order.product_name.clone(),
                    revenue: order.total,
                });
            }
        }
    }

    ranked.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventix_sales::OrderStatus;

    fn order(product: &str, status: &str, total: f64) -> Order {
        serde_json::from_value(serde_json::json!({
            "orderId": "ORD-X",
            "customerName": "John Doe",
            "productName": product,
            "quantity": 1,
            "price": total,
            "total": total,
            "status": status,
        }))
        .unwrap()
    }

    fn product(stock: i64, price: f64, min_level: Option<i64>) -> Product {
        let p = Product::new("P", "Electronics", stock, price);
        match min_level {
            Some(level) => p.with_min_level(level),
            None => p,
        }
    }

    #[test]
    fn empty_input_is_all_zero() {
        let summary = aggregate_report(&[], &[], 0);
        assert_eq!(summary, ReportSummary::default());
        assert!(summary.top_products.is_empty());
        assert!(summary.total_revenue.is_sign_positive());
    }

    #[test]
    fn revenue_buckets_by_status() {
        let orders = vec![order("A", "Completed", 100.0), order("B", "Processing", 50.0)];
        let summary = aggregate_report(&orders, &[], 0);
        assert_eq!(summary.total_revenue, 100.0);
        assert_eq!(summary.pending_revenue, 50.0);
        assert_eq!(summary.total_orders, 2);
        assert_eq!(summary.completed_orders, 1);
        assert_eq!(summary.processing_orders, 1);
    }

    #[test]
    fn unknown_status_counts_only_in_totals() {
        let orders = vec![order("A", "Shipped", 70.0), order("A", "Completed", 30.0)];
        let summary = aggregate_report(&orders, &[], 0);
        assert_eq!(summary.total_orders, 2);
        assert_eq!(summary.completed_orders, 1);
        assert_eq!(summary.processing_orders, 0);
        assert_eq!(summary.total_revenue, 30.0);
        assert_eq!(summary.pending_revenue, 0.0);
        assert_eq!(summary.top_products[0].revenue, 100.0);
        assert_eq!(orders[0].status, OrderStatus::Other("Shipped".to_string()));
    }

    #[test]
    fn inventory_figures() {
        let products = vec![product(5, 10.0, Some(10)), product(0, 20.0, Some(5))];
        let summary = aggregate_report(&[], &products, 0);
        assert_eq!(summary.total_inventory_value, 50.0);
        assert_eq!(summary.low_stock_items, 1);
        assert_eq!(summary.out_of_stock_items, 1);
        assert_eq!(summary.total_products, 2);
    }

    #[test]
    fn missing_min_level_uses_default_threshold() {
        let products = vec![product(10, 1.0, None), product(11, 1.0, None), product(3, 1.0, Some(2))];
        let summary = aggregate_report(&[], &products, 0);
        assert_eq!(summary.low_stock_items, 1);
    }

    #[test]
    fn malformed_product_numbers_count_as_zero() {
        let raw: Product =
            serde_json::from_str(r#"{"name": "Odd", "category": "Home", "stock": "none", "price": "?"}"#).unwrap();
        let summary = aggregate_report(&[], &[raw], 0);
        assert_eq!(summary.out_of_stock_items, 1);
        assert_eq!(summary.low_stock_items, 0);
        assert_eq!(summary.total_inventory_value, 0.0);
    }

    #[test]
    fn customers_are_passed_through() {
        assert_eq!(aggregate_report(&[], &[], 17).total_customers, 17);
    }

    #[test]
    fn top_products_sums_sorts_and_truncates() {
        let orders = vec![
            order("A", "Completed", 10.0),
            order("B", "Processing", 60.0),
            order("C", "Completed", 30.0),
            order("A", "Completed", 45.0),
            order("D", "Completed", 5.0),
            order("E", "Completed", 1.0),
            order("F", "Completed", 2.0),
        ];
        let top = top_products(&orders, TOP_PRODUCTS_LIMIT);
        let names: Vec<&str> = top.iter().map(|p| p.product_name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C", "D", "F"]);
        assert_eq!(top[1].revenue, 55.0);
    }

    #[test]
    fn ties_keep_encounter_order() {
        let orders = vec![
            order("Zeta", "Completed", 20.0),
            order("Alpha", "Completed", 20.0),
            order("Mid", "Completed", 20.0),
        ];
        let names: Vec<String> = top_products(&orders, 5).into_iter().map(|p| p.product_name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn serializes_camel_case() {
        let summary = aggregate_report(&[order("A", "Completed", 1.0)], &[], 0);
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["totalRevenue"], 1.0);
        assert_eq!(value["topProducts"][0]["productName"], "A");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_order() -> impl Strategy<Value = Order> {
            (
                prop::sample::select(vec!["Laptop", "Mouse", "Case", "Desk", "Lamp", "Pen", "Mug"]),
                prop::sample::select(vec!["Completed", "Processing", "Cancelled"]),
                0u32..10_000,
            )
                .prop_map(|(name, status, cents)| order(name, status, f64::from(cents) / 100.0))
        }

        fn arb_product() -> impl Strategy<Value = Product> {
            (0i64..200, 0u32..100_000, prop::option::of(0i64..50))
                .prop_map(|(stock, cents, min)| product(stock, f64::from(cents) / 100.0, min))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: aggregation is idempotent over unchanged input.
            #[test]
            fn aggregation_is_idempotent(
                orders in prop::collection::vec(arb_order(), 0..40),
                products in prop::collection::vec(arb_product(), 0..40),
            ) {
                let first = aggregate_report(&orders, &products, 3);
                let second = aggregate_report(&orders, &products, 3);
                prop_assert_eq!(first, second);
            }

            /// Property: top products are bounded and sorted descending.
            #[test]
            fn top_products_bounded_and_sorted(orders in prop::collection::vec(arb_order(), 0..60)) {
                let top = top_products(&orders, TOP_PRODUCTS_LIMIT);
                prop_assert!(top.len() <= TOP_PRODUCTS_LIMIT);
                for pair in top.windows(2) {
                    prop_assert!(pair[0].revenue >= pair[1].revenue);
                }
            }

            /// Property: status counts never exceed the order count.
            #[test]
            fn status_counts_partition(orders in prop::collection::vec(arb_order(), 0..60)) {
                let s = aggregate_report(&orders, &[], 0);
                prop_assert!(s.completed_orders + s.processing_orders <= s.total_orders);
            }
        }
    }
}
