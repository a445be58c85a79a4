//! Per-customer order history.

use inventix_sales::Order;

/// Orders placed by one customer, with the figures shown on their dashboard
/// and on the admin customer view.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerHistory {
    pub customer_name: String,
    /// The customer's orders, in input order.
    pub orders: Vec<Order>,
}

impl CustomerHistory {
    /// Select the orders whose customer name matches exactly.
    pub fn for_customer(orders: &[Order], customer_name: &str) -> Self {
        Self {
            customer_name: customer_name.to_string(),
            orders: orders.iter().filter(|o| o.belongs_to(customer_name)).cloned().collect(),
        }
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn processing_orders(&self) -> usize {
        self.orders.iter().filter(|o| o.is_processing()).count()
    }

    /// Sum of totals over every order, whatever its status.
    pub fn total_spent(&self) -> f64 {
        self.orders.iter().fold(0.0, |acc, o| acc + o.total)
    }

    /// Sum of totals over completed orders.
    pub fn completed_spend(&self) -> f64 {
        self.orders
            .iter()
            .filter(|o| o.is_completed())
            .fold(0.0, |acc, o| acc + o.total)
    }

    /// The first `n` orders, as listed on the customer detail view.
    pub fn recent(&self, n: usize) -> &[Order] {
        &self.orders[..n.min(self.orders.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(customer: &str, status: &str, total: f64) -> Order {
        serde_json::from_value(serde_json::json!({
            "customerName": customer,
            "productName": "Wireless Mouse",
            "status": status,
            "total": total,
        }))
        .unwrap()
    }

    #[test]
    fn filters_by_exact_name() {
        let orders = vec![
            order("John Doe", "Completed", 50.0),
            order("Jane Smith", "Completed", 10.0),
            order("John Doe", "Processing", 25.0),
            order("john doe", "Completed", 99.0),
        ];
        let history = CustomerHistory::for_customer(&orders, "John Doe");
        assert_eq!(history.order_count(), 2);
        assert_eq!(history.processing_orders(), 1);
        assert_eq!(history.total_spent(), 75.0);
        assert_eq!(history.completed_spend(), 50.0);
    }

    #[test]
    fn recent_is_bounded() {
        let orders: Vec<Order> = (0..5).map(|i| order("Jane", "Completed", f64::from(i))).collect();
        let history = CustomerHistory::for_customer(&orders, "Jane");
        assert_eq!(history.recent(3).len(), 3);
        assert_eq!(history.recent(3)[0].total, 0.0);

        let empty = CustomerHistory::for_customer(&orders, "Nobody");
        assert!(empty.recent(3).is_empty());
        assert_eq!(empty.total_spent(), 0.0);
    }
}
