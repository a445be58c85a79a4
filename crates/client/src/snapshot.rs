//! Everything the report and dashboard need, fetched in one go.

use chrono::NaiveDate;

use inventix_parties::User;
use inventix_products::Product;
use inventix_reporting::{aggregate_report, DashboardSnapshot, ReportSummary};
use inventix_sales::Order;

use crate::client::InventixClient;
use crate::error::ClientError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub customers: Vec<User>,
}

impl StoreSnapshot {
    /// Fetch the catalog (seeding it when empty), orders and customers
    /// concurrently.
    pub async fn fetch(client: &InventixClient) -> Result<Self, ClientError> {
        let (products, orders, customers) =
            tokio::try_join!(client.load_catalog(), client.list_orders(), client.list_customers())?;

        tracing::info!(
            products = products.len(),
            orders = orders.len(),
            customers = customers.len(),
            "fetched store snapshot"
        );

        Ok(Self {
            products,
            orders,
            customers,
        })
    }

    pub fn report(&self) -> ReportSummary {
        aggregate_report(&self.orders, &self.products, self.customers.len())
    }

    pub fn dashboard(&self, today: NaiveDate) -> DashboardSnapshot {
        DashboardSnapshot::compute(&self.orders, &self.products, today)
    }
}
