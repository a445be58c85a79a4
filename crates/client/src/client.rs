//! HTTP access to the `products`, `users` and `orders` collections.

use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::json;

use inventix_core::RecordId;
use inventix_parties::{customers, User};
use inventix_products::{default_catalog, Product};
use inventix_sales::{NewOrder, Order, OrderStatus};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Typed client for the Inventix backend.
///
/// Holds one connection pool; clone it freely.
#[derive(Debug, Clone)]
pub struct InventixClient {
    http: reqwest::Client,
    base_url: Url,
}

impl InventixClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build http client: {e}")))?;
        let base_url = Url::parse(config.api_url.trim_end_matches('/'))
            .map_err(|e| ClientError::Config(format!("invalid api url {:?}: {e}", config.api_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!("{:?} cannot be used as a base url", config.api_url)));
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `<base>/<collection>`.
    fn url(&self, collection: &str) -> Url {
        self.endpoint(&[collection])
    }

    /// `<base>/<collection>/<id>`, with the id percent-encoded as one segment.
    fn record_url(&self, collection: &str, id: &RecordId) -> Url {
        self.endpoint(&[collection, id.as_str()])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    // ---------------------------------------------------------------------
    // Products
    // ---------------------------------------------------------------------

    /// Every product, with a placeholder image filled in where none is set.
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let products: Vec<Product> = self.fetch(self.http.get(self.url("products"))).await?;
        tracing::debug!(count = products.len(), "fetched products");
        Ok(products.into_iter().map(Product::with_placeholder_image).collect())
    }

    pub async fn create_product(&self, draft: &Product) -> Result<Product, ClientError> {
        draft.validate()?;
        let body = draft.clone().with_placeholder_image();
        let created: Product = self.fetch(self.http.post(self.url("products")).json(&body)).await?;
        tracing::info!(name = %created.name, "created product");
        Ok(created)
    }

    pub async fn update_product(&self, id: &RecordId, draft: &Product) -> Result<Product, ClientError> {
        draft.validate()?;
        let body = draft.clone().with_placeholder_image();
        let updated: Product = self
            .fetch(self.http.put(self.record_url("products", id)).json(&body))
            .await?;
        tracing::info!(%id, "updated product");
        Ok(updated)
    }

    /// Set the stock level of one product, leaving its other fields alone.
    pub async fn update_stock(&self, id: &RecordId, stock: i64) -> Result<Product, ClientError> {
        if stock < 0 {
            return Err(inventix_core::DomainError::validation("stock cannot be negative").into());
        }
        let updated: Product = self
            .fetch(
                self.http
                    .put(self.record_url("products", id))
                    .json(&json!({ "stock": stock })),
            )
            .await?;
        tracing::info!(%id, stock, "updated stock");
        Ok(updated)
    }

    pub async fn delete_product(&self, id: &RecordId) -> Result<(), ClientError> {
        self.send(self.http.delete(self.record_url("products", id))).await?;
        tracing::info!(%id, "deleted product");
        Ok(())
    }

    /// List the catalog, seeding the default products first when it is empty.
    pub async fn load_catalog(&self) -> Result<Vec<Product>, ClientError> {
        let products = self.list_products().await?;
        if !products.is_empty() {
            return Ok(products);
        }

        tracing::info!("catalog is empty; seeding default products");
        for product in default_catalog() {
            self.create_product(&product).await?;
        }
        self.list_products().await
    }

    // ---------------------------------------------------------------------
    // Users
    // ---------------------------------------------------------------------

    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.fetch(self.http.get(self.url("users"))).await
    }

    /// Users that are not administrators.
    pub async fn list_customers(&self) -> Result<Vec<User>, ClientError> {
        let users = self.list_users().await?;
        Ok(customers(&users))
    }

    // ---------------------------------------------------------------------
    // Orders
    // ---------------------------------------------------------------------

    pub async fn list_orders(&self) -> Result<Vec<Order>, ClientError> {
        let orders: Vec<Order> = self.fetch(self.http.get(self.url("orders"))).await?;
        tracing::debug!(count = orders.len(), "fetched orders");
        Ok(orders)
    }

    /// Orders whose customer name matches `customer_name` exactly.
    pub async fn list_orders_for(&self, customer_name: &str) -> Result<Vec<Order>, ClientError> {
        let orders = self.list_orders().await?;
        Ok(orders.into_iter().filter(|o| o.belongs_to(customer_name)).collect())
    }

    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ClientError> {
        let created: Order = self.fetch(self.http.post(self.url("orders")).json(order)).await?;
        tracing::info!(
            order_id = %created.order_id,
            customer = %created.customer_name,
            total = created.total,
            "placed order"
        );
        Ok(created)
    }

    pub async fn update_order_status(&self, id: &RecordId, status: &OrderStatus) -> Result<Order, ClientError> {
        let updated: Order = self
            .fetch(
                self.http
                    .put(self.record_url("orders", id))
                    .json(&json!({ "status": status })),
            )
            .await?;
        tracing::info!(%id, %status, "updated order status");
        Ok(updated)
    }

    pub async fn delete_order(&self, id: &RecordId) -> Result<(), ClientError> {
        self.send(self.http.delete(self.record_url("orders", id))).await?;
        tracing::info!(%id, "deleted order");
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Transport
    // ---------------------------------------------------------------------

    async fn send(&self, req: RequestBuilder) -> Result<Response, ClientError> {
        let resp = req.send().await.map_err(|e| {
            tracing::warn!(error = %e, "request failed");
            ClientError::Network(e.to_string())
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "backend returned an error");
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp)
    }

    async fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ClientError> {
        let resp = self.send(req).await?;
        let text = resp.text().await?;
        serde_json::from_str(&text).map_err(|e| ClientError::Parse(e.to_string()))
    }
}
