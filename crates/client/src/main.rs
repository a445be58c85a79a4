use anyhow::Context;
use chrono::Utc;

use inventix_client::export::write_report;
use inventix_client::{ClientConfig, InventixClient, StoreSnapshot};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    inventix_observability::init();

    let config = ClientConfig::from_env().context("failed to load configuration")?;
    tracing::info!(api_url = %config.api_url, "generating business report");

    let client = InventixClient::new(&config)?;
    let snapshot = StoreSnapshot::fetch(&client)
        .await
        .with_context(|| format!("failed to fetch data from {}", config.api_url))?;

    let now = Utc::now();
    let summary = snapshot.report();
    let dashboard = snapshot.dashboard(now.date_naive());
    let path = write_report(&summary, &config.report_dir, now)
        .await
        .with_context(|| format!("failed to write report into {}", config.report_dir.display()))?;

    tracing::info!(
        path = %path.display(),
        total_revenue = summary.total_revenue,
        pending_revenue = summary.pending_revenue,
        total_orders = summary.total_orders,
        low_stock_items = summary.low_stock_items,
        out_of_stock_items = summary.out_of_stock_items,
        todays_orders = dashboard.todays_orders,
        "report complete"
    );

    Ok(())
}
