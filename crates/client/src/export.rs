//! Writes rendered HTML documents to disk.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use inventix_reporting::{invoice_file_name, render_invoice, render_report, report_file_name, ReportSummary};
use inventix_sales::Order;

use crate::error::ClientError;

/// Render the business report and write it into `dir`.
///
/// The file is named after the UTC day of `generated_at`; an existing report
/// for the same day is overwritten.
pub async fn write_report(
    summary: &ReportSummary,
    dir: &Path,
    generated_at: DateTime<Utc>,
) -> Result<PathBuf, ClientError> {
    let day = generated_at.date_naive();
    let path = dir.join(report_file_name(day));
    write_document(&path, render_report(summary, day)).await?;
    tracing::info!(path = %path.display(), "wrote report");
    Ok(path)
}

/// Render the invoice for `order` and write it into `dir`.
pub async fn write_invoice(order: &Order, dir: &Path, issued_at: DateTime<Utc>) -> Result<PathBuf, ClientError> {
    let path = dir.join(invoice_file_name(order, issued_at.date_naive()));
    write_document(&path, render_invoice(order, issued_at)).await?;
    tracing::info!(path = %path.display(), order_id = %order.order_id, "wrote invoice");
    Ok(path)
}

async fn write_document(path: &Path, html: String) -> Result<(), ClientError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, html).await?;
    Ok(())
}
