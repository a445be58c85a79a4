//! Reporting over order and product snapshots.
//!
//! Every computation here is a pure function of the lists passed in and
//! cannot fail. Malformed numbers were already coerced to 0 when the records
//! were read, so the figures always render.

pub mod aggregate;
pub mod customer;
pub mod dashboard;
pub mod html;

pub use aggregate::{aggregate_report, top_products, ProductRevenue, ReportSummary, TOP_PRODUCTS_LIMIT};
pub use customer::CustomerHistory;
pub use dashboard::DashboardSnapshot;
pub use html::{invoice_file_name, render_invoice, render_report, report_file_name};
