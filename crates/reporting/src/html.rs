//! Static HTML exports.
//!
//! Both documents are self-contained pages meant to be opened in a browser
//! and printed to PDF. All interpolated text is escaped.

use std::fmt::{self, Write};

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use inventix_sales::Order;

use crate::aggregate::ReportSummary;

const REPORT_STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 40px; color: #333; }
.header { text-align: center; border-bottom: 2px solid #d4af37; padding-bottom: 20px; margin-bottom: 30px; }
.header h1 { color: #d4af37; margin: 0; font-size: 28px; }
.header p { margin: 5px 0; color: #666; }
.section { margin-bottom: 25px; }
.section h2 { color: #d4af37; border-bottom: 1px solid #ddd; padding-bottom: 5px; }
.stats-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; margin: 15px 0; }
.stat-item { background: #f9f9f9; padding: 15px; border-radius: 5px; }
.stat-label { font-weight: bold; color: #555; }
.stat-value { font-size: 18px; color: #d4af37; font-weight: bold; }
.products-list { background: #f9f9f9; padding: 15px; border-radius: 5px; }
.product-row { margin: 8px 0; padding: 8px; background: white; border-radius: 3px; }
.footer { text-align: center; margin-top: 40px; padding-top: 20px; border-top: 1px solid #ddd; color: #666; }
";

const INVOICE_STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 40px; color: #333; }
.header { text-align: center; border-bottom: 2px solid #d4af37; padding-bottom: 20px; margin-bottom: 30px; }
.header h1 { color: #d4af37; margin: 0; font-size: 28px; }
.invoice-info { display: grid; grid-template-columns: 1fr 1fr; gap: 30px; margin: 20px 0; }
.section { margin-bottom: 25px; }
.section h3 { color: #d4af37; border-bottom: 1px solid #ddd; padding-bottom: 5px; }
.bill-table { width: 100%; border-collapse: collapse; margin: 20px 0; }
.bill-table th, .bill-table td { border: 1px solid #ddd; padding: 12px; text-align: left; }
.bill-table th { background: #f9f9f9; color: #d4af37; font-weight: bold; }
.total-row { background: #f9f9f9; font-weight: bold; }
.footer { text-align: center; margin-top: 40px; padding-top: 20px; border-top: 1px solid #ddd; color: #666; }
";

/// Escape text for HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Plain number rendering: `100`, `12.5`, never `-0`.
pub fn format_amount(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Grouped rendering with at most three fraction digits: `1,234,567.891`.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return format_amount(value);
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    if value < 0.0 && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

/// Date as shown on documents: `6/1/2024`.
fn display_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

pub fn report_file_name(date: NaiveDate) -> String {
    format!("Inventix_Report_{}.html", date.format("%Y-%m-%d"))
}

/// Invoice file name. The order code comes from the backend, so anything
/// outside `[A-Za-z0-9._-]` is replaced with `_` to keep the name a single
/// path component.
pub fn invoice_file_name(order: &Order, date: NaiveDate) -> String {
    format!("Invoice_{}_{}.html", file_safe(&order.order_id), date.format("%Y-%m-%d"))
}

fn file_safe(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' })
        .collect()
}

/// Render the business report for `summary`.
pub fn render_report(summary: &ReportSummary, generated_on: NaiveDate) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, summary, generated_on);
    out
}

fn write_stat(out: &mut String, label: &str, value: &str) -> fmt::Result {
    writeln!(out, "<div class=\"stat-item\">")?;
    writeln!(out, "<div class=\"stat-label\">{}</div>", escape(label))?;
    writeln!(out, "<div class=\"stat-value\">{value}</div>")?;
    writeln!(out, "</div>")
}

fn write_report(out: &mut String, s: &ReportSummary, generated_on: NaiveDate) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>Inventix Business Report</title>")?;
    writeln!(out, "<style>\n{REPORT_STYLE}</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;

    writeln!(out, "<div class=\"header\">")?;
    writeln!(out, "<h1>📦 INVENTIX BUSINESS REPORT</h1>")?;
    writeln!(out, "<p>Generated on: {}</p>", display_date(generated_on))?;
    writeln!(out, "</div>")?;

    writeln!(out, "<div class=\"section\">")?;
    writeln!(out, "<h2>💰 FINANCIAL SUMMARY</h2>")?;
    writeln!(out, "<div class=\"stats-grid\">")?;
    write_stat(out, "Total Revenue (Completed)", &format!("${}", format_amount(s.total_revenue)))?;
    write_stat(out, "Pending Revenue", &format!("${}", format_amount(s.pending_revenue)))?;
    write_stat(
        out,
        "Total Inventory Value",
        &format!("${}", format_grouped(s.total_inventory_value)),
    )?;
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;

    writeln!(out, "<div class=\"section\">")?;
    writeln!(out, "<h2>📊 ORDER STATISTICS</h2>")?;
    writeln!(out, "<div class=\"stats-grid\">")?;
    write_stat(out, "Total Orders", &s.total_orders.to_string())?;
    write_stat(out, "Completed Orders", &s.completed_orders.to_string())?;
    write_stat(out, "Processing Orders", &s.processing_orders.to_string())?;
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;

    writeln!(out, "<div class=\"section\">")?;
    writeln!(out, "<h2>📦 INVENTORY STATUS</h2>")?;
    writeln!(out, "<div class=\"stats-grid\">")?;
    write_stat(out, "Total Products", &s.total_products.to_string())?;
    write_stat(out, "Low Stock Items", &s.low_stock_items.to_string())?;
    write_stat(out, "Out of Stock Items", &s.out_of_stock_items.to_string())?;
    write_stat(out, "Total Customers", &s.total_customers.to_string())?;
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;

    writeln!(out, "<div class=\"section\">")?;
    writeln!(out, "<h2>🏆 TOP SELLING PRODUCTS (by Revenue)</h2>")?;
    writeln!(out, "<div class=\"products-list\">")?;
    for (rank, entry) in s.top_products.iter().enumerate() {
        writeln!(
            out,
            "<div class=\"product-row\"><strong>{}. {}</strong> - <span style=\"color: #d4af37;\">${}</span></div>",
            rank + 1,
            escape(&entry.product_name),
            format_amount(entry.revenue),
        )?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;

    writeln!(out, "<div class=\"footer\">")?;
    writeln!(out, "<p>Report generated by Inventix Admin Dashboard</p>")?;
    writeln!(out, "<p>© {} Inventix - Inventory Management System</p>", generated_on.year())?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

/// Customer id printed on invoices: `CUST-` + name without whitespace, upper-cased.
pub fn customer_code(customer_name: &str) -> String {
    let compact: String = customer_name.chars().filter(|c| !c.is_whitespace()).collect();
    format!("CUST-{}", compact.to_uppercase())
}

/// Render the invoice for a single order.
pub fn render_invoice(order: &Order, issued_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_invoice(&mut out, order, issued_at);
    out
}

fn write_invoice(out: &mut String, order: &Order, issued_at: DateTime<Utc>) -> fmt::Result {
    let code = escape(&order.order_id);

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>Invoice - {code}</title>")?;
    writeln!(out, "<style>\n{INVOICE_STYLE}</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;

    writeln!(out, "<div class=\"header\">")?;
    writeln!(out, "<h1>📦 INVENTIX</h1>")?;
    writeln!(out, "<p>Inventory Management System</p>")?;
    writeln!(out, "<h2>INVOICE</h2>")?;
    writeln!(out, "</div>")?;

    writeln!(out, "<div class=\"invoice-info\">")?;
    writeln!(out, "<div class=\"section\">")?;
    writeln!(out, "<h3>Bill To:</h3>")?;
    writeln!(out, "<p><strong>{}</strong></p>", escape(&order.customer_name))?;
    writeln!(out, "<p>Customer ID: {}</p>", escape(&customer_code(&order.customer_name)))?;
    writeln!(out, "</div>")?;
    writeln!(out, "<div class=\"section\">")?;
    writeln!(out, "<h3>Invoice Details:</h3>")?;
    writeln!(out, "<p><strong>Invoice #:</strong> {code}</p>")?;
    writeln!(out, "<p><strong>Date:</strong> {}</p>", escape(order.date.as_deref().unwrap_or("")))?;
    writeln!(out, "<p><strong>Status:</strong> {}</p>", escape(order.status.as_str()))?;
    writeln!(
        out,
        "<p><strong>Est. Delivery:</strong> {}</p>",
        escape(order.estimated_delivery.as_deref().unwrap_or(""))
    )?;
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;

    writeln!(out, "<table class=\"bill-table\">")?;
    writeln!(out, "<thead>")?;
    writeln!(out, "<tr><th>Product</th><th>Quantity</th><th>Unit Price</th><th>Total</th></tr>")?;
    writeln!(out, "</thead>")?;
    writeln!(out, "<tbody>")?;
    writeln!(
        out,
        "<tr><td>{}</td><td>{}</td><td>${}</td><td>${}</td></tr>",
        escape(&order.product_name),
        order.quantity,
        format_amount(order.price),
        format_amount(order.total),
    )?;
    writeln!(
        out,
        "<tr class=\"total-row\"><td colspan=\"3\"><strong>Grand Total</strong></td><td><strong>${}</strong></td></tr>",
        format_amount(order.total),
    )?;
    writeln!(out, "</tbody>")?;
    writeln!(out, "</table>")?;

    writeln!(out, "<div class=\"section\">")?;
    writeln!(out, "<h3>Payment Information:</h3>")?;
    writeln!(out, "<p>Payment Method: Online Payment</p>")?;
    writeln!(out, "<p>Transaction ID: TXN-{code}-{}</p>", issued_at.timestamp_millis())?;
    writeln!(out, "</div>")?;

    writeln!(out, "<div class=\"footer\">")?;
    writeln!(out, "<p>Thank you for your business!</p>")?;
    writeln!(out, "<p>© {} Inventix - Inventory Management System</p>", issued_at.year())?;
    writeln!(out, "<p>For support, contact: support@inventix.com</p>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::aggregate::ProductRevenue;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn summary() -> ReportSummary {
        ReportSummary {
            total_revenue: 1998.0,
            pending_revenue: 75.5,
            total_orders: 4,
            completed_orders: 2,
            processing_orders: 1,
            total_products: 3,
            total_customers: 2,
            total_inventory_value: 46_570.0,
            low_stock_items: 1,
            out_of_stock_items: 0,
            top_products: vec![
                ProductRevenue { product_name: "Laptop Pro".into(), revenue: 1998.0 },
                ProductRevenue { product_name: "<Case & Co>".into(), revenue: 75.5 },
            ],
        }
    }

    #[test]
    fn escape_covers_markup() {
        assert_eq!(escape(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn amounts_render_like_plain_numbers() {
        assert_eq!(format_amount(100.0), "100");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(-0.0), "0");
    }

    #[test]
    fn grouped_rendering() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(46_570.0), "46,570");
        assert_eq!(format_grouped(1_234_567.891), "1,234,567.891");
        assert_eq!(format_grouped(1234.5678), "1,234.568");
        assert_eq!(format_grouped(-2500.25), "-2,500.25");
        assert_eq!(format_grouped(-0.0001), "0");
    }

    #[test]
    fn file_names() {
        assert_eq!(report_file_name(date()), "Inventix_Report_2024-06-01.html");
        let order: Order = serde_json::from_value(serde_json::json!({"orderId": "ORD-007"})).unwrap();
        assert_eq!(invoice_file_name(&order, date()), "Invoice_ORD-007_2024-06-01.html");
    }

    #[test]
    fn invoice_file_name_stays_one_component() {
        for code in ["/../../escaped", "..\\win\\path", "ORD 1?#"] {
            let order: Order = serde_json::from_value(serde_json::json!({"orderId": code})).unwrap();
            let name = invoice_file_name(&order, date());
            assert!(!name.contains('/') && !name.contains('\\'), "{name}");
            assert_eq!(std::path::Path::new(&name).components().count(), 1, "{name}");
        }
        let order: Order = serde_json::from_value(serde_json::json!({"orderId": "/../../escaped"})).unwrap();
        assert_eq!(invoice_file_name(&order, date()), "Invoice__.._.._escaped_2024-06-01.html");
    }

    #[test]
    fn report_contains_every_figure() {
        let html = render_report(&summary(), date());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Generated on: 6/1/2024"));
        assert!(html.contains("$1998"));
        assert!(html.contains("$75.5"));
        assert!(html.contains("$46,570"));
        assert!(html.contains("<div class=\"stat-value\">4</div>"));
        assert!(html.contains("1. Laptop Pro"));
        assert!(html.contains("2. &lt;Case &amp; Co&gt;"));
        assert!(!html.contains("<Case & Co>"));
        assert!(html.contains("© 2024 Inventix"));
    }

    #[test]
    fn empty_report_renders() {
        let html = render_report(&ReportSummary::default(), date());
        assert!(html.contains("$0"));
        assert!(!html.contains("product-row\">"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn customer_code_strips_whitespace() {
        assert_eq!(customer_code("John  Doe"), "CUST-JOHNDOE");
        assert_eq!(customer_code(""), "CUST-");
    }

    #[test]
    fn invoice_contains_order_details() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "orderId": "ORD-001",
            "customerName": "Jane Smith",
            "productName": "iPhone Case",
            "quantity": 3,
            "price": 25,
            "total": 75,
            "status": "Processing",
            "date": "2024-06-01",
            "estimatedDelivery": "2024-06-08",
        }))
        .unwrap();
        let issued = Utc.with_ymd_and_hms(2024, 6, 2, 8, 0, 0).unwrap();

        let html = render_invoice(&order, issued);
        assert!(html.contains("<title>Invoice - ORD-001</title>"));
        assert!(html.contains("Customer ID: CUST-JANESMITH"));
        assert!(html.contains("<strong>Est. Delivery:</strong> 2024-06-08"));
        assert!(html.contains("<td>iPhone Case</td><td>3</td><td>$25</td><td>$75</td>"));
        assert!(html.contains(&format!("TXN-ORD-001-{}", issued.timestamp_millis())));
    }
}
