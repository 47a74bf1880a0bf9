// Terminal rendering: KPI cards, insight bullets, ranked table.
use std::io::Write;

use chrono::Utc;

use crate::config::ReportConfig;
use crate::model::InventoryReport;
use crate::utils::{format_count, format_thousands};

const BAR_WIDTH: usize = 40;
const NAME_WIDTH: usize = 30;

/// Writes the full text report. The clock in the footer is the only
/// non-deterministic output; everything above it comes from the report value.
pub fn write_text_report<W: Write>(
    w: &mut W,
    report: &InventoryReport,
    cfg: &ReportConfig,
) -> std::io::Result<()> {
    let title = match &cfg.period {
        Some(period) => format!("📊 Inactive Items ({})", period),
        None => "📊 Inactive Items".to_string(),
    };
    writeln!(w, "{}", title)?;
    writeln!(w, "{}", "=".repeat(title.chars().count() + 2))?;
    writeln!(w)?;

    write_kpi_cards(w, report)?;
    write_insights(w, report)?;
    write_stock_bars(w, report)?;
    write_ranked_table(w, report)?;

    writeln!(w, "Generated: {}", Utc::now().format("%Y-%m-%d %H:%M UTC"))
}

fn write_kpi_cards<W: Write>(w: &mut W, report: &InventoryReport) -> std::io::Result<()> {
    let kpis = &report.kpis;
    writeln!(
        w,
        "💰 Total Unsold Value: {}",
        format_thousands(kpis.total_unsold_value)
    )?;
    writeln!(
        w,
        "📦 Completely Unsold Items: {}",
        format_count(kpis.zero_sold_count)
    )?;
    writeln!(w, "🐌 Slow Movers: {}", format_count(kpis.slow_mover_count))?;
    writeln!(
        w,
        "🔥 Unsold Value (Top {} Low-Sold High-Stock): {}",
        report.ranked_inactive.len(),
        format_thousands(kpis.ranked_unsold_value)
    )?;
    if let Some(avg) = kpis.avg_margin {
        writeln!(w, "📈 Average Margin: {:.1}%", avg)?;
    }
    writeln!(w)
}

fn write_insights<W: Write>(w: &mut W, report: &InventoryReport) -> std::io::Result<()> {
    writeln!(w, "Insights:")?;
    for line in &report.insights {
        writeln!(w, "  - {}", line)?;
    }
    writeln!(w)
}

/// Horizontal stock bar per ranked item, annotated with units sold.
fn write_stock_bars<W: Write>(w: &mut W, report: &InventoryReport) -> std::io::Result<()> {
    if report.ranked_inactive.is_empty() {
        return Ok(());
    }
    writeln!(
        w,
        "🚨 Top {} Low-Selling Items with High Stock",
        report.ranked_inactive.len()
    )?;

    let max_stock = report
        .ranked_inactive
        .iter()
        .map(|r| r.row.stock)
        .fold(0.0_f64, f64::max);
    for item in &report.ranked_inactive {
        writeln!(
            w,
            "  {:<width$} {:<bar$} Sold: {}",
            fit_name(&item.row.item_name),
            stock_bar(item.row.stock, max_stock),
            item.row.qty_sold,
            width = NAME_WIDTH,
            bar = BAR_WIDTH,
        )?;
    }
    writeln!(w)
}

fn write_ranked_table<W: Write>(w: &mut W, report: &InventoryReport) -> std::io::Result<()> {
    writeln!(
        w,
        "📋 Data Table (Top {} Inactive Items)",
        report.ranked_inactive.len()
    )?;
    writeln!(
        w,
        "  {:<12} {:<width$} {:>10} {:>10} {:>12} {:>14}",
        "Item Code",
        "Item Name",
        "Stock",
        "Qty Sold",
        "Cost Price",
        "Unsold Value",
        width = NAME_WIDTH,
    )?;
    for item in &report.ranked_inactive {
        writeln!(
            w,
            "  {:<12} {:<width$} {:>10} {:>10} {:>12} {:>14}",
            item.row.item_code.as_deref().unwrap_or("-"),
            fit_name(&item.row.item_name),
            item.row.stock,
            item.row.qty_sold,
            format_thousands(item.row.cost_price),
            format_thousands(item.unsold_value),
            width = NAME_WIDTH,
        )?;
    }
    writeln!(w)
}

fn stock_bar(stock: f64, max_stock: f64) -> String {
    if max_stock <= 0.0 {
        return String::new();
    }
    let filled = ((stock / max_stock) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.min(BAR_WIDTH))
}

fn fit_name(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        return name.to_string();
    }
    let mut head: String = name.chars().take(NAME_WIDTH - 1).collect();
    head.push('…');
    head
}
