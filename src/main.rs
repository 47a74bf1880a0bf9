use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tracing::{error, info, warn};

use stock_lens::analyzer::{Analyzer, AnalyzerImpl, ingest};
use stock_lens::config::{ReportConfig, load_config};
use stock_lens::error::ReportError;
use stock_lens::loader::{CsvLoader, DatasetLoader};
use stock_lens::render::json::write_json_report;
use stock_lens::render::text::write_text_report;
use stock_lens::schema;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from file
    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            std::process::exit(1);
        }
    };

    info!("🚀 stock-lens started!");
    info!("Reports to build: {}", config.reports.len());

    let loader = CsvLoader::new();
    let analyzer = AnalyzerImpl::new();

    let mut failures = 0;
    for report_cfg in &config.reports {
        if let Err(e) = run_report(&loader, &analyzer, report_cfg) {
            error!("Report '{}' failed: {}", report_cfg.name, e);
            failures += 1;
        }
    }

    if failures > 0 {
        error!("{} of {} reports failed", failures, config.reports.len());
        std::process::exit(1);
    }
}

/// Builds and renders a single configured report: load, ingest, analyze,
/// print, and optionally dump JSON for downstream consumers.
fn run_report(
    loader: &CsvLoader,
    analyzer: &AnalyzerImpl,
    cfg: &ReportConfig,
) -> Result<(), ReportError> {
    info!("Processing report '{}': {}", cfg.name, cfg.data_path);

    let table = loader.load(Path::new(&cfg.data_path))?;
    info!(
        "Loaded {} rows, {} columns",
        table.rows.len(),
        table.headers.len()
    );

    let dataset = ingest::load(&table, &schema::REQUIRED, cfg.value_policy)?;
    if dataset.rows.is_empty() {
        warn!("Dataset for '{}' is empty", cfg.name);
    }

    let report = analyzer.build_report(&dataset, cfg);
    info!(
        "KPIs: total unsold = {:.2}, zero-sold = {}, slow movers = {}",
        report.kpis.total_unsold_value, report.kpis.zero_sold_count, report.kpis.slow_mover_count
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_text_report(&mut out, &report, cfg)?;
    out.flush()?;

    if let Some(json_path) = &cfg.json_out {
        let mut file = File::create(json_path)?;
        write_json_report(&mut file, &report)?;
        info!("JSON report written to {}", json_path);
    }

    info!("Finished report '{}'", cfg.name);
    Ok(())
}
