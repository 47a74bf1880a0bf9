use crate::analyzer::{insights, ranking};
use crate::config::ReportConfig;
use crate::model::{AnnotatedRow, Dataset, InventoryReport, Kpis};

/// Trait defining the interface for the inventory analyzer.
pub trait Analyzer {
    fn annotate(&self, dataset: &Dataset) -> Vec<AnnotatedRow>;
    fn compute_kpis(
        &self,
        all: &[AnnotatedRow],
        ranked: &[AnnotatedRow],
        cfg: &ReportConfig,
    ) -> Kpis;
    /// Runs the full forward pass: annotate, rank, KPIs, insights.
    fn build_report(&self, dataset: &Dataset, cfg: &ReportConfig) -> InventoryReport;
}

/// Implementation of the inventory analyzer.
pub struct AnalyzerImpl;

impl AnalyzerImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for AnalyzerImpl {
    /// Annotates every row with its derived fields. Input rows are left
    /// untouched; the annotated collection is a new value.
    fn annotate(&self, dataset: &Dataset) -> Vec<AnnotatedRow> {
        dataset
            .rows
            .iter()
            .map(|row| AnnotatedRow {
                unsold_value: row.stock * row.cost_price,
                total_sales: row.sell_price.map(|sell| row.qty_sold * sell),
                row: row.clone(),
            })
            .collect()
    }

    /// Computes the scalar metrics over the full set and the ranked subset.
    fn compute_kpis(
        &self,
        all: &[AnnotatedRow],
        ranked: &[AnnotatedRow],
        cfg: &ReportConfig,
    ) -> Kpis {
        let total_unsold_value = all.iter().map(|r| r.unsold_value).sum();
        let ranked_unsold_value = ranked.iter().map(|r| r.unsold_value).sum();
        let zero_sold_count = all.iter().filter(|r| r.row.qty_sold == 0.0).count();
        let slow_mover_count = all
            .iter()
            .filter(|r| r.row.qty_sold > 0.0 && r.row.qty_sold < cfg.slow_mover_threshold)
            .count();

        Kpis {
            total_unsold_value,
            ranked_unsold_value,
            zero_sold_count,
            slow_mover_count,
            avg_margin: average_margin(all, cfg),
        }
    }

    fn build_report(&self, dataset: &Dataset, cfg: &ReportConfig) -> InventoryReport {
        let all_rows = self.annotate(dataset);
        let ranked_inactive = ranking::rank_inactive(&all_rows, cfg.limit, cfg.stock_tiebreak);
        let kpis = self.compute_kpis(&all_rows, &ranked_inactive, cfg);
        let insights = insights::build_insights(&kpis, all_rows.len(), cfg);

        InventoryReport {
            all_rows,
            ranked_inactive,
            kpis,
            insights,
        }
    }
}

/// Mean margin percentage across the rows that have one. When the dataset
/// carries no margin values the KPI is omitted rather than derived; only
/// the explicit `derive_margin` opt-in computes it from sell and cost price.
fn average_margin(all: &[AnnotatedRow], cfg: &ReportConfig) -> Option<f64> {
    let margins: Vec<f64> = all.iter().filter_map(|r| r.row.margin).collect();
    let margins = if margins.is_empty() && cfg.derive_margin {
        all.iter()
            .filter_map(|r| {
                r.row
                    .sell_price
                    .filter(|&sell| sell > 0.0)
                    .map(|sell| (sell - r.row.cost_price) / sell * 100.0)
            })
            .collect()
    } else {
        margins
    };

    if margins.is_empty() {
        return None;
    }
    Some(margins.iter().sum::<f64>() / margins.len() as f64)
}
