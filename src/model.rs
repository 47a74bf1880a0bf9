// Core structs: RawTable, InventoryRow, Dataset, AnnotatedRow, Kpis, InventoryReport
use serde::Serialize;

/// Untyped table straight from the loader: headers plus string cells.
/// This is the format-agnostic boundary between file I/O and the analyzer.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One inventory item record after ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRow {
    pub item_code: Option<String>,
    pub item_name: String,
    pub stock: f64,
    pub qty_sold: f64,
    pub cost_price: f64,
    pub sell_price: Option<f64>,
    pub margin: Option<f64>,
}

/// Typed dataset after schema validation. Column presence is recorded at
/// dataset level: sales totals and margin KPIs only exist when the column does.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub rows: Vec<InventoryRow>,
    pub has_sell_price: bool,
    pub has_margin: bool,
}

/// An inventory row together with its derived fields. The input row is
/// never mutated; annotation produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedRow {
    #[serde(flatten)]
    pub row: InventoryRow,
    pub unsold_value: f64,
    pub total_sales: Option<f64>,
}

/// Scalar metrics over one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub total_unsold_value: f64,
    pub ranked_unsold_value: f64,
    pub zero_sold_count: usize,
    pub slow_mover_count: usize,
    /// Mean margin percentage. None when the dataset has no margin source.
    pub avg_margin: Option<f64>,
}

/// The full report value. Carries no clock: the same dataset must produce
/// an equal report on every run. Render-time timestamps belong to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryReport {
    pub all_rows: Vec<AnnotatedRow>,
    pub ranked_inactive: Vec<AnnotatedRow>,
    pub kpis: Kpis,
    pub insights: Vec<String>,
}
