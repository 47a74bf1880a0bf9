use serde::Deserialize;
use std::fs;

use crate::error::ReportError;

/// What to do with a negative quantity or price during ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuePolicy {
    /// Fail the report, naming the row, column and offending value.
    #[default]
    Reject,
    /// Floor negative values at zero and keep going.
    ClampToZero,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub name: String,
    pub data_path: String,
    /// Period label shown in the report title, e.g. "September".
    #[serde(default)]
    pub period: Option<String>,
    /// Size of the ranked inactive subset.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Break ties between equally-unsold items by highest stock first.
    #[serde(default = "default_true")]
    pub stock_tiebreak: bool,
    /// Upper bound (exclusive) for the slow-mover classification.
    #[serde(default = "default_slow_mover_threshold")]
    pub slow_mover_threshold: f64,
    /// The margin insight fires when the average drops below this percentage.
    #[serde(default = "default_margin_floor")]
    pub margin_floor: f64,
    /// The concentration insight fires when the ranked subset holds at
    /// least this share of the total unsold value.
    #[serde(default = "default_concentration_alert")]
    pub concentration_alert: f64,
    #[serde(default)]
    pub value_policy: ValuePolicy,
    /// Derive per-row margin from sell and cost price when the dataset has
    /// no Margin column. Off unless asked for.
    #[serde(default)]
    pub derive_margin: bool,
    /// Optional path for a JSON copy of the report.
    #[serde(default)]
    pub json_out: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub reports: Vec<ReportConfig>,
}

pub fn load_config(path: &str) -> Result<AppConfig, ReportError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)
        .map_err(|e| ReportError::Config(format!("{}: {}", path, e)))?;
    if config.reports.is_empty() {
        return Err(ReportError::Config(format!(
            "{}: no report entries configured",
            path
        )));
    }
    Ok(config)
}

fn default_limit() -> usize {
    30
}

fn default_true() -> bool {
    true
}

fn default_slow_mover_threshold() -> f64 {
    5.0
}

fn default_margin_floor() -> f64 {
    20.0
}

fn default_concentration_alert() -> f64 {
    0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_entry_gets_defaults() {
        let cfg: ReportConfig = serde_json::from_str(
            r#"{ "name": "september", "data_path": "data/sep.csv" }"#,
        )
        .unwrap();
        assert_eq!(cfg.limit, 30);
        assert!(cfg.stock_tiebreak);
        assert!((cfg.slow_mover_threshold - 5.0).abs() < f64::EPSILON);
        assert!((cfg.margin_floor - 20.0).abs() < f64::EPSILON);
        assert_eq!(cfg.value_policy, ValuePolicy::Reject);
        assert!(!cfg.derive_margin);
        assert!(cfg.period.is_none());
        assert!(cfg.json_out.is_none());
    }

    #[test]
    fn overrides_are_honored() {
        let cfg: ReportConfig = serde_json::from_str(
            r#"{
                "name": "compact",
                "data_path": "data/sep.csv",
                "limit": 15,
                "stock_tiebreak": false,
                "value_policy": "clamp_to_zero",
                "period": "September"
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.limit, 15);
        assert!(!cfg.stock_tiebreak);
        assert_eq!(cfg.value_policy, ValuePolicy::ClampToZero);
        assert_eq!(cfg.period.as_deref(), Some("September"));
    }
}
