use crate::config::ReportConfig;
use crate::model::Kpis;

/// Derives the ordered observation list from KPI values and the report
/// thresholds. Pure function of its inputs: same KPIs, same insights.
pub fn build_insights(kpis: &Kpis, row_count: usize, cfg: &ReportConfig) -> Vec<String> {
    if row_count == 0 {
        return vec!["No data in this dataset.".to_string()];
    }

    let mut insights = Vec::new();

    if kpis.zero_sold_count > 0 {
        insights.push(format!(
            "{} items had zero sales this period.",
            kpis.zero_sold_count
        ));
    }

    if kpis.slow_mover_count > 0 {
        insights.push(format!(
            "{} items are slow movers (fewer than {} units sold).",
            kpis.slow_mover_count, cfg.slow_mover_threshold
        ));
    }

    if let Some(avg) = kpis.avg_margin {
        if avg < cfg.margin_floor {
            insights.push(format!(
                "Average margin {:.1}% is below the {:.1}% floor.",
                avg, cfg.margin_floor
            ));
        }
    }

    if kpis.total_unsold_value > 0.0 {
        let share = kpis.ranked_unsold_value / kpis.total_unsold_value;
        if share >= cfg.concentration_alert {
            insights.push(format!(
                "The {} least-active items hold {:.0}% of all unsold stock value.",
                cfg.limit.min(row_count),
                share * 100.0
            ));
        }
    }

    if insights.is_empty() {
        insights.push("No critical issues detected.".to_string());
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ReportConfig {
        serde_json::from_str(r#"{ "name": "test", "data_path": "unused.csv" }"#).unwrap()
    }

    fn kpis() -> Kpis {
        Kpis {
            total_unsold_value: 0.0,
            ranked_unsold_value: 0.0,
            zero_sold_count: 0,
            slow_mover_count: 0,
            avg_margin: None,
        }
    }

    #[test]
    fn empty_dataset_yields_no_data_line() {
        let insights = build_insights(&kpis(), 0, &cfg());
        assert_eq!(insights, vec!["No data in this dataset."]);
    }

    #[test]
    fn quiet_dataset_yields_all_clear() {
        let insights = build_insights(&kpis(), 10, &cfg());
        assert_eq!(insights, vec!["No critical issues detected."]);
    }

    #[test]
    fn zero_sales_and_slow_movers_are_reported_in_order() {
        let mut k = kpis();
        k.zero_sold_count = 7;
        k.slow_mover_count = 3;
        let insights = build_insights(&k, 10, &cfg());
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0], "7 items had zero sales this period.");
        assert_eq!(insights[1], "3 items are slow movers (fewer than 5 units sold).");
    }

    #[test]
    fn margin_below_floor_fires() {
        let mut k = kpis();
        k.avg_margin = Some(12.34);
        let insights = build_insights(&k, 10, &cfg());
        assert_eq!(insights, vec!["Average margin 12.3% is below the 20.0% floor."]);
    }

    #[test]
    fn margin_at_or_above_floor_stays_quiet() {
        let mut k = kpis();
        k.avg_margin = Some(20.0);
        let insights = build_insights(&k, 10, &cfg());
        assert_eq!(insights, vec!["No critical issues detected."]);
    }

    #[test]
    fn concentration_alert_fires_on_share() {
        let mut k = kpis();
        k.total_unsold_value = 100.0;
        k.ranked_unsold_value = 80.0;
        let insights = build_insights(&k, 200, &cfg());
        assert_eq!(
            insights,
            vec!["The 30 least-active items hold 80% of all unsold stock value."]
        );
    }

    #[test]
    fn concentration_count_is_capped_by_row_count() {
        let mut k = kpis();
        k.total_unsold_value = 100.0;
        k.ranked_unsold_value = 100.0;
        let insights = build_insights(&k, 4, &cfg());
        assert_eq!(
            insights,
            vec!["The 4 least-active items hold 100% of all unsold stock value."]
        );
    }
}
