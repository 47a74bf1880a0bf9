use crate::model::AnnotatedRow;

/// Ranks the least-active items: fewest units sold first, optionally
/// breaking ties by highest stock. The sort is stable, so rows equal on
/// both keys keep their input order. A limit past the end returns all rows.
pub fn rank_inactive(
    rows: &[AnnotatedRow],
    limit: usize,
    stock_tiebreak: bool,
) -> Vec<AnnotatedRow> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| {
        let by_sold = a.row.qty_sold.total_cmp(&b.row.qty_sold);
        if stock_tiebreak {
            by_sold.then_with(|| b.row.stock.total_cmp(&a.row.stock))
        } else {
            by_sold
        }
    });
    ranked.truncate(limit);
    ranked
}
