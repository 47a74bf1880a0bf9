// Schema validation and typed-row ingestion.
use std::collections::HashMap;

use crate::config::ValuePolicy;
use crate::error::ReportError;
use crate::model::{Dataset, InventoryRow, RawTable};
use crate::schema;

/// Validates the raw table against the required columns and parses typed rows.
///
/// Header names are trimmed before any by-name access. Every missing
/// required column is reported in one error, not just the first hit.
pub fn load(
    table: &RawTable,
    required: &[&str],
    policy: ValuePolicy,
) -> Result<Dataset, ReportError> {
    let index = header_index(&table.headers);

    let missing: Vec<String> = required
        .iter()
        .filter(|name| !index.contains_key(**name))
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ReportError::MissingColumns(missing));
    }

    let has_sell_price = index.contains_key(schema::SELL_PRICE);
    let has_margin = index.contains_key(schema::MARGIN);

    let mut rows = Vec::with_capacity(table.rows.len());
    for (row_num, cells) in table.rows.iter().enumerate() {
        rows.push(parse_row(row_num, cells, &index, policy)?);
    }

    Ok(Dataset {
        rows,
        has_sell_price,
        has_margin,
    })
}

fn header_index(headers: &[String]) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| (header.trim().to_string(), i))
        .collect()
}

fn cell<'a>(cells: &'a [String], index: &HashMap<String, usize>, name: &str) -> &'a str {
    index
        .get(name)
        .and_then(|&i| cells.get(i))
        .map(|s| s.as_str())
        .unwrap_or("")
}

fn parse_row(
    row_num: usize,
    cells: &[String],
    index: &HashMap<String, usize>,
    policy: ValuePolicy,
) -> Result<InventoryRow, ReportError> {
    let item_name = cell(cells, index, schema::ITEM_NAME).to_string();
    let item_code = match index.get(schema::ITEM_CODE) {
        Some(&i) => cells.get(i).filter(|c| !c.is_empty()).cloned(),
        None => None,
    };

    let stock = parse_quantity(row_num, schema::STOCK, cell(cells, index, schema::STOCK), policy)?;
    let qty_sold = parse_quantity(
        row_num,
        schema::QTY_SOLD,
        cell(cells, index, schema::QTY_SOLD),
        policy,
    )?;
    let cost_price = parse_quantity(
        row_num,
        schema::COST_PRICE,
        cell(cells, index, schema::COST_PRICE),
        policy,
    )?;

    let sell_price = parse_optional(
        row_num,
        schema::SELL_PRICE,
        cell(cells, index, schema::SELL_PRICE),
        index,
    )?;
    let margin = parse_optional(row_num, schema::MARGIN, cell(cells, index, schema::MARGIN), index)?;

    Ok(InventoryRow {
        item_code,
        item_name,
        stock,
        qty_sold,
        cost_price,
        sell_price,
        margin,
    })
}

/// Parses a required numeric cell, applying the configured policy to
/// negative values. Unparsable text always fails: clamping a typo would
/// hide it. "NaN" parses as a float, so finiteness is checked explicitly.
fn parse_quantity(
    row: usize,
    column: &str,
    raw: &str,
    policy: ValuePolicy,
) -> Result<f64, ReportError> {
    let value = parse_finite(row, column, raw)?;
    if value < 0.0 {
        return match policy {
            ValuePolicy::Reject => Err(invalid(row, column, raw)),
            ValuePolicy::ClampToZero => Ok(0.0),
        };
    }
    Ok(value)
}

/// Parses an optional numeric cell. An absent column or empty cell is
/// None. Negative values pass through: a below-cost sale is a legitimate
/// negative margin.
fn parse_optional(
    row: usize,
    column: &str,
    raw: &str,
    index: &HashMap<String, usize>,
) -> Result<Option<f64>, ReportError> {
    if !index.contains_key(column) || raw.is_empty() {
        return Ok(None);
    }
    parse_finite(row, column, raw).map(Some)
}

fn parse_finite(row: usize, column: &str, raw: &str) -> Result<f64, ReportError> {
    let value: f64 = raw.parse().map_err(|_| invalid(row, column, raw))?;
    if !value.is_finite() {
        return Err(invalid(row, column, raw));
    }
    Ok(value)
}

fn invalid(row: usize, column: &str, raw: &str) -> ReportError {
    ReportError::InvalidValue {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    }
}
