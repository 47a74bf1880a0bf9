/// Column-name constants for the inventory schema.
/// Single source of truth for every by-name column access.

pub const ITEM_CODE: &str = "Item Code";
pub const ITEM_NAME: &str = "Item Name";
pub const STOCK: &str = "Stock";
pub const QTY_SOLD: &str = "Qty Sold";
pub const COST_PRICE: &str = "Cost Price";
// Spelled the way the source spreadsheets spell it.
pub const SELL_PRICE: &str = "Sel Price";
pub const MARGIN: &str = "Margin";

/// Columns the pipeline cannot run without.
pub const REQUIRED: [&str; 4] = [ITEM_NAME, STOCK, QTY_SOLD, COST_PRICE];
