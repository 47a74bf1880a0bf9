// Render module: the presentation layer over a finished InventoryReport.

pub mod json;
pub mod text;
