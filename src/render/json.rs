use std::io::Write;

use crate::error::ReportError;
use crate::model::InventoryReport;

/// Writes the report as pretty-printed JSON for downstream consumers.
pub fn write_json_report<W: Write>(
    w: &mut W,
    report: &InventoryReport,
) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut *w, report)?;
    writeln!(w)?;
    Ok(())
}
