// CSV-backed dataset loading.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ReportError;
use crate::loader::traits::DatasetLoader;
use crate::model::RawTable;

/// Reads a delimited file into a `RawTable`. Cells are trimmed on read;
/// headers are kept verbatim so the analyzer owns their normalization.
pub struct CsvLoader;

impl CsvLoader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a raw table from any reader.
    pub fn read_table<R: Read>(&self, reader: R) -> Result<RawTable, ReportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Fields)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        Ok(RawTable { headers, rows })
    }
}

impl DatasetLoader for CsvLoader {
    fn load(&self, path: &Path) -> Result<RawTable, ReportError> {
        let file = File::open(path)?;
        self.read_table(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Item Code,Item Name,Stock,Qty Sold,Cost Price
A-001, Copper Fittings ,10,0,5
A-002,Drain Valve,2,3,5
";

    #[test]
    fn reads_headers_and_rows() {
        let table = CsvLoader::new().read_table(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(
            table.headers,
            vec!["Item Code", "Item Name", "Stock", "Qty Sold", "Cost Price"]
        );
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1][1], "Drain Valve");
    }

    #[test]
    fn cells_are_trimmed() {
        let table = CsvLoader::new().read_table(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(table.rows[0][1], "Copper Fittings");
    }

    #[test]
    fn headers_are_kept_verbatim() {
        let csv_data = " Item Name ,Stock,Qty Sold,Cost Price\nValve,1,2,3\n";
        let table = CsvLoader::new().read_table(csv_data.as_bytes()).unwrap();
        assert_eq!(table.headers[0], " Item Name ");
    }

    #[test]
    fn uneven_row_is_a_csv_error() {
        let csv_data = "Item Name,Stock\nValve\n";
        let result = CsvLoader::new().read_table(csv_data.as_bytes());
        assert!(matches!(result, Err(ReportError::Csv(_))));
    }
}
