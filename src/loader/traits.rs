use std::path::Path;

use crate::error::ReportError;
use crate::model::RawTable;

pub trait DatasetLoader {
    fn load(&self, path: &Path) -> Result<RawTable, ReportError>;
}
