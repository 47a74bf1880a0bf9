// Loader module: file formats in, RawTable out.

pub mod csv_file;
pub mod traits;

pub use csv_file::CsvLoader;
pub use traits::DatasetLoader;
