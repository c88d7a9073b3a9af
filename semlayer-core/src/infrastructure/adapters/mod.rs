pub mod datasets;
pub mod semantic;

pub use datasets::{CsvDataset, MemoryDataset, ParquetDataset, build_dataset};
pub use semantic::DataFusionModelBuilder;
