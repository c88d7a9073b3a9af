// semlayer-core/src/infrastructure/adapters/datasets.rs

use async_trait::async_trait;
use datafusion::arrow::datatypes::SchemaRef;
use datafusion::arrow::record_batch::RecordBatch;
use datafusion::datasource::MemTable;
use datafusion::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::dataset::DatasetMetadata;
use crate::error::SemanticLayerError;
use crate::infrastructure::config::catalog::{DatasetConfig, DatasetKind, LoadArgs};
use crate::infrastructure::error::InfrastructureError;
use crate::ports::dataset::{Dataset, LoadedData};

// --- CSV ---

pub struct CsvDataset {
    ctx: Arc<SessionContext>,
    path: PathBuf,
    load_args: LoadArgs,
    metadata: Option<DatasetMetadata>,
}

impl CsvDataset {
    pub fn new(ctx: Arc<SessionContext>, path: impl Into<PathBuf>) -> Self {
        Self {
            ctx,
            path: path.into(),
            load_args: LoadArgs::default(),
            metadata: None,
        }
    }

    pub fn with_load_args(mut self, load_args: LoadArgs) -> Self {
        self.load_args = load_args;
        self
    }

    pub fn with_metadata(mut self, metadata: DatasetMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[async_trait]
impl Dataset for CsvDataset {
    async fn load(&self) -> Result<LoadedData, SemanticLayerError> {
        let path = path_str(&self.path)?;

        let mut options = CsvReadOptions::new();
        if let Some(delimiter) = self.load_args.delimiter {
            if !delimiter.is_ascii() {
                return Err(InfrastructureError::ConfigError(format!(
                    "CSV delimiter {:?} is not an ASCII character",
                    delimiter
                ))
                .into());
            }
            options = options.delimiter(delimiter as u8);
        }
        if let Some(has_header) = self.load_args.has_header {
            options = options.has_header(has_header);
        }

        let df = self.ctx.read_csv(path, options).await?;
        Ok(LoadedData::Table(df))
    }

    fn metadata(&self) -> Option<&DatasetMetadata> {
        self.metadata.as_ref()
    }

    fn type_name(&self) -> &str {
        "CsvDataset"
    }
}

// --- PARQUET ---

pub struct ParquetDataset {
    ctx: Arc<SessionContext>,
    path: PathBuf,
    metadata: Option<DatasetMetadata>,
}

impl ParquetDataset {
    pub fn new(ctx: Arc<SessionContext>, path: impl Into<PathBuf>) -> Self {
        Self {
            ctx,
            path: path.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: DatasetMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[async_trait]
impl Dataset for ParquetDataset {
    async fn load(&self) -> Result<LoadedData, SemanticLayerError> {
        let path = path_str(&self.path)?;
        let df = self
            .ctx
            .read_parquet(path, ParquetReadOptions::default())
            .await?;
        Ok(LoadedData::Table(df))
    }

    fn metadata(&self) -> Option<&DatasetMetadata> {
        self.metadata.as_ref()
    }

    fn type_name(&self) -> &str {
        "ParquetDataset"
    }
}

// --- IN-MEMORY ---

/// Record batches held in memory. Every load reads them through a fresh frame.
pub struct MemoryDataset {
    ctx: Arc<SessionContext>,
    table: Arc<MemTable>,
    metadata: Option<DatasetMetadata>,
}

impl MemoryDataset {
    pub fn try_new(
        ctx: Arc<SessionContext>,
        schema: SchemaRef,
        batches: Vec<RecordBatch>,
    ) -> Result<Self, SemanticLayerError> {
        let table = MemTable::try_new(schema, vec![batches])?;
        Ok(Self {
            ctx,
            table: Arc::new(table),
            metadata: None,
        })
    }

    pub fn from_batch(ctx: Arc<SessionContext>, batch: RecordBatch) -> Result<Self, SemanticLayerError> {
        Self::try_new(ctx, batch.schema(), vec![batch])
    }

    pub fn with_metadata(mut self, metadata: DatasetMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[async_trait]
impl Dataset for MemoryDataset {
    async fn load(&self) -> Result<LoadedData, SemanticLayerError> {
        let df = self.ctx.read_table(self.table.clone())?;
        Ok(LoadedData::Table(df))
    }

    fn metadata(&self) -> Option<&DatasetMetadata> {
        self.metadata.as_ref()
    }

    fn type_name(&self) -> &str {
        "MemoryDataset"
    }
}

// --- FACTORY ---

/// Instantiates the dataset described by a catalog entry.
pub fn build_dataset(
    config: &DatasetConfig,
    project_dir: &Path,
    ctx: Arc<SessionContext>,
) -> Arc<dyn Dataset> {
    let path = config.resolve_path(project_dir);
    match config.kind {
        DatasetKind::Csv => {
            let mut dataset = CsvDataset::new(ctx, path).with_load_args(config.load_args.clone());
            if let Some(metadata) = &config.metadata {
                dataset = dataset.with_metadata(metadata.clone());
            }
            Arc::new(dataset)
        }
        DatasetKind::Parquet => {
            let mut dataset = ParquetDataset::new(ctx, path);
            if let Some(metadata) = &config.metadata {
                dataset = dataset.with_metadata(metadata.clone());
            }
            Arc::new(dataset)
        }
    }
}

fn path_str(path: &Path) -> Result<&str, SemanticLayerError> {
    path.to_str().ok_or_else(|| {
        SemanticLayerError::InternalError(format!("Invalid UTF-8 in dataset path {:?}", path))
    })
}
