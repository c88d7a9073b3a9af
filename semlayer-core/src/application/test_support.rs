// Fakes shared by the application tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use async_trait::async_trait;
use datafusion::arrow::array::{Int64Array, StringArray};
use datafusion::arrow::datatypes::{DataType, Field, Schema};
use datafusion::arrow::record_batch::RecordBatch;
use datafusion::prelude::{DataFrame, SessionContext};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::dataset::DatasetMetadata;
use crate::domain::semantic::{SemanticLayerConfig, SemanticTable};
use crate::error::SemanticLayerError;
use crate::infrastructure::adapters::semantic::DataFusionModelBuilder;
use crate::ports::builder::SemanticModelBuilder;
use crate::ports::dataset::{Dataset, LoadedData};
use crate::ports::logger::LoadLogger;

pub(crate) fn metadata(yaml: &str) -> DatasetMetadata {
    serde_yaml::from_str(yaml).unwrap()
}

pub(crate) fn sales_batch() -> RecordBatch {
    let schema = Arc::new(Schema::new(vec![
        Field::new("region", DataType::Utf8, false),
        Field::new("amount", DataType::Int64, false),
    ]));
    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from(vec!["north", "south", "north"])),
            Arc::new(Int64Array::from(vec![10, 20, 5])),
        ],
    )
    .unwrap()
}

/// Dataset returning the sales batch and counting its loads.
pub(crate) struct CountingDataset {
    calls: AtomicUsize,
    metadata: Option<DatasetMetadata>,
    fail: bool,
}

impl CountingDataset {
    pub(crate) fn plain() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            metadata: None,
            fail: false,
        }
    }

    pub(crate) fn with_metadata(yaml: &str) -> Self {
        Self {
            metadata: Some(metadata(yaml)),
            ..Self::plain()
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::plain()
        }
    }

    pub(crate) fn failing_with_metadata(yaml: &str) -> Self {
        Self {
            fail: true,
            ..Self::with_metadata(yaml)
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Dataset for CountingDataset {
    async fn load(&self) -> Result<LoadedData, SemanticLayerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SemanticLayerError::InternalError("disk unavailable".into()));
        }
        let df = SessionContext::new().read_batch(sales_batch())?;
        Ok(LoadedData::Table(df))
    }

    fn metadata(&self) -> Option<&DatasetMetadata> {
        self.metadata.as_ref()
    }

    fn type_name(&self) -> &str {
        "CountingDataset"
    }
}

/// Builder delegating to the real one while counting invocations.
#[derive(Default)]
pub(crate) struct CountingBuilder {
    calls: AtomicUsize,
}

impl CountingBuilder {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SemanticModelBuilder for CountingBuilder {
    fn build(
        &self,
        table: DataFrame,
        dataset_name: &str,
        config: &SemanticLayerConfig,
    ) -> Result<SemanticTable, SemanticLayerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        DataFusionModelBuilder.build(table, dataset_name, config)
    }
}

#[derive(Default)]
pub(crate) struct RecordingLogger {
    events: Mutex<Vec<(String, String)>>,
}

impl RecordingLogger {
    pub(crate) fn events(&self) -> Vec<(String, String)> {
        self.events.lock().unwrap().clone()
    }
}

impl LoadLogger for RecordingLogger {
    fn building_model(&self, dataset_name: &str, dataset_type: &str) {
        self.events
            .lock()
            .unwrap()
            .push((dataset_name.to_string(), dataset_type.to_string()));
    }
}
