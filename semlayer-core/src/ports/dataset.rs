// semlayer-core/src/ports/dataset.rs

// What the catalog needs from a data source: something it can load, with
// optional metadata. Where the bytes come from is an adapter concern.

use async_trait::async_trait;
use datafusion::prelude::DataFrame;

use crate::domain::dataset::{DatasetMetadata, LoadOutput};
use crate::domain::semantic::SemanticTable;
use crate::error::SemanticLayerError;

/// Result of a dataset load.
#[derive(Debug)]
pub enum LoadedData {
    Table(DataFrame),
    Semantic(Box<SemanticTable>),
}

impl LoadedData {
    pub fn is_semantic(&self) -> bool {
        matches!(self, Self::Semantic(_))
    }

    pub fn output(&self) -> LoadOutput {
        match self {
            Self::Table(_) => LoadOutput::Table,
            Self::Semantic(_) => LoadOutput::SemanticModel,
        }
    }

    /// The raw table; for a semantic model, the table underneath it.
    pub fn into_table(self) -> DataFrame {
        match self {
            Self::Table(df) => df,
            Self::Semantic(model) => model.into_table(),
        }
    }

    pub fn into_semantic(self) -> Option<SemanticTable> {
        match self {
            Self::Semantic(model) => Some(*model),
            Self::Table(_) => None,
        }
    }
}

#[async_trait]
pub trait Dataset: Send + Sync {
    async fn load(&self) -> Result<LoadedData, SemanticLayerError>;

    fn metadata(&self) -> Option<&DatasetMetadata> {
        None
    }

    /// Runtime type name, used in logs and listings.
    fn type_name(&self) -> &str;

    fn output(&self) -> LoadOutput {
        LoadOutput::Table
    }

    /// Set by load interceptors so a second hook pass does not wrap again.
    fn is_load_intercepted(&self) -> bool {
        false
    }
}
