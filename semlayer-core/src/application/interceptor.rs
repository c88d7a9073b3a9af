// semlayer-core/src/application/interceptor.rs

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::dataset::{DatasetMetadata, LoadOutput};
use crate::domain::error::DomainError;
use crate::domain::semantic::SemanticLayerConfig;
use crate::error::SemanticLayerError;
use crate::ports::builder::SemanticModelBuilder;
use crate::ports::dataset::{Dataset, LoadedData};
use crate::ports::logger::LoadLogger;

/// Wraps a dataset so that each load returns a semantic model built from
/// the freshly loaded table.
///
/// The wrapper reports the inner dataset's type name and metadata, declares
/// [`LoadOutput::SemanticModel`] as its output and marks itself as
/// intercepted. Nothing is cached: every `load` goes back to the inner dataset.
pub struct SemanticLoadInterceptor {
    inner: Arc<dyn Dataset>,
    dataset_name: String,
    config: SemanticLayerConfig,
    builder: Arc<dyn SemanticModelBuilder>,
    logger: Arc<dyn LoadLogger>,
}

pub fn wrap_load(
    inner: Arc<dyn Dataset>,
    dataset_name: impl Into<String>,
    config: SemanticLayerConfig,
    builder: Arc<dyn SemanticModelBuilder>,
    logger: Arc<dyn LoadLogger>,
) -> Arc<dyn Dataset> {
    Arc::new(SemanticLoadInterceptor {
        inner,
        dataset_name: dataset_name.into(),
        config,
        builder,
        logger,
    })
}

#[async_trait]
impl Dataset for SemanticLoadInterceptor {
    async fn load(&self) -> Result<LoadedData, SemanticLayerError> {
        let table = match self.inner.load().await? {
            LoadedData::Table(df) => df,
            LoadedData::Semantic(_) => {
                return Err(DomainError::NotATable(self.dataset_name.clone()).into());
            }
        };

        self.logger
            .building_model(&self.dataset_name, self.inner.type_name());

        let model = self.builder.build(table, &self.dataset_name, &self.config)?;
        Ok(LoadedData::Semantic(Box::new(model)))
    }

    fn metadata(&self) -> Option<&DatasetMetadata> {
        self.inner.metadata()
    }

    fn type_name(&self) -> &str {
        self.inner.type_name()
    }

    fn output(&self) -> LoadOutput {
        LoadOutput::SemanticModel
    }

    fn is_load_intercepted(&self) -> bool {
        true
    }
}
