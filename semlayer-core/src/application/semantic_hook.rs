// semlayer-core/src/application/semantic_hook.rs

use std::sync::Arc;
use tracing::debug;

use crate::application::catalog::DataCatalog;
use crate::application::hooks::CatalogHooks;
use crate::application::interceptor::wrap_load;
use crate::domain::semantic::SemanticLayerConfig;
use crate::error::SemanticLayerError;
use crate::infrastructure::adapters::semantic::DataFusionModelBuilder;
use crate::infrastructure::logging::TracingLoadLogger;
use crate::ports::builder::SemanticModelBuilder;
use crate::ports::dataset::Dataset;
use crate::ports::logger::LoadLogger;

/// Turns every dataset tagged with `kedro-semantic-layer` metadata into a
/// semantic-model dataset once the catalog is built.
pub struct SemanticLayerHook {
    builder: Arc<dyn SemanticModelBuilder>,
    logger: Arc<dyn LoadLogger>,
}

impl SemanticLayerHook {
    pub fn new(builder: Arc<dyn SemanticModelBuilder>, logger: Arc<dyn LoadLogger>) -> Self {
        Self { builder, logger }
    }
}

impl Default for SemanticLayerHook {
    fn default() -> Self {
        Self::new(Arc::new(DataFusionModelBuilder), Arc::new(TracingLoadLogger))
    }
}

impl CatalogHooks for SemanticLayerHook {
    fn after_catalog_created(&self, catalog: &mut DataCatalog) -> Result<(), SemanticLayerError> {
        let mut replacements: Vec<(String, Arc<dyn Dataset>)> = Vec::new();

        for (name, dataset) in catalog.iter() {
            let Some(metadata) = dataset.metadata() else {
                continue;
            };

            if dataset.is_load_intercepted() {
                debug!(dataset = name, "Load already intercepted, skipping");
                continue;
            }

            let Some(config) = SemanticLayerConfig::from_metadata(name, metadata)? else {
                continue;
            };

            let wrapped = wrap_load(
                dataset.clone(),
                name,
                config,
                self.builder.clone(),
                self.logger.clone(),
            );
            replacements.push((name.to_string(), wrapped));
        }

        for (name, dataset) in replacements {
            debug!(dataset = %name, "Semantic load installed");
            catalog.replace(name, dataset);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "semantic-layer"
    }
}
