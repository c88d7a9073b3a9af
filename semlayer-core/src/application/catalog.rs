// semlayer-core/src/application/catalog.rs

use datafusion::prelude::SessionContext;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::application::hooks::HookManager;
use crate::error::SemanticLayerError;
use crate::infrastructure::adapters::datasets::build_dataset;
use crate::infrastructure::config::catalog::CatalogConfig;
use crate::ports::dataset::{Dataset, LoadedData};

/// Registry of named datasets available to a run.
#[derive(Clone, Default)]
pub struct DataCatalog {
    datasets: BTreeMap<String, Arc<dyn Dataset>>,
}

impl DataCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        name: impl Into<String>,
        dataset: Arc<dyn Dataset>,
    ) -> Result<(), SemanticLayerError> {
        let name = name.into();
        if self.datasets.contains_key(&name) {
            return Err(SemanticLayerError::DatasetAlreadyExists(name));
        }
        self.datasets.insert(name, dataset);
        Ok(())
    }

    /// Registers `dataset` under `name`, returning the entry it displaced.
    pub fn replace(
        &mut self,
        name: impl Into<String>,
        dataset: Arc<dyn Dataset>,
    ) -> Option<Arc<dyn Dataset>> {
        self.datasets.insert(name.into(), dataset)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Dataset>> {
        self.datasets.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.datasets.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.datasets.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Dataset>)> {
        self.datasets.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Loads a dataset by name. Errors from the dataset are returned as is.
    #[instrument(skip(self))]
    pub async fn load(&self, name: &str) -> Result<LoadedData, SemanticLayerError> {
        let dataset = self
            .get(name)
            .ok_or_else(|| SemanticLayerError::DatasetNotFound(name.to_string()))?;

        info!("Loading data from {} ({})...", name, dataset.type_name());
        dataset.load().await
    }
}

impl fmt::Debug for DataCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataCatalog")
            .field("datasets", &self.names())
            .finish()
    }
}

/// Builds every configured dataset, then fires `after_catalog_created` once.
#[instrument(skip_all, fields(datasets = config.datasets.len()))]
pub fn create_catalog(
    config: &CatalogConfig,
    project_dir: &Path,
    ctx: Arc<SessionContext>,
    hooks: &HookManager,
) -> Result<DataCatalog, SemanticLayerError> {
    let mut catalog = DataCatalog::new();
    for (name, entry) in &config.datasets {
        catalog.add(name.clone(), build_dataset(entry, project_dir, ctx.clone()))?;
    }

    hooks.after_catalog_created(&mut catalog)?;
    info!(datasets = catalog.len(), "Catalog created");
    Ok(catalog)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::application::hooks::CatalogHooks;
    use crate::application::test_support::CountingDataset;
    use crate::infrastructure::config::catalog::parse_catalog;
    use anyhow::Result;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_add_rejects_duplicates() -> Result<()> {
        let mut catalog = DataCatalog::new();
        catalog.add("sales", Arc::new(CountingDataset::plain()))?;

        let err = catalog
            .add("sales", Arc::new(CountingDataset::plain()))
            .unwrap_err();
        assert!(matches!(err, SemanticLayerError::DatasetAlreadyExists(ref n) if n == "sales"));
        assert!(catalog.contains("sales"));
        assert!(!catalog.contains("customers"));

        assert!(
            catalog
                .replace("sales", Arc::new(CountingDataset::plain()))
                .is_some()
        );
        assert_eq!(catalog.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_by_name() -> Result<()> {
        let dataset = Arc::new(CountingDataset::plain());
        let mut catalog = DataCatalog::new();
        catalog.add("sales", dataset.clone())?;

        let loaded = catalog.load("sales").await?;
        assert!(!loaded.is_semantic());
        assert_eq!(dataset.calls(), 1);

        let err = catalog.load("missing").await.unwrap_err();
        assert!(matches!(err, SemanticLayerError::DatasetNotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn test_load_errors_pass_through() -> Result<()> {
        let mut catalog = DataCatalog::new();
        catalog.add("sales", Arc::new(CountingDataset::failing()))?;

        let err = catalog.load("sales").await.unwrap_err();
        assert!(matches!(err, SemanticLayerError::InternalError(_)));
        Ok(())
    }

    struct CountingHook(AtomicUsize);

    impl CatalogHooks for CountingHook {
        fn after_catalog_created(&self, catalog: &mut DataCatalog) -> Result<(), SemanticLayerError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            assert_eq!(catalog.names(), vec!["customers", "sales"]);
            Ok(())
        }
    }

    #[test]
    fn test_create_catalog_fires_hook_once() -> Result<()> {
        let config = CatalogConfig {
            datasets: parse_catalog(
                "sales:\n  type: csv\n  filepath: data/sales.csv\ncustomers:\n  type: parquet\n  filepath: data/customers.parquet\n",
            )?,
        };
        let hook = Arc::new(CountingHook(AtomicUsize::new(0)));
        let mut hooks = HookManager::new();
        hooks.register(hook.clone());

        let catalog = create_catalog(
            &config,
            Path::new("/project"),
            Arc::new(SessionContext::new()),
            &hooks,
        )?;

        assert_eq!(catalog.len(), 2);
        assert_eq!(hook.0.load(Ordering::SeqCst), 1);
        assert_eq!(catalog.get("sales").unwrap().type_name(), "CsvDataset");
        Ok(())
    }
}
