// semlayer-core/src/application/hooks.rs

use std::sync::Arc;
use tracing::debug;

use crate::application::catalog::DataCatalog;
use crate::error::SemanticLayerError;

/// Catalog lifecycle callbacks. Plugins implement the events they need.
pub trait CatalogHooks: Send + Sync {
    /// Called once, right after every configured dataset has been registered.
    fn after_catalog_created(&self, catalog: &mut DataCatalog) -> Result<(), SemanticLayerError>;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Ordered set of registered hooks.
#[derive(Clone, Default)]
pub struct HookManager {
    hooks: Vec<Arc<dyn CatalogHooks>>,
}

impl HookManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Arc<dyn CatalogHooks>) -> &mut Self {
        self.hooks.push(hook);
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Runs every hook in registration order; the first error aborts.
    pub fn after_catalog_created(&self, catalog: &mut DataCatalog) -> Result<(), SemanticLayerError> {
        for hook in &self.hooks {
            debug!(hook = hook.name(), "after_catalog_created");
            hook.after_catalog_created(catalog)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::sync::Mutex;

    struct Recorder {
        label: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
        fail: bool,
    }

    impl CatalogHooks for Recorder {
        fn after_catalog_created(&self, _catalog: &mut DataCatalog) -> Result<(), SemanticLayerError> {
            self.log.lock().unwrap().push(self.label);
            if self.fail {
                return Err(SemanticLayerError::InternalError(self.label.into()));
            }
            Ok(())
        }
    }

    #[test]
    fn test_hooks_run_in_order_and_stop_on_error() -> Result<()> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut hooks = HookManager::new();
        for (label, fail) in [("first", false), ("second", true), ("third", false)] {
            hooks.register(Arc::new(Recorder {
                label,
                log: log.clone(),
                fail,
            }));
        }
        assert_eq!(hooks.len(), 3);

        let mut catalog = DataCatalog::new();
        assert!(hooks.after_catalog_created(&mut catalog).is_err());
        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
        Ok(())
    }
}
