// semlayer/src/commands/mod.rs

pub mod describe;
pub mod list;
pub mod query;

use std::sync::Arc;

use anyhow::Context;
use datafusion::prelude::SessionContext;
use semlayer_core::application::{DataCatalog, HookManager, SemanticLayerHook, create_catalog};
use semlayer_core::infrastructure::config::{ConfigOptions, load_catalog_config};

use crate::cli::ProjectArgs;

/// Loads the catalog configuration and builds the catalog with the
/// semantic layer hook registered.
pub fn open_catalog(project: &ProjectArgs) -> anyhow::Result<DataCatalog> {
    let options = ConfigOptions {
        conf_source: project.conf_source.clone(),
        env: Some(project.env.clone()),
        ..ConfigOptions::default()
    };

    let config = load_catalog_config(&project.project_dir, &options).with_context(|| {
        format!(
            "Failed to load catalog configuration from {:?}",
            project.project_dir
        )
    })?;

    let mut hooks = HookManager::new();
    hooks.register(Arc::new(SemanticLayerHook::default()));

    let ctx = Arc::new(SessionContext::new());
    let catalog = create_catalog(&config, &project.project_dir, ctx, &hooks)?;
    Ok(catalog)
}
