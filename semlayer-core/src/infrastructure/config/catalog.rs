// semlayer-core/src/infrastructure/config/catalog.rs

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::domain::dataset::DatasetMetadata;
use crate::infrastructure::error::InfrastructureError;

const CATALOG_FILES: [&str; 2] = ["catalog.yml", "catalog.yaml"];

// --- 1. DTOs ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatasetKind {
    #[serde(rename = "csv", alias = "CSVDataset", alias = "pandas.CSVDataset")]
    Csv,
    #[serde(
        rename = "parquet",
        alias = "ParquetDataset",
        alias = "pandas.ParquetDataset"
    )]
    Parquet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<char>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_header: Option<bool>,
}

/// One catalog entry. Keys the loader does not know (`save_args`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(rename = "type")]
    pub kind: DatasetKind,

    pub filepath: String,

    #[serde(default)]
    pub load_args: LoadArgs,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DatasetMetadata>,
}

impl DatasetConfig {
    /// Relative paths are anchored at the project directory.
    pub fn resolve_path(&self, project_dir: &Path) -> PathBuf {
        let raw = Path::new(&self.filepath);
        if raw.is_absolute() {
            raw.to_path_buf()
        } else {
            project_dir.join(raw)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogConfig {
    pub datasets: BTreeMap<String, DatasetConfig>,
}

/// Where to look for `catalog.yml`: `<conf_source>/<base_env>` first, then
/// `<conf_source>/<env>` on top of it.
#[derive(Debug, Clone)]
pub struct ConfigOptions {
    pub conf_source: PathBuf,
    pub base_env: String,
    pub env: Option<String>,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            conf_source: PathBuf::from("conf"),
            base_env: "base".to_string(),
            env: Some("local".to_string()),
        }
    }
}

// --- 2. LOADER ---

#[instrument(skip(project_dir, options))]
pub fn load_catalog_config(
    project_dir: &Path,
    options: &ConfigOptions,
) -> Result<CatalogConfig, InfrastructureError> {
    let conf_dir = project_dir.join(&options.conf_source);
    let base_dir = conf_dir.join(&options.base_env);

    let base_path = find_catalog_file(&base_dir).ok_or_else(|| {
        InfrastructureError::ConfigNotFound(format!(
            "no catalog in {:?}. Checked: {:?}",
            base_dir, CATALOG_FILES
        ))
    })?;
    info!(path = ?base_path, "Loading catalog configuration");
    let mut datasets = parse_catalog(&fs::read_to_string(&base_path)?)?;

    // Layering: the run environment replaces whole entries of the base one
    if let Some(env) = options.env.as_deref()
        && env != options.base_env
    {
        match find_catalog_file(&conf_dir.join(env)) {
            Some(env_path) => {
                let overlay = parse_catalog(&fs::read_to_string(&env_path)?)?;
                for (name, entry) in overlay {
                    if datasets.insert(name.clone(), entry).is_some() {
                        info!(dataset = %name, env, "Dataset overridden by environment");
                    }
                }
            }
            None => debug!(env, "No environment catalog, using base only"),
        }
    }

    Ok(CatalogConfig { datasets })
}

fn find_catalog_file(dir: &Path) -> Option<PathBuf> {
    CATALOG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Parses one catalog document. Anchors and `<<` merge keys are resolved,
/// top-level keys starting with `_` are templates and are skipped.
pub fn parse_catalog(content: &str) -> Result<BTreeMap<String, DatasetConfig>, InfrastructureError> {
    let mut root: Value = serde_yaml::from_str(content)?;
    root.apply_merge()?;

    let mapping = match root {
        Value::Mapping(m) => m,
        Value::Null => return Ok(BTreeMap::new()),
        _ => {
            return Err(InfrastructureError::ConfigError(
                "catalog root must be a mapping of dataset names".into(),
            ));
        }
    };

    let mut datasets = BTreeMap::new();
    for (key, value) in mapping {
        let name = key
            .as_str()
            .ok_or_else(|| {
                InfrastructureError::ConfigError(format!("dataset name {:?} is not a string", key))
            })?
            .to_string();

        if name.starts_with('_') {
            continue;
        }

        let entry: DatasetConfig = serde_yaml::from_value(value).map_err(|e| {
            InfrastructureError::ConfigError(format!("dataset '{}': {}", name, e))
        })?;
        datasets.insert(name, entry);
    }

    Ok(datasets)
}
