pub mod catalog;

pub use catalog::{
    CatalogConfig, ConfigOptions, DatasetConfig, DatasetKind, LoadArgs, load_catalog_config,
};
