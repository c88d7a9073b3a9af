// semlayer-core/src/infrastructure/error.rs

use datafusion::error::DataFusionError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("DataFusion Engine Error: {0}")]
    #[diagnostic(
        code(semlayer::infra::database::datafusion),
        help("An error occurred while reading or planning a table.")
    )]
    DataFusion(#[from] DataFusionError),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATABASE (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(semlayer::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(semlayer::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Catalog configuration not found: {0}")]
    #[diagnostic(code(semlayer::infra::config_missing))]
    ConfigNotFound(String),
}

// Shortcut so `?` works directly on DataFusion calls
impl From<DataFusionError> for InfrastructureError {
    fn from(err: DataFusionError) -> Self {
        InfrastructureError::Database(DatabaseError::DataFusion(err))
    }
}
