// semlayer-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use datafusion::error::DataFusionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SemanticLayerError {
    // --- DOMAIN ERRORS (definitions, semantic queries) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, parsing, engine) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- CATALOG ERRORS ---
    #[error("Dataset '{0}' not found in the catalog")]
    DatasetNotFound(String),

    #[error("Dataset '{0}' has already been registered")]
    DatasetAlreadyExists(String),

    #[error("Internal Error: {0}")]
    InternalError(String),
}

// Manual implementations to avoid duplicate enum variants but keep ergonomics
impl From<std::io::Error> for SemanticLayerError {
    fn from(err: std::io::Error) -> Self {
        SemanticLayerError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<DataFusionError> for SemanticLayerError {
    fn from(err: DataFusionError) -> Self {
        SemanticLayerError::Infrastructure(InfrastructureError::Database(
            DatabaseError::DataFusion(err),
        ))
    }
}
