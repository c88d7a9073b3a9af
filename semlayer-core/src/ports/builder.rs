// semlayer-core/src/ports/builder.rs

use datafusion::prelude::DataFrame;

use crate::domain::semantic::{SemanticLayerConfig, SemanticTable};
use crate::error::SemanticLayerError;

/// Turns a freshly loaded table into a semantic model.
pub trait SemanticModelBuilder: Send + Sync {
    fn build(
        &self,
        table: DataFrame,
        dataset_name: &str,
        config: &SemanticLayerConfig,
    ) -> Result<SemanticTable, SemanticLayerError>;
}
