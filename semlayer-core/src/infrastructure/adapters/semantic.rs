// semlayer-core/src/infrastructure/adapters/semantic.rs

use datafusion::prelude::DataFrame;

use crate::domain::semantic::{
    SemanticLayerConfig, SemanticTable, parse_dimensions, parse_measures,
};
use crate::error::SemanticLayerError;
use crate::ports::builder::SemanticModelBuilder;

/// Builds [`SemanticTable`]s over DataFusion frames.
///
/// Dimensions are attached before measures so a measure can aggregate a
/// dimension by name.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataFusionModelBuilder;

impl SemanticModelBuilder for DataFusionModelBuilder {
    fn build(
        &self,
        table: DataFrame,
        dataset_name: &str,
        config: &SemanticLayerConfig,
    ) -> Result<SemanticTable, SemanticLayerError> {
        let mut model = SemanticTable::new(table, dataset_name);

        if let Some(dimensions) = config.dimensions() {
            model = model.with_dimensions(parse_dimensions(dimensions)?);
        }

        if let Some(measures) = config.measures() {
            model = model.with_measures(parse_measures(measures)?);
        }

        Ok(model)
    }
}
