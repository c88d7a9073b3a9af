// semlayer-core/src/infrastructure/logging.rs

use tracing::info;

use crate::ports::logger::LoadLogger;

/// Default [`LoadLogger`]: structured `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLoadLogger;

impl LoadLogger for TracingLoadLogger {
    fn building_model(&self, dataset_name: &str, dataset_type: &str) {
        info!(
            dataset = dataset_name,
            dataset_type,
            "Building semantic model for {} ({})...",
            dataset_name,
            dataset_type
        );
    }
}
