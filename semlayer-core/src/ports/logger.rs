// semlayer-core/src/ports/logger.rs

/// Sink for the informational events emitted around semantic loads.
pub trait LoadLogger: Send + Sync {
    fn building_model(&self, dataset_name: &str, dataset_type: &str);
}
