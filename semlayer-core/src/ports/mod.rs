// semlayer-core/src/ports/mod.rs

pub mod builder;
pub mod dataset;
pub mod logger;

pub use builder::SemanticModelBuilder;
pub use dataset::{Dataset, LoadedData};
pub use logger::LoadLogger;
