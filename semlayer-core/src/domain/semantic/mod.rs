// semlayer-core/src/domain/semantic/mod.rs

pub mod config;
pub mod definition;
pub mod expression;
pub mod table;

pub use config::{SEMANTIC_LAYER_KEY, SemanticLayerConfig};
pub use definition::{Definitions, Dimension, Measure, parse_dimensions, parse_measures};
pub use expression::{Aggregation, ColumnExpr};
pub use table::{ModelSummary, SemanticTable};
