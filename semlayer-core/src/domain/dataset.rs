// semlayer-core/src/domain/dataset.rs

use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Free-form metadata attached to a catalog entry (plugin configuration lives here).
pub type DatasetMetadata = BTreeMap<String, Value>;

/// What a dataset's `load` declares it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadOutput {
    #[default]
    Table,
    SemanticModel,
}

impl LoadOutput {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::SemanticModel => "SemanticModel",
        }
    }
}

impl fmt::Display for LoadOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
