// semlayer-core/src/domain/semantic/config.rs

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::domain::dataset::DatasetMetadata;
use crate::domain::error::DomainError;
use crate::domain::semantic::definition::Definitions;

/// Metadata key marking a dataset for semantic-model conversion.
pub const SEMANTIC_LAYER_KEY: &str = "kedro-semantic-layer";

/// The block found under [`SEMANTIC_LAYER_KEY`] in a dataset's metadata.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticLayerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Definitions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measures: Option<Definitions>,
}

impl SemanticLayerConfig {
    /// Extracts the semantic layer block of `dataset`.
    /// `Ok(None)` when the metadata does not carry the key.
    pub fn from_metadata(
        dataset: &str,
        metadata: &DatasetMetadata,
    ) -> Result<Option<Self>, DomainError> {
        match metadata.get(SEMANTIC_LAYER_KEY) {
            None => Ok(None),
            // `kedro-semantic-layer:` with nothing below: a bare model
            Some(Value::Null) => Ok(Some(Self::default())),
            Some(value) => serde_yaml::from_value(value.clone())
                .map(Some)
                .map_err(|e| DomainError::InvalidConfig {
                    dataset: dataset.to_string(),
                    reason: e.to_string(),
                }),
        }
    }

    pub fn dimensions(&self) -> Option<&Definitions> {
        self.dimensions.as_ref().filter(|d| !d.is_empty())
    }

    pub fn measures(&self) -> Option<&Definitions> {
        self.measures.as_ref().filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn metadata(yaml: &str) -> DatasetMetadata {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_missing_key_is_not_an_error() -> Result<()> {
        let meta = metadata("owner: finance\n");
        assert_eq!(SemanticLayerConfig::from_metadata("sales", &meta)?, None);
        Ok(())
    }

    #[test]
    fn test_extracts_string_definitions() -> Result<()> {
        let meta = metadata(
            r#"
kedro-semantic-layer:
  dimensions: "region: region"
  measures: "total: amount.sum()"
  unrelated: ignored
"#,
        );
        let config = SemanticLayerConfig::from_metadata("sales", &meta)?.unwrap();
        assert_eq!(
            config.dimensions(),
            Some(&Definitions::Text("region: region".into()))
        );
        assert_eq!(
            config.measures(),
            Some(&Definitions::Text("total: amount.sum()".into()))
        );
        Ok(())
    }

    #[test]
    fn test_empty_entries_are_filtered() -> Result<()> {
        let meta = metadata("kedro-semantic-layer:\n  dimensions: ''\n");
        let config = SemanticLayerConfig::from_metadata("sales", &meta)?.unwrap();
        assert!(config.dimensions().is_none());
        assert!(config.measures().is_none());

        let bare = metadata("kedro-semantic-layer:\n");
        assert_eq!(
            SemanticLayerConfig::from_metadata("sales", &bare)?,
            Some(SemanticLayerConfig::default())
        );
        Ok(())
    }

    #[test]
    fn test_scalar_block_is_invalid() {
        let meta = metadata("kedro-semantic-layer: yes\n");
        let err = SemanticLayerConfig::from_metadata("sales", &meta).unwrap_err();
        assert!(matches!(err, DomainError::InvalidConfig { ref dataset, .. } if dataset == "sales"));
    }
}
