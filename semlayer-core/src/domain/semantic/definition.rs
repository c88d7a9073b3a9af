// semlayer-core/src/domain/semantic/definition.rs

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::domain::error::DomainError;
use crate::domain::semantic::expression::ColumnExpr;

/// Raw dimension or measure definitions, as found in dataset metadata.
///
/// Either a YAML document embedded in a string (`"region: region"`) or an
/// inline mapping. Each entry maps a name to an expression, or to a mapping
/// with `expr` and an optional `description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Definitions {
    Text(String),
    Inline(Mapping),
}

impl Definitions {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Inline(m) => m.is_empty(),
        }
    }

    fn entries(&self, kind: &'static str) -> Result<Vec<RawEntry>, DomainError> {
        let parsed;
        let mapping = match self {
            Self::Inline(m) => m,
            Self::Text(s) => {
                parsed = serde_yaml::from_str::<Value>(s).map_err(|e| {
                    DomainError::InvalidDefinition {
                        kind,
                        name: "<document>".into(),
                        reason: e.to_string(),
                    }
                })?;
                match &parsed {
                    Value::Mapping(m) => m,
                    Value::Null => return Ok(Vec::new()),
                    other => {
                        return Err(DomainError::InvalidDefinition {
                            kind,
                            name: "<document>".into(),
                            reason: format!("expected a mapping, found {}", value_kind(other)),
                        });
                    }
                }
            }
        };

        mapping
            .iter()
            .map(|(key, value)| RawEntry::from_yaml(kind, key, value))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimension {
    pub name: String,
    pub column: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measure {
    pub name: String,
    pub expr: ColumnExpr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub fn parse_dimensions(definitions: &Definitions) -> Result<Vec<Dimension>, DomainError> {
    definitions
        .entries("dimension")?
        .into_iter()
        .map(|entry| match ColumnExpr::parse(&entry.expr)? {
            ColumnExpr::Column(column) => Ok(Dimension {
                name: entry.name,
                column,
                description: entry.description,
            }),
            _ => Err(DomainError::InvalidDefinition {
                kind: "dimension",
                name: entry.name,
                reason: format!("'{}' aggregates; dimensions must be columns", entry.expr),
            }),
        })
        .collect()
}

pub fn parse_measures(definitions: &Definitions) -> Result<Vec<Measure>, DomainError> {
    definitions
        .entries("measure")?
        .into_iter()
        .map(|entry| {
            let expr = ColumnExpr::parse(&entry.expr)?;
            if !expr.is_aggregate() {
                return Err(DomainError::InvalidDefinition {
                    kind: "measure",
                    name: entry.name,
                    reason: format!("'{}' is not an aggregation", entry.expr),
                });
            }
            Ok(Measure {
                name: entry.name,
                expr,
                description: entry.description,
            })
        })
        .collect()
}

// --- ENTRY DECODING ---

struct RawEntry {
    name: String,
    expr: String,
    description: Option<String>,
}

#[derive(Deserialize)]
struct DetailedEntry {
    expr: String,
    #[serde(default)]
    description: Option<String>,
}

impl RawEntry {
    fn from_yaml(kind: &'static str, key: &Value, value: &Value) -> Result<Self, DomainError> {
        let name = key
            .as_str()
            .ok_or_else(|| DomainError::InvalidDefinition {
                kind,
                name: format!("{:?}", key),
                reason: "names must be strings".into(),
            })?
            .to_string();

        match value {
            Value::String(expr) => Ok(Self {
                name,
                expr: expr.clone(),
                description: None,
            }),
            Value::Mapping(_) => {
                let detailed: DetailedEntry =
                    serde_yaml::from_value(value.clone()).map_err(|e| {
                        DomainError::InvalidDefinition {
                            kind,
                            name: name.clone(),
                            reason: e.to_string(),
                        }
                    })?;
                Ok(Self {
                    name,
                    expr: detailed.expr,
                    description: detailed.description,
                })
            }
            other => Err(DomainError::InvalidDefinition {
                kind,
                name,
                reason: format!("expected an expression, found {}", value_kind(other)),
            }),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
