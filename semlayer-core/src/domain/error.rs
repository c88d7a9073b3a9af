// semlayer-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Invalid {kind} definition '{name}': {reason}")]
    #[diagnostic(
        code(semlayer::domain::definition),
        help("Dimensions are column references (`region`), measures are aggregations (`amount.sum()`).")
    )]
    InvalidDefinition {
        kind: &'static str,
        name: String,
        reason: String,
    },

    #[error("Invalid expression: '{0}'")]
    #[diagnostic(
        code(semlayer::domain::expression),
        help("Expected `column`, `_.column`, `column.<agg>()` or `count()`.")
    )]
    InvalidExpression(String),

    #[error("Invalid semantic layer configuration for '{dataset}': {reason}")]
    #[diagnostic(code(semlayer::domain::config))]
    InvalidConfig { dataset: String, reason: String },

    #[error("Dimension '{dimension}' is not defined on model '{model}'")]
    #[diagnostic(code(semlayer::domain::unknown_dimension))]
    UnknownDimension { model: String, dimension: String },

    #[error("Measure '{measure}' is not defined on model '{model}'")]
    #[diagnostic(code(semlayer::domain::unknown_measure))]
    UnknownMeasure { model: String, measure: String },

    #[error("A query on model '{0}' needs at least one dimension or measure")]
    #[diagnostic(code(semlayer::domain::empty_query))]
    EmptyQuery(String),

    #[error("Dataset '{0}' did not load a raw table")]
    #[diagnostic(
        code(semlayer::domain::not_a_table),
        help("Semantic models can only be built on top of tabular data.")
    )]
    NotATable(String),
}
