// semlayer-core/src/domain/semantic/table.rs

use datafusion::prelude::{DataFrame, Expr, ident};
use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::semantic::definition::{Dimension, Measure};
use crate::domain::semantic::expression::ColumnExpr;
use crate::error::SemanticLayerError;

/// A table enriched with named dimensions and measures.
///
/// Definitions accumulate through [`with_dimensions`](Self::with_dimensions)
/// and [`with_measures`](Self::with_measures); redefining a name replaces the
/// previous definition in place, keeping the original order.
#[derive(Debug, Clone)]
pub struct SemanticTable {
    name: String,
    table: DataFrame,
    dimensions: Vec<Dimension>,
    measures: Vec<Measure>,
}

/// Serializable view of a model (no data).
#[derive(Debug, Serialize)]
pub struct ModelSummary<'a> {
    pub name: &'a str,
    pub columns: Vec<String>,
    pub dimensions: &'a [Dimension],
    pub measures: &'a [Measure],
}

impl SemanticTable {
    pub fn new(table: DataFrame, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table,
            dimensions: Vec::new(),
            measures: Vec::new(),
        }
    }

    pub fn with_dimensions(mut self, dimensions: impl IntoIterator<Item = Dimension>) -> Self {
        for dim in dimensions {
            match self.dimensions.iter_mut().find(|d| d.name == dim.name) {
                Some(existing) => *existing = dim,
                None => self.dimensions.push(dim),
            }
        }
        self
    }

    pub fn with_measures(mut self, measures: impl IntoIterator<Item = Measure>) -> Self {
        for measure in measures {
            match self.measures.iter_mut().find(|m| m.name == measure.name) {
                Some(existing) => *existing = measure,
                None => self.measures.push(measure),
            }
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_table(self) -> DataFrame {
        self.table
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }

    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    pub fn measure(&self, name: &str) -> Option<&Measure> {
        self.measures.iter().find(|m| m.name == name)
    }

    pub fn dimension_names(&self) -> Vec<&str> {
        self.dimensions.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn measure_names(&self) -> Vec<&str> {
        self.measures.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn summary(&self) -> ModelSummary<'_> {
        ModelSummary {
            name: &self.name,
            columns: self
                .table
                .schema()
                .fields()
                .iter()
                .map(|f| f.name().clone())
                .collect(),
            dimensions: &self.dimensions,
            measures: &self.measures,
        }
    }

    /// Groups by `dimensions` and computes `measures`, sorted by the dimensions.
    pub fn query(
        &self,
        dimensions: &[&str],
        measures: &[&str],
    ) -> Result<DataFrame, SemanticLayerError> {
        if dimensions.is_empty() && measures.is_empty() {
            return Err(DomainError::EmptyQuery(self.name.clone()).into());
        }

        let group_expr = dimensions
            .iter()
            .map(|name| {
                self.dimension(name)
                    .map(|d| ident(&d.column).alias(&d.name))
                    .ok_or_else(|| DomainError::UnknownDimension {
                        model: self.name.clone(),
                        dimension: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let aggr_expr = measures
            .iter()
            .map(|name| {
                self.measure(name)
                    .map(|m| self.measure_expr(m).alias(&m.name))
                    .ok_or_else(|| DomainError::UnknownMeasure {
                        model: self.name.clone(),
                        measure: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let df = self.table.clone().aggregate(group_expr, aggr_expr)?;
        if dimensions.is_empty() {
            return Ok(df);
        }

        let order = dimensions
            .iter()
            .map(|name| ident(*name).sort(true, false))
            .collect();
        Ok(df.sort(order)?)
    }

    // A measure over a dimension name aggregates the dimension's column.
    fn measure_expr(&self, measure: &Measure) -> Expr {
        match &measure.expr {
            ColumnExpr::Aggregate {
                column,
                aggregation,
            } => {
                let source = self
                    .dimension(column)
                    .map(|d| d.column.as_str())
                    .unwrap_or(column);
                aggregation.apply(ident(source))
            }
            other => other.to_expr(),
        }
    }
}
