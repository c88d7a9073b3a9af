// semlayer-core/src/domain/semantic/expression.rs

use std::fmt;
use std::sync::LazyLock;

use datafusion::functions_aggregate::expr_fn::{avg, count, count_distinct, max, median, min, sum};
use datafusion::prelude::{Expr, ident, lit};
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::domain::error::DomainError;

// `column` or `column.agg()`, once the optional `_.` prefix is stripped.
static COLUMN_EXPR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)(?:\.([a-z_]+)\(\s*\))?$")
        .unwrap_or_else(|_| Regex::new("$^").unwrap_or_else(|_| unreachable!()))
});

const DEFERRED_PREFIX: &str = "_.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Sum,
    Mean,
    Min,
    Max,
    Count,
    Nunique,
    Median,
}

impl Aggregation {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "sum" => Some(Self::Sum),
            "mean" | "avg" => Some(Self::Mean),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "count" => Some(Self::Count),
            "nunique" => Some(Self::Nunique),
            "median" => Some(Self::Median),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Mean => "mean",
            Self::Min => "min",
            Self::Max => "max",
            Self::Count => "count",
            Self::Nunique => "nunique",
            Self::Median => "median",
        }
    }

    pub fn apply(self, expr: Expr) -> Expr {
        match self {
            Self::Sum => sum(expr),
            Self::Mean => avg(expr),
            Self::Min => min(expr),
            Self::Max => max(expr),
            Self::Count => count(expr),
            Self::Nunique => count_distinct(expr),
            Self::Median => median(expr),
        }
    }
}

/// A parsed column expression as written in a dimension or measure definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnExpr {
    Column(String),
    Aggregate {
        column: String,
        aggregation: Aggregation,
    },
    CountRows,
}

impl ColumnExpr {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let body = trimmed.strip_prefix(DEFERRED_PREFIX).unwrap_or(trimmed);

        if body.replace(char::is_whitespace, "") == "count()" {
            return Ok(Self::CountRows);
        }

        let caps = COLUMN_EXPR
            .captures(body)
            .ok_or_else(|| DomainError::InvalidExpression(raw.to_string()))?;

        let column = caps[1].to_string();
        match caps.get(2) {
            None => Ok(Self::Column(column)),
            Some(agg) => {
                let aggregation = Aggregation::parse(agg.as_str())
                    .ok_or_else(|| DomainError::InvalidExpression(raw.to_string()))?;
                Ok(Self::Aggregate {
                    column,
                    aggregation,
                })
            }
        }
    }

    pub fn is_aggregate(&self) -> bool {
        !matches!(self, Self::Column(_))
    }

    pub fn to_expr(&self) -> Expr {
        match self {
            Self::Column(c) => ident(c),
            Self::Aggregate {
                column,
                aggregation,
            } => aggregation.apply(ident(column)),
            Self::CountRows => count(lit(1i64)),
        }
    }
}

impl fmt::Display for ColumnExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(c) => write!(f, "_.{}", c),
            Self::Aggregate {
                column,
                aggregation,
            } => write!(f, "_.{}.{}()", column, aggregation.as_str()),
            Self::CountRows => write!(f, "_.count()"),
        }
    }
}

impl Serialize for ColumnExpr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_plain_and_deferred_columns() -> Result<()> {
        assert_eq!(
            ColumnExpr::parse("region")?,
            ColumnExpr::Column("region".into())
        );
        assert_eq!(
            ColumnExpr::parse("  _.region ")?,
            ColumnExpr::Column("region".into())
        );
        Ok(())
    }

    #[test]
    fn test_aggregations() -> Result<()> {
        assert_eq!(
            ColumnExpr::parse("amount.sum()")?,
            ColumnExpr::Aggregate {
                column: "amount".into(),
                aggregation: Aggregation::Sum
            }
        );
        assert_eq!(
            ColumnExpr::parse("_.price.avg()")?,
            ColumnExpr::Aggregate {
                column: "price".into(),
                aggregation: Aggregation::Mean
            }
        );
        assert_eq!(ColumnExpr::parse("_.count()")?, ColumnExpr::CountRows);
        assert_eq!(ColumnExpr::parse("count( )")?, ColumnExpr::CountRows);
        Ok(())
    }

    #[test]
    fn test_column_named_count_is_a_column() -> Result<()> {
        assert_eq!(
            ColumnExpr::parse("count")?,
            ColumnExpr::Column("count".into())
        );
        Ok(())
    }

    #[test]
    fn test_rejects_malformed_expressions() {
        for raw in ["", "amount.", "amount.variance()", "a + b", "_.", "1col"] {
            let err = ColumnExpr::parse(raw).unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidExpression(_)),
                "'{}' should not parse",
                raw
            );
        }
    }

    #[test]
    fn test_display_is_canonical() -> Result<()> {
        assert_eq!(ColumnExpr::parse("amount.mean()")?.to_string(), "_.amount.mean()");
        assert_eq!(ColumnExpr::parse("region")?.to_string(), "_.region");
        assert_eq!(ColumnExpr::CountRows.to_string(), "_.count()");
        Ok(())
    }
}
