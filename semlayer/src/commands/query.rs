// semlayer/src/commands/query.rs
//
// USE CASE: Aggregate a semantic dataset.

use anyhow::Context;

use crate::cli::ProjectArgs;
use crate::commands::open_catalog;

pub async fn execute(
    project: ProjectArgs,
    dataset: String,
    dimensions: Vec<String>,
    measures: Vec<String>,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let catalog = open_catalog(&project)?;

    let model = catalog
        .load(&dataset)
        .await?
        .into_semantic()
        .with_context(|| {
            format!(
                "Dataset '{}' has no semantic layer (add `kedro-semantic-layer` to its metadata)",
                dataset
            )
        })?;

    let dimensions: Vec<&str> = dimensions.iter().map(String::as_str).collect();
    let measures: Vec<&str> = measures.iter().map(String::as_str).collect();

    let mut df = model.query(&dimensions, &measures)?;
    if let Some(limit) = limit {
        df = df.limit(0, Some(limit))?;
    }

    df.show().await?;
    Ok(())
}
