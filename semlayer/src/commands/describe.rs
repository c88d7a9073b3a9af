// semlayer/src/commands/describe.rs
//
// USE CASE: Load one dataset and describe what it exposes.

use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use semlayer_core::domain::semantic::SemanticTable;
use semlayer_core::ports::LoadedData;

use crate::cli::{OutputFormat, ProjectArgs};
use crate::commands::open_catalog;

pub async fn execute(
    project: ProjectArgs,
    dataset: String,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let catalog = open_catalog(&project)?;
    let loaded = catalog.load(&dataset).await?;
    let output = loaded.output();

    match (loaded, format) {
        (LoadedData::Semantic(model), OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(&model.summary())?);
        }
        (LoadedData::Semantic(model), OutputFormat::Text) => print_model(&model),
        (LoadedData::Table(df), OutputFormat::Json) => {
            let columns: Vec<&String> = df.schema().fields().iter().map(|f| f.name()).collect();
            let summary = serde_json::json!({
                "name": dataset,
                "output": output.as_str(),
                "columns": columns,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        (LoadedData::Table(df), OutputFormat::Text) => {
            let columns: Vec<&str> = df
                .schema()
                .fields()
                .iter()
                .map(|f| f.name().as_str())
                .collect();
            println!("\n🔍 Dataset: '{}' ({})", dataset, output);
            println!("   Columns: [{}]", columns.join(", "));
            println!("   (no semantic layer configured)");
        }
    }

    Ok(())
}

fn print_model(model: &SemanticTable) {
    let summary = model.summary();
    println!("\n📐 Semantic model: '{}'", summary.name);
    println!("   Columns: [{}]", summary.columns.join(", "));

    let mut dims = Table::new();
    dims.load_preset(UTF8_FULL);
    dims.set_header(vec!["Dimension", "Column", "Description"]);
    for d in model.dimensions() {
        dims.add_row(vec![
            d.name.clone(),
            d.column.clone(),
            d.description.clone().unwrap_or_default(),
        ]);
    }
    println!("{dims}");

    let mut measures = Table::new();
    measures.load_preset(UTF8_FULL);
    measures.set_header(vec!["Measure", "Expression", "Description"]);
    for m in model.measures() {
        measures.add_row(vec![
            m.name.clone(),
            m.expr.to_string(),
            m.description.clone().unwrap_or_default(),
        ]);
    }
    println!("{measures}");
}
