// semlayer/src/commands/list.rs
//
// USE CASE: List the datasets of the catalog.

use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;

use crate::cli::ProjectArgs;
use crate::commands::open_catalog;

pub fn execute(project: ProjectArgs) -> anyhow::Result<()> {
    let catalog = open_catalog(&project)?;

    if catalog.is_empty() {
        println!("📭 The catalog is empty.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Dataset", "Type", "Output", "Semantic"]);

    for (name, dataset) in catalog.iter() {
        let semantic = if dataset.is_load_intercepted() {
            "yes"
        } else {
            "no"
        };
        table.add_row(vec![
            name.to_string(),
            dataset.type_name().to_string(),
            dataset.output().to_string(),
            semantic.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
