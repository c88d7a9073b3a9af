// semlayer/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `describe --format json` stays machine-readable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => commands::list::execute(cli.project),
        Commands::Describe { dataset, format } => {
            commands::describe::execute(cli.project, dataset, format).await
        }
        Commands::Query {
            dataset,
            dimensions,
            measures,
            limit,
        } => commands::query::execute(cli.project, dataset, dimensions, measures, limit).await,
    }
}
