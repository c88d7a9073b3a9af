// semlayer/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "semlayer")]
#[command(about = "Semantic models on top of data catalog datasets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub project: ProjectArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project directory
    #[arg(long, default_value = ".", global = true)]
    pub project_dir: PathBuf,

    /// Configuration root, relative to the project directory
    #[arg(long, env = "SEMLAYER_CONF_SOURCE", default_value = "conf", global = true)]
    pub conf_source: PathBuf,

    /// Run environment layered over `base`
    #[arg(long, env = "SEMLAYER_ENV", default_value = "local", global = true)]
    pub env: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📚 Lists catalog datasets and whether they load as semantic models
    List,

    /// 📐 Loads a dataset and describes its columns, dimensions and measures
    Describe {
        /// Dataset name
        dataset: String,

        /// Output format: text | json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// ⚡ Aggregates a semantic dataset by dimensions
    Query {
        /// Dataset name
        dataset: String,

        /// Dimension to group by (repeatable)
        #[arg(long = "dimension", short = 'd')]
        dimensions: Vec<String>,

        /// Measure to compute (repeatable)
        #[arg(long = "measure", short = 'm')]
        measures: Vec<String>,

        /// Maximum number of rows to print
        #[arg(long)]
        limit: Option<usize>,
    },
}
