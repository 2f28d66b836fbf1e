use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use cmd::commands::{describe, query};
use obis::{DEFAULT_DATASET, DEFAULT_SPECIES_ID, DatasetSource, QueryConfig};

#[derive(Parser)]
#[command(author, version, about = "Query the OBIS occurrence dataset", long_about = None)]
#[command(name = "reef")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the occurrence query and print the result plus a timing line
    Query(QueryArgs),
    /// Print the dataset schema
    Describe(DescribeArgs),
}

#[derive(Args)]
struct QueryArgs {
    #[command(flatten)]
    dataset: DatasetArgs,

    /// Interpreted species identifier to filter on
    #[arg(long, default_value_t = DEFAULT_SPECIES_ID)]
    species: i64,

    /// Output format: table, csv, or count
    #[arg(short, long, default_value = "table")]
    format: String,
}

#[derive(Args)]
struct DescribeArgs {
    #[command(flatten)]
    dataset: DatasetArgs,
}

#[derive(Args)]
struct DatasetArgs {
    /// Remote parquet glob over the occurrence dataset
    #[arg(long, default_value = DEFAULT_DATASET, conflicts_with = "local")]
    dataset: String,

    /// Local filesystem parquet glob, instead of the remote dataset
    #[arg(long)]
    local: Option<String>,

    /// Skip installing/loading the spatial extension
    #[arg(long)]
    no_spatial: bool,
}

impl DatasetArgs {
    fn source(&self) -> DatasetSource {
        match &self.local {
            Some(glob) => DatasetSource::Local(glob.clone()),
            None => DatasetSource::Remote(self.dataset.clone()),
        }
    }
}

fn main() -> Result<()> {
    diagnostics::init_diagnostics();

    let cli = Cli::parse();
    match cli.command {
        Commands::Query(args) => {
            let config = QueryConfig {
                source: args.dataset.source(),
                species_id: args.species,
                spatial: !args.dataset.no_spatial,
            };
            query::query_command(&config, &args.format)
        }
        Commands::Describe(args) => {
            let config = QueryConfig {
                source: args.dataset.source(),
                species_id: DEFAULT_SPECIES_ID,
                spatial: !args.dataset.no_spatial,
            };
            describe::describe_command(&config)
        }
    }
}
