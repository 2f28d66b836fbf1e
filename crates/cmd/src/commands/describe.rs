use anyhow::{Context, Result, anyhow};
use duckdb::arrow::util::pretty::pretty_format_batches;

use obis::{Engine, QueryConfig};

/// Print the column/type table of the configured dataset. Schema
/// inspection, not the query runner: no timing line.
#[allow(clippy::print_stdout)]
pub fn describe_command(config: &QueryConfig) -> Result<()> {
    let output = describe_command_as_string(config)?;
    print!("{output}");
    Ok(())
}

pub fn describe_command_as_string(config: &QueryConfig) -> Result<String> {
    config.validate()?;

    let engine = Engine::open_in_memory()?;
    if config.spatial {
        engine.load_spatial()?;
    }

    let batches = engine
        .describe(&config.source)
        .with_context(|| format!("Failed to describe dataset {}", config.source.glob()))?;

    let formatted = pretty_format_batches(&batches)
        .map_err(|e| anyhow!("Failed to format schema as table: {}", e))?;
    Ok(format!("{formatted}\n"))
}
