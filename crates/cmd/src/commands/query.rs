use anyhow::{Context, Result, anyhow};
use arrow_csv::WriterBuilder;
use duckdb::arrow::util::pretty::pretty_format_batches;

use obis::QueryConfig;

/// Run the occurrence query and print the rendered result plus the timing
/// line to stdout.
#[allow(clippy::print_stdout)]
pub fn query_command(config: &QueryConfig, output_format: &str) -> Result<()> {
    let output = query_command_as_string(config, output_format)?;
    print!("{output}");
    Ok(())
}

/// Run the occurrence query and render the result in the requested format,
/// followed by the timing line.
pub fn query_command_as_string(config: &QueryConfig, output_format: &str) -> Result<String> {
    diagnostics::log_debug!("query_command called with format: {output_format}");

    let report = obis::run(config)
        .with_context(|| format!("Occurrence query failed for {}", config.source.glob()))?;

    let mut output = String::new();
    match output_format {
        "table" => {
            if report.total_rows() == 0 {
                output.push_str("No results found.\n");
            } else {
                let formatted = pretty_format_batches(&report.batches)
                    .map_err(|e| anyhow!("Failed to format results as table: {}", e))?;
                output.push_str(&format!("{formatted}\n"));
            }
        }
        "csv" => {
            let mut buf = Vec::new();
            let mut csv_writer = WriterBuilder::new().build(&mut buf);
            for batch in &report.batches {
                csv_writer
                    .write(batch)
                    .map_err(|e| anyhow!("Failed to write CSV: {}", e))?;
            }
            drop(csv_writer);
            output.push_str(&String::from_utf8(buf).context("CSV output was not valid UTF-8")?);
        }
        "count" => {
            output.push_str(&format!("{}\n", report.total_rows()));
        }
        _ => {
            return Err(anyhow!(
                "Unsupported output format: {}. Use 'table', 'csv', or 'count'.",
                output_format
            ));
        }
    }

    output.push_str(&obis::timing_line(report.elapsed));
    output.push('\n');
    Ok(output)
}
