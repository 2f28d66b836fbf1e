//! The query runner pipeline
//!
//! One linear sequence per invocation: start instant, optional spatial
//! setup, query execution, result materialization, end instant. Failures
//! abort the run with the underlying engine error; there is no retry and no
//! partial result.

use std::time::{Duration, Instant};

use duckdb::arrow::record_batch::RecordBatch;

use crate::config::QueryConfig;
use crate::engine::Engine;
use crate::error::Result;
use crate::sql;

/// The materialized result of one run.
pub struct RunReport {
    /// Every result batch, fully materialized before the end instant.
    pub batches: Vec<RecordBatch>,
    /// Wall-clock time bracketing extension setup, query execution, and
    /// materialization.
    pub elapsed: Duration,
}

impl RunReport {
    /// Total row count across all batches.
    pub fn total_rows(&self) -> usize {
        self.batches.iter().map(|batch| batch.num_rows()).sum()
    }
}

/// Run the occurrence query described by `config`.
pub fn run(config: &QueryConfig) -> Result<RunReport> {
    config.validate()?;

    let start = Instant::now();

    let engine = Engine::open_in_memory()?;
    if config.spatial {
        engine.load_spatial()?;
    }

    let batches = engine.query_arrow(&sql::occurrence_query(config))?;

    let elapsed = start.elapsed();

    let rows: usize = batches.iter().map(|batch| batch.num_rows()).sum();
    diagnostics::log_info!("Query returned {rows} rows");

    Ok(RunReport { batches, elapsed })
}

/// Render the human-readable timing line, seconds with two decimal places.
pub fn timing_line(elapsed: Duration) -> String {
    format!("Script executed in {:.2} seconds", elapsed.as_secs_f64())
}
