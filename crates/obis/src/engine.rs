//! DuckDB engine wrapper
//!
//! Thin wrapper over an in-memory `duckdb::Connection`. Arrow result types
//! come from the `duckdb::arrow` re-export so the engine and the rendering
//! layers share one Arrow version.

use duckdb::Connection;
use duckdb::arrow::record_batch::RecordBatch;

use crate::config::DatasetSource;
use crate::error::{Error, Result};
use crate::sql;

/// An in-memory DuckDB session.
pub struct Engine {
    conn: Connection,
}

impl Engine {
    /// Open a fresh in-memory connection.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Install and load the spatial extension.
    ///
    /// Idempotent: both statements are no-ops when the extension is already
    /// installed or loaded.
    pub fn load_spatial(&self) -> Result<()> {
        diagnostics::log_debug!("Loading spatial extension");
        self.conn
            .execute_batch("install spatial; load spatial;")
            .map_err(|source| Error::ExtensionLoad {
                extension: "spatial".to_string(),
                source,
            })
    }

    /// Execute a query and materialize every result batch.
    pub fn query_arrow(&self, sql: &str) -> Result<Vec<RecordBatch>> {
        diagnostics::log_debug!("SQL: {sql}");
        let mut stmt = self.conn.prepare(sql)?;
        let batches: Vec<RecordBatch> = stmt.query_arrow([])?.collect();
        diagnostics::log_debug!("Collected {count} record batches", count: batches.len());
        Ok(batches)
    }

    /// Inspect the schema of the configured dataset.
    pub fn describe(&self, source: &DatasetSource) -> Result<Vec<RecordBatch>> {
        self.query_arrow(&sql::describe_query(source))
    }
}
