//! Occurrence query library for the reef workspace.
//!
//! Runs one analytical SQL query over a glob of Parquet occurrence files
//! through an embedded DuckDB connection and materializes the result as
//! Arrow record batches. The dataset glob, species identifier, and spatial
//! extension setup are carried in an immutable [`QueryConfig`].

pub mod config;
pub mod engine;
pub mod error;
pub mod runner;
pub mod sql;

pub use config::{DEFAULT_DATASET, DEFAULT_SPECIES_ID, DatasetSource, QueryConfig};
pub use engine::Engine;
pub use error::{Error, Result};
pub use runner::{RunReport, run, timing_line};
