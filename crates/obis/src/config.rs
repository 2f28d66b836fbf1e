//! Query configuration
//!
//! Immutable options for one occurrence query run. The defaults reproduce
//! the fixed literals of the upstream OBIS analysis query; tests point the
//! same pipeline at local fixture globs instead.

use crate::error::{Error, Result};

/// Default remote dataset: the OBIS open-data occurrence snapshot.
pub const DEFAULT_DATASET: &str = "s3://obis-open-data/occurrence/*.parquet";

/// Default species identifier filter.
pub const DEFAULT_SPECIES_ID: i64 = 141433;

/// Where the occurrence Parquet files live.
///
/// The dataset source is an explicit choice between the remote
/// object-storage glob and a local filesystem glob over the same schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Object-storage URL glob, e.g. `s3://bucket/prefix/*.parquet`
    Remote(String),
    /// Local filesystem glob, e.g. `/data/occurrence/*.parquet`
    Local(String),
}

impl DatasetSource {
    /// The glob passed to `read_parquet`.
    pub fn glob(&self) -> &str {
        match self {
            DatasetSource::Remote(url) => url,
            DatasetSource::Local(glob) => glob,
        }
    }
}

/// Configuration for one occurrence query run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Parquet files to read
    pub source: DatasetSource,
    /// Interpreted species identifier to filter on
    pub species_id: i64,
    /// Install and load the spatial extension before querying
    pub spatial: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            source: DatasetSource::Remote(DEFAULT_DATASET.to_string()),
            species_id: DEFAULT_SPECIES_ID,
            spatial: true,
        }
    }
}

impl QueryConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        match &self.source {
            DatasetSource::Remote(url) => {
                if url.is_empty() {
                    return Err(Error::InvalidConfig(
                        "Remote dataset URL cannot be empty".to_string(),
                    ));
                }
                if !url.contains("://") {
                    return Err(Error::InvalidConfig(format!(
                        "Remote dataset URL must carry a scheme: {url}"
                    )));
                }
            }
            DatasetSource::Local(glob) => {
                if glob.is_empty() {
                    return Err(Error::InvalidConfig(
                        "Local dataset glob cannot be empty".to_string(),
                    ));
                }
                if glob.contains("://") {
                    return Err(Error::InvalidConfig(format!(
                        "Local dataset glob must not carry a scheme: {glob}"
                    )));
                }
            }
        }
        Ok(())
    }
}
