/// Occurrence query error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Query engine error (connectivity, query syntax, schema mismatch)
    #[error("Query engine error: {0}")]
    Engine(#[from] duckdb::Error),

    /// Extension install/load failure
    #[error("Failed to load '{extension}' extension: {source}")]
    ExtensionLoad {
        extension: String,
        source: duckdb::Error,
    },

    /// Invalid dataset configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for occurrence query operations
pub type Result<T> = std::result::Result<T, Error>;
