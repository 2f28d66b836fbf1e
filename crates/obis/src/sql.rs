//! SQL text construction
//!
//! Renders the occurrence query from a [`QueryConfig`]. The projection and
//! the three conjunctive predicates are fixed; only the glob and the species
//! identifier vary. `dropped`/`absence` use `is not true` so that NULL flags
//! pass the filter and only an explicit true excludes a row.

use crate::config::{DatasetSource, QueryConfig};

/// Render the occurrence query for the configured dataset and species.
pub fn occurrence_query(config: &QueryConfig) -> String {
    format!(
        "select\n    \
            dataset_id, _id as id,\n    \
            interpreted.*,\n    \
            source.scientificName as originalScientificName,\n    \
            flags,\n    \
            dropped,\n    \
            absence\n\
        from read_parquet('{}')\n\
        where (interpreted.speciesid = {})\n    \
            and (dropped is not true)\n    \
            and (absence is not true)",
        escape_literal(config.source.glob()),
        config.species_id
    )
}

/// Render the schema-inspection statement for the configured dataset.
pub fn describe_query(source: &DatasetSource) -> String {
    format!(
        "describe select * from read_parquet('{}')",
        escape_literal(source.glob())
    )
}

// Single-quote doubling for SQL string literals.
fn escape_literal(text: &str) -> String {
    text.replace('\'', "''")
}
