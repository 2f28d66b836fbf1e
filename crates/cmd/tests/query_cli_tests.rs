//! End-to-end tests for the command functions, driven through their
//! `_as_string` variants against a Parquet fixture authored by DuckDB
//! itself (`COPY ... (FORMAT PARQUET)`). No network access.

use regex::Regex;
use tempfile::TempDir;

use cmd::commands::{describe, query};
use obis::{DatasetSource, QueryConfig};

/// Write a five-row fixture where exactly occ-1 and occ-2 survive the
/// filters, returning (tempdir, glob).
fn write_fixture() -> (TempDir, String) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("occurrence.parquet");

    let conn = duckdb::Connection::open_in_memory().expect("duckdb connection");
    let sql = format!(
        "copy (
            select * from (values
                ('ds-1', 'occ-1', {{'speciesid': 141433, 'scientificName': 'Abra alba'}},
                 {{'scientificName': 'Abra alba (W. Wood, 1802)'}}, 'OK', false, false),
                ('ds-1', 'occ-2', {{'speciesid': 141433, 'scientificName': 'Abra alba'}},
                 {{'scientificName': 'Mactra alba'}}, 'OK', false, false),
                ('ds-1', 'occ-3', {{'speciesid': 141433, 'scientificName': 'Abra alba'}},
                 {{'scientificName': 'Abra alba'}}, 'DROPPED', true, false),
                ('ds-2', 'occ-4', {{'speciesid': 999, 'scientificName': 'Mya arenaria'}},
                 {{'scientificName': 'Mya arenaria'}}, 'OK', false, false),
                ('ds-2', 'occ-5', {{'speciesid': 141433, 'scientificName': 'Abra alba'}},
                 {{'scientificName': 'Abra alba'}}, 'OK', false, true)
            ) as t(dataset_id, \"_id\", interpreted, source, flags, dropped, absence)
        ) to '{}' (format parquet)",
        path.display()
    );
    conn.execute_batch(&sql).expect("write fixture");

    let glob = format!("{}/*.parquet", tmp.path().display());
    (tmp, glob)
}

fn fixture_config(glob: String) -> QueryConfig {
    QueryConfig {
        source: DatasetSource::Local(glob),
        species_id: 141433,
        spatial: false,
    }
}

fn timing_line_pattern() -> Regex {
    Regex::new(r"^Script executed in \d+\.\d{2} seconds$").expect("timing regex")
}

#[test]
fn test_query_table_output() {
    let (_tmp, glob) = write_fixture();
    let output =
        query::query_command_as_string(&fixture_config(glob), "table").expect("query output");

    assert!(output.contains("occ-1"));
    assert!(output.contains("occ-2"));
    assert!(!output.contains("occ-3"));
    assert!(!output.contains("occ-4"));
    assert!(!output.contains("occ-5"));
    assert!(output.contains("originalScientificName"));
    assert!(output.contains("Abra alba (W. Wood, 1802)"));

    let last_line = output.lines().last().expect("non-empty output");
    assert!(
        timing_line_pattern().is_match(last_line),
        "unexpected timing line: {last_line}"
    );
}

#[test]
fn test_query_csv_output() {
    let (_tmp, glob) = write_fixture();
    let output =
        query::query_command_as_string(&fixture_config(glob), "csv").expect("query output");

    let header = output.lines().next().expect("csv header");
    assert_eq!(
        header,
        "dataset_id,id,speciesid,scientificName,originalScientificName,flags,dropped,absence"
    );
    // Header, two data rows, timing line.
    assert_eq!(output.lines().count(), 4);
    assert!(timing_line_pattern().is_match(output.lines().last().expect("timing line")));
}

#[test]
fn test_query_count_output() {
    let (_tmp, glob) = write_fixture();
    let output =
        query::query_command_as_string(&fixture_config(glob), "count").expect("query output");

    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("2"));
    assert!(timing_line_pattern().is_match(lines.next().expect("timing line")));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_query_empty_result_table() {
    let (_tmp, glob) = write_fixture();
    let config = QueryConfig {
        species_id: 123456,
        ..fixture_config(glob)
    };
    let output = query::query_command_as_string(&config, "table").expect("query output");

    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("No results found."));
    assert!(timing_line_pattern().is_match(lines.next().expect("timing line")));
}

#[test]
fn test_query_unsupported_format() {
    let (_tmp, glob) = write_fixture();
    let err = query::query_command_as_string(&fixture_config(glob), "json")
        .expect_err("unsupported format");
    assert!(err.to_string().contains("Unsupported output format"));
}

#[test]
fn test_query_missing_dataset_fails() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let glob = format!("{}/missing/*.parquet", tmp.path().display());
    assert!(query::query_command_as_string(&fixture_config(glob), "table").is_err());
}

#[test]
fn test_describe_output() {
    let (_tmp, glob) = write_fixture();
    let output =
        describe::describe_command_as_string(&fixture_config(glob)).expect("describe output");

    assert!(output.contains("column_name"));
    assert!(output.contains("interpreted"));
    assert!(output.contains("dropped"));
    // Schema inspection prints no timing line.
    assert!(!output.contains("Script executed in"));
}
