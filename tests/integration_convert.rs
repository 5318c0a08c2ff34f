//! Integration tests for header checks and delimiter conversion.

use edgelist_sniff::{
    check_format, check_header, convert, detect_delimiter, ConvertOptions, Delimiter, HeaderMode,
    SniffError, TableFormat,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn test_detect_then_check_edgelist() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "edges.tsv", "# exported\nsource\ttarget\n1\t2\n2\t3\n");

    let delimiter = detect_delimiter(&path).unwrap();
    let report = check_format(&path, delimiter, TableFormat::EdgeList).unwrap();
    assert!(report.is_valid(), "unexpected report: {:?}", report);
}

#[test]
fn test_check_nodelist_without_header() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "nodes.csv", "1,10\n2,20\n");

    let report = check_format(&path, Delimiter::Comma, TableFormat::NodeList).unwrap();
    assert!(!report.has_header);
    assert_eq!(report.missing, vec!["node_id"]);
}

#[test]
fn test_convert_comma_to_tab() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "edges.csv", "source,target\n1,2\n2,3\n");
    let output = dir.path().join("out").join("edges.tsv");

    let summary = convert(
        &input,
        &output,
        &ConvertOptions {
            delimiter: Some(Delimiter::Tab),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(summary.source_delimiter, Delimiter::Comma);
    assert_eq!(summary.target_delimiter, Delimiter::Tab);
    assert_eq!(summary.rows_written, 3);
    assert!(summary.header_written);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "source\ttarget\n1\t2\n2\t3\n"
    );
    assert_eq!(detect_delimiter(&output).unwrap(), Delimiter::Tab);
}

#[test]
fn test_convert_drops_comments_and_blank_lines() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "edges.txt", "# graph\n\n1 2\n\n2 3\n");
    let output = dir.path().join("edges.csv");

    convert(
        &input,
        &output,
        &ConvertOptions {
            delimiter: Some(Delimiter::Comma),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "1,2\n2,3\n");
}

#[test]
fn test_convert_remove_header() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "edges.csv", "source,target\n1,2\n");
    let output = dir.path().join("edges.txt");

    let summary = convert(
        &input,
        &output,
        &ConvertOptions {
            delimiter: Some(Delimiter::Space),
            header: HeaderMode::Remove,
        },
    )
    .unwrap();

    assert!(!summary.header_written);
    assert_eq!(summary.rows_written, 1);
    assert_eq!(fs::read_to_string(&output).unwrap(), "1 2\n");
}

#[test]
fn test_convert_in_place_with_new_header() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "clusters.tsv", "a\tb\n1\t7\n2\t7\n");

    convert(
        &path,
        &path,
        &ConvertOptions {
            delimiter: None,
            header: HeaderMode::Replace(vec!["node_id".to_string(), "cluster_id".to_string()]),
        },
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "node_id\tcluster_id\n1\t7\n2\t7\n"
    );
    let info = check_header(&path, Delimiter::Tab).unwrap();
    assert!(info.has_header);
    let report = check_format(&path, Delimiter::Tab, TableFormat::ClusterList).unwrap();
    assert!(report.is_valid());
}

#[test]
fn test_convert_rejects_header_of_wrong_width() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "edges.csv", "1,2\n");
    let output = dir.path().join("out.csv");

    let result = convert(
        &input,
        &output,
        &ConvertOptions {
            delimiter: None,
            header: HeaderMode::Replace(vec!["source".to_string()]),
        },
    );

    assert!(matches!(
        result,
        Err(SniffError::HeaderMismatch {
            expected: 2,
            found: 1
        })
    ));
    assert!(!output.exists());
}

#[test]
fn test_convert_undetectable_input() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "empty.csv", "");
    let output = dir.path().join("out.csv");

    let result = convert(&input, &output, &ConvertOptions::default());
    assert!(matches!(
        result,
        Err(SniffError::DelimiterNotDetected { .. })
    ));
}
