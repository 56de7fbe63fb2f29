// tests/unit_loader.rs
//! Tests for edge-record parsing.

use std::io::Cursor;
use std::io::Write;

use linkrank::error::RankError;
use linkrank::loader;

#[test]
fn test_well_formed_records() {
    let input = "a b\nb c\nc a\n";
    let graph = loader::load_from_reader(Cursor::new(input)).unwrap();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.targets("a"), &["b"]);
}

#[test]
fn test_blank_lines_are_skipped() {
    let input = "a b\n\n   \nb a\n";
    let graph = loader::load_from_reader(Cursor::new(input)).unwrap();
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_single_token_line_reports_line_number() {
    let input = "a b\nlonely\nb a\n";
    let err = loader::load_from_reader(Cursor::new(input)).unwrap_err();
    match err {
        RankError::Parse { line, content } => {
            assert_eq!(line, 2, "Line numbers are 1-based");
            assert_eq!(content, "lonely");
        }
        other => panic!("Expected Parse error, got {other:?}"),
    }
}

#[test]
fn test_three_token_line_is_rejected() {
    let input = "a b extra\n";
    let err = loader::load_from_reader(Cursor::new(input)).unwrap_err();
    assert!(matches!(err, RankError::Parse { line: 1, .. }));
}

#[test]
fn test_target_only_node_survives_loading() {
    let graph = loader::load_from_reader(Cursor::new("a sink\n")).unwrap();
    assert!(graph.nodes().contains(&"sink".to_string()));
    assert_eq!(graph.out_degree("sink"), 0);
}

#[test]
fn test_load_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "x y").unwrap();
    writeln!(file, "y z").unwrap();
    file.flush().unwrap();

    let graph = loader::load_from_path(file.path()).unwrap();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = loader::load_from_path(std::path::Path::new("/no/such/file")).unwrap_err();
    assert!(matches!(err, RankError::Io(_)));
}
