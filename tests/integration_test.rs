//! Integration tests for whole conversion runs.
//!
//! Each test parses `fixtures/sentences.conll` (three sentences, one with a
//! multi-word token line, one with two roots) and checks what ends up on disk
//! or on the output stream.

use dependency2tree::{parse, Config, Error, FormatError, Mode, ParseOptions, Runner};
use std::fs;
use std::path::{Path, PathBuf};

const SENTENCES: &str = include_str!("fixtures/sentences.conll");

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sentences.conll")
}

fn ignoring_multiwords() -> ParseOptions {
    ParseOptions {
        ignore_double_indices: true,
        ..Default::default()
    }
}

#[test]
fn test_parse_fixture() {
    let doc = parse(SENTENCES, &ignoring_multiwords()).expect("fixture should parse");
    let sizes: Vec<usize> = doc.sentences.iter().map(|s| s.len()).collect();
    assert_eq!(sizes, vec![4, 8, 2]);

    let roots: Vec<usize> = doc.sentences.iter().map(|s| s.tree().roots().len()).collect();
    assert_eq!(roots, vec![1, 1, 2]);

    for sentence in &doc.sentences {
        assert!(sentence.tree().validate().is_empty());
    }
}

#[test]
fn test_multiword_line_is_fatal_without_option() {
    let err = parse(SENTENCES, &ParseOptions::default()).unwrap_err();
    match err {
        FormatError::InvalidIndex { line, value, .. } => {
            assert_eq!(line, 8);
            assert_eq!(value, "3-4");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_graphviz_files_are_numbered_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        output_path: Some(dir.path().join("tree.gv")),
        ignore_double_indices: true,
        ..Default::default()
    };

    let summary = Runner::new(config)
        .unwrap()
        .run_file(&fixture_path(), &mut Vec::new())
        .unwrap();

    let expected: Vec<PathBuf> = ["tree-001.gv", "tree-002.gv", "tree-003.gv"]
        .iter()
        .map(|name| dir.path().join(name))
        .collect();
    assert_eq!(summary.sentences, 3);
    assert_eq!(summary.outputs, expected);

    let contents: Vec<String> = expected
        .iter()
        .map(|p| fs::read_to_string(p).unwrap())
        .collect();
    assert!(contents[0].contains("dort"));
    assert!(contents[1].contains("Alien"));
    assert!(contents[2].contains("Oui"));
    assert!(contents.iter().all(|c| c.starts_with("digraph tree {\n") && c.ends_with('}')));
}

#[test]
fn test_latex_document_has_one_page_per_sentence() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("trees.tex");
    let config = Config {
        mode: Mode::Latex,
        output_path: Some(output.clone()),
        ignore_double_indices: true,
        include_features: true,
        ..Default::default()
    };

    let summary = Runner::new(config)
        .unwrap()
        .run_file(&fixture_path(), &mut Vec::new())
        .unwrap();
    assert_eq!(summary.outputs, vec![output.clone()]);

    let tex = fs::read_to_string(&output).unwrap();
    assert!(tex.starts_with("\\documentclass[10pt,landscape]{article}\n"));
    assert!(tex.ends_with("\\end{document}\n"));
    assert_eq!(tex.matches("\\begin{tikzpicture}").count(), 3);
    assert_eq!(tex.matches("\\clearpage").count(), 3);
    assert!(tex.contains(r"{\tiny Gender=Masc, Number=Sing}"));

    let dort = tex.find("dort").unwrap();
    let alien = tex.find("Alien").unwrap();
    let oui = tex.find("Oui").unwrap();
    assert!(dort < alien && alien < oui);
}

#[test]
fn test_stdout_when_no_output() {
    let config = Config {
        ignore_double_indices: true,
        ..Default::default()
    };
    let mut out = Vec::new();
    Runner::new(config)
        .unwrap()
        .run_source(SENTENCES, &mut out)
        .unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert_eq!(printed.matches("digraph tree {").count(), 3);
    assert!(printed.ends_with("}\n"));
}

#[test]
fn test_compile_without_output_fails_before_io() {
    let config = Config {
        compile: true,
        ..Default::default()
    };
    assert!(matches!(Runner::new(config), Err(Error::Config(_))));
}

#[test]
fn test_missing_compiler_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        output_path: Some(dir.path().join("tree.svg")),
        compile: true,
        command: Some("dependency2tree-missing-dot".to_string()),
        ignore_double_indices: true,
        ..Default::default()
    };

    let err = Runner::new(config)
        .unwrap()
        .run_source(SENTENCES, &mut Vec::new())
        .unwrap_err();
    assert!(matches!(err, Error::Compile(_)));
    assert!(!dir.path().join("tree-002.svg").exists());
}
