//! Tests for the combined output writer

#![allow(clippy::expect_used)]

use std::path::Path;

use crate::collector::{CombinedWriter, header_line};

#[test]
fn test_header_line_format() {
    assert_eq!(
        header_line(Path::new("dirA/x.dart")),
        "\n\n// === File: dirA/x.dart ===\n"
    );
}

#[test]
fn test_write_file_appends_header_content_and_newline() {
    let mut writer = CombinedWriter::new(Vec::new());
    writer
        .write_file(Path::new("dirA/x.dart"), "hello")
        .expect("Failed to write file");

    let out = writer.finish().expect("Failed to finish");
    assert_eq!(
        String::from_utf8(out).expect("Output is not UTF-8"),
        "\n\n// === File: dirA/x.dart ===\nhello\n"
    );
}

#[test]
fn test_write_file_keeps_order_and_counts() {
    let mut writer = CombinedWriter::new(Vec::new());
    writer
        .write_file(Path::new("a.dart"), "A")
        .expect("Failed to write a");
    writer
        .write_file(Path::new("b.dart"), "B\n")
        .expect("Failed to write b");

    assert_eq!(writer.files_written(), 2);
    let bytes = writer.bytes_written();

    let out = String::from_utf8(writer.finish().expect("Failed to finish"))
        .expect("Output is not UTF-8");
    assert_eq!(
        out,
        "\n\n// === File: a.dart ===\nA\n\n\n// === File: b.dart ===\nB\n\n"
    );
    assert_eq!(bytes, out.len() as u64);
}

#[test]
fn test_write_empty_file_still_writes_header() {
    let mut writer = CombinedWriter::new(Vec::new());
    writer
        .write_file(Path::new("empty.dart"), "")
        .expect("Failed to write file");

    let out = writer.finish().expect("Failed to finish");
    assert_eq!(out, b"\n\n// === File: empty.dart ===\n\n");
}

#[test]
fn test_new_writer_has_zero_counts() {
    let writer = CombinedWriter::new(Vec::new());

    assert_eq!(writer.files_written(), 0);
    assert_eq!(writer.bytes_written(), 0);
}
