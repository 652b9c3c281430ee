//! File-backed session behavior: header/trailer framing and handle scoping.

use std::fs;

use irviz::ir::{IrArena, NodeRef};
use irviz::viz::{write_to_path, DotExporter};

#[test]
fn write_to_path_produces_a_complete_document() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("sum.dot");

    let mut arena = IrArena::new();
    let a = arena.int(1);
    let b = arena.int(2);
    let root = arena.add(a, b);

    write_to_path(&path, &arena, NodeRef::Expr(root)).expect("export should succeed");

    let contents = fs::read_to_string(&path).expect("output file should exist");
    assert!(contents.starts_with("digraph G {\n"));
    assert!(contents.ends_with("}\n"));
    assert_eq!(
        contents.lines().filter(|line| line.contains("[ label")).count(),
        3
    );
}

#[test]
fn write_to_path_fails_cleanly_when_destination_cannot_be_opened() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("missing").join("sum.dot");

    let mut arena = IrArena::new();
    let root = arena.int(1);

    let result = write_to_path(&path, &arena, NodeRef::Expr(root));
    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn session_sink_is_returned_by_finish() {
    let mut arena = IrArena::new();
    let root = arena.int(3);

    let mut exporter = DotExporter::new(Vec::new()).expect("header write should succeed");
    let id = exporter
        .export_expr(&arena, root)
        .expect("export should succeed");
    assert_eq!(id.value(), 0);
    assert_eq!(exporter.registry().len(), 1);

    let sink = exporter.finish().expect("trailer write should succeed");
    let text = String::from_utf8(sink).expect("dot output should be utf-8");
    assert!(text.ends_with("}\n"));
}

#[test]
fn separate_sessions_assign_ids_independently() {
    let mut arena = IrArena::new();
    let x = arena.var("x");
    let y = arena.var("y");

    let mut first = DotExporter::new(Vec::new()).expect("header write should succeed");
    let mut second = DotExporter::new(Vec::new()).expect("header write should succeed");

    let id_y_first = {
        first.export_expr(&arena, x).expect("export should succeed");
        first.export_expr(&arena, y).expect("export should succeed")
    };
    let id_y_second = second.export_expr(&arena, y).expect("export should succeed");

    // The same node gets a session-local id.
    assert_eq!(id_y_first.value(), 1);
    assert_eq!(id_y_second.value(), 0);
}
