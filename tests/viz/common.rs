//! Shared helpers for exporter tests: in-memory export and DOT line parsing.

use irviz::ir::{IrArena, NodeRef};
use irviz::viz::DotExporter;

/// Exports one root into a string using a fresh session.
pub fn export_to_string(arena: &IrArena, root: NodeRef) -> String {
    let mut exporter = DotExporter::new(Vec::new()).expect("header write should succeed");
    exporter
        .export_root(arena, root)
        .expect("export should succeed");
    let out = exporter.finish().expect("trailer write should succeed");
    String::from_utf8(out).expect("dot output should be utf-8")
}

/// Returns the node-definition lines of a DOT document.
pub fn node_lines(dot: &str) -> Vec<&str> {
    dot.lines().filter(|line| line.contains("[ label")).collect()
}

/// Returns the edge lines of a DOT document.
pub fn edge_lines(dot: &str) -> Vec<&str> {
    dot.lines().filter(|line| line.contains(" -> ")).collect()
}

/// Parses `node_A:port -> node_B` into `(A, port, B)`.
pub fn parse_edge(line: &str) -> (u32, String, u32) {
    let (lhs, rhs) = line.split_once(" -> ").expect("edge line should contain an arrow");
    let (from, port) = lhs.split_once(':').expect("edge source should carry a port");
    let from = from
        .strip_prefix("node_")
        .expect("edge source should be a node id")
        .parse()
        .expect("edge source id should be numeric");
    let to = rhs
        .strip_prefix("node_")
        .expect("edge target should be a node id")
        .parse()
        .expect("edge target id should be numeric");
    (from, port.to_string(), to)
}

/// Parses the id out of a node-definition line.
pub fn definition_id(line: &str) -> u32 {
    let rest = line
        .strip_prefix("node_")
        .expect("definition line should start with a node id");
    let end = rest
        .find(' ')
        .expect("definition line should have content after the id");
    rest[..end].parse().expect("definition id should be numeric")
}
