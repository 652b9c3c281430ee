//! DOT graph export for arena IR.
//!
//! The traversal is children-first and identity-aware: shared subtrees are
//! defined once and receive one incoming edge per parent relationship.

pub mod error;
pub mod exporter;
pub mod label;
pub mod registry;

pub use error::ExportError;
pub use exporter::{write_to_path, DotExporter};
pub use label::{escape_record_text, render_edge, FieldValue, NodeLabel, PortName};
pub use registry::{Definition, IdentityRegistry};
