//! Structured node-definition labels and their DOT rendering.
//!
//! A [`NodeLabel`] is the data model of one graph node's definition: the
//! variant kind, its scalar fields, and its named child ports, in row order.
//! Turning that into DOT record syntax is a separate, final step, so the
//! label contents never depend on the textual format.

use std::fmt::Write as _;

use crate::ir::ids::GraphNodeId;

/// Scalar field value rendered into a label row.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Signed integer, rendered in decimal.
    Int(i64),
    /// Unsigned integer, rendered in decimal.
    UInt(u64),
    /// Floating-point value, rendered via `Display`.
    Float(f64),
    /// Boolean, rendered as `true`/`false`.
    Bool(bool),
    /// String, rendered single-quoted with record escaping.
    Str(String),
}

/// Named edge anchor on a node definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortName {
    /// Fixed slot name, e.g. `a` or `body`.
    Static(&'static str),
    /// Positional slot name, e.g. `arg_2`.
    Indexed(&'static str, usize),
}

impl PortName {
    fn write_to(&self, out: &mut String) {
        match self {
            Self::Static(name) => out.push_str(name),
            Self::Indexed(prefix, index) => {
                let _ = write!(out, "{prefix}_{index}");
            }
        }
    }

    /// Returns the rendered port name.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

/// One row of a node-definition record.
#[derive(Debug, Clone, PartialEq)]
enum LabelRow {
    Field { name: &'static str, value: FieldValue },
    Port(PortName),
}

/// Structured definition record for one graph node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeLabel {
    kind: &'static str,
    rows: Vec<LabelRow>,
}

impl NodeLabel {
    /// Creates a label for the given variant kind.
    pub fn new(kind: &'static str) -> Self {
        Self { kind, rows: Vec::new() }
    }

    /// Appends a scalar field row.
    pub fn field(mut self, name: &'static str, value: FieldValue) -> Self {
        self.rows.push(LabelRow::Field { name, value });
        self
    }

    /// Appends a fixed-name port row.
    pub fn port(mut self, name: &'static str) -> Self {
        self.rows.push(LabelRow::Port(PortName::Static(name)));
        self
    }

    /// Appends a positional port row.
    pub fn indexed_port(mut self, prefix: &'static str, index: usize) -> Self {
        self.rows.push(LabelRow::Port(PortName::Indexed(prefix, index)));
        self
    }

    /// Returns the variant kind tag.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns `true` when a port row with the given rendered name exists.
    pub fn has_port(&self, name: &str) -> bool {
        self.rows.iter().any(|row| match row {
            LabelRow::Port(port) => port.render() == name,
            LabelRow::Field { .. } => false,
        })
    }

    /// Renders the full DOT node-definition line for the given id.
    pub fn render_definition(&self, id: GraphNodeId) -> String {
        let mut out = String::new();
        let _ = write!(out, "node_{} [ label = \"{{{{<port>{}}}", id.value(), self.kind);
        if !self.rows.is_empty() {
            out.push_str("|{");
            for (i, row) in self.rows.iter().enumerate() {
                if i > 0 {
                    out.push('|');
                }
                match row {
                    LabelRow::Field { name, value } => {
                        let _ = write!(out, "{name}: ");
                        write_field_value(&mut out, value);
                    }
                    LabelRow::Port(port) => {
                        out.push('<');
                        port.write_to(&mut out);
                        out.push('>');
                        port.write_to(&mut out);
                    }
                }
            }
            out.push('}');
        }
        out.push_str("}\" shape = \"record\" ];");
        out
    }
}

fn write_field_value(out: &mut String, value: &FieldValue) {
    match value {
        FieldValue::Int(v) => {
            let _ = write!(out, "{v}");
        }
        FieldValue::UInt(v) => {
            let _ = write!(out, "{v}");
        }
        FieldValue::Float(v) => {
            let _ = write!(out, "{v}");
        }
        FieldValue::Bool(v) => {
            let _ = write!(out, "{v}");
        }
        FieldValue::Str(v) => {
            out.push('\'');
            out.push_str(&escape_record_text(v));
            out.push('\'');
        }
    }
}

/// Renders one DOT edge line anchored at a source port.
pub fn render_edge(from: GraphNodeId, port: &PortName, to: GraphNodeId) -> String {
    format!("node_{}:{} -> node_{}", from.value(), port.render(), to.value())
}

/// Escapes characters that are significant inside a DOT record label.
pub fn escape_record_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '"' | '{' | '}' | '|' | '<' | '>' => {
                out.push('\\');
                out.push(ch);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out
}
