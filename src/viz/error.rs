//! Export error contracts.

use thiserror::Error;

/// Failures surfaced by an export session.
///
/// Traversal-order violations and unhandled variants are programming errors,
/// not error variants: the exhaustive match over the closed node set makes
/// the latter unrepresentable, and the former panics at the broken edge.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination stream could not be opened or written.
    #[error("failed to write graph output: {0}")]
    Io(#[from] std::io::Error),
}
