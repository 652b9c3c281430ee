//! Library entrypoint for `irviz`.
//!
//! The crate exposes arena IR contracts, the DOT graph exporter, and the
//! target backend-configuration lookup.

pub mod ir;
pub mod target;
pub mod viz;
