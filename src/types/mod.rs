//! Shared types for the graphwalk library.

pub mod color;
pub mod error;

pub use color::VertexColor;
pub use error::{GraphError, GraphResult};

/// Returned by the integer ancestor search when the start has no parents.
pub const NO_ANCESTOR: i64 = -1;
