//! Vertex marking used by the traversals.

/// Visitation state of a vertex during a traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VertexColor {
    /// Not yet discovered.
    #[default]
    Unvisited,
    /// Discovered, neighbors not yet fully explored.
    Frontier,
    /// Fully explored.
    Done,
}

