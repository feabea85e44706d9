//! Fluent API for building Graph instances.

use crate::types::GraphResult;

use super::directed::{Graph, VertexId};

/// Fluent builder for constructing a Graph.
///
/// Edges are validated only at [`GraphBuilder::build`], so vertices and
/// edges may be declared in any order.
pub struct GraphBuilder<V: VertexId> {
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: VertexId> GraphBuilder<V> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Declare a vertex.
    pub fn vertex(&mut self, id: V) -> &mut Self {
        self.vertices.push(id);
        self
    }

    /// Declare several vertices.
    pub fn vertices<I: IntoIterator<Item = V>>(&mut self, ids: I) -> &mut Self {
        self.vertices.extend(ids);
        self
    }

    /// Declare a directed edge.
    pub fn edge(&mut self, from: V, to: V) -> &mut Self {
        self.edges.push((from, to));
        self
    }

    /// Build the final Graph. Fails if an edge names an undeclared vertex.
    pub fn build(&self) -> GraphResult<Graph<V>> {
        let mut graph = Graph::new();
        for id in &self.vertices {
            if !graph.contains_vertex(id) {
                graph.add_vertex(id.clone());
            }
        }
        for (from, to) in &self.edges {
            graph.add_edge(from.clone(), to.clone())?;
        }
        Ok(graph)
    }
}

impl<V: VertexId> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// The seven-vertex demonstration graph.
///
/// ```text
/// 1: {2}  2: {3, 4}  3: {5}  4: {6, 7}  5: {3}  6: {3}  7: {1, 6}
/// ```
pub fn sample_graph() -> GraphResult<Graph<u32>> {
    GraphBuilder::new()
        .vertices(1..=7)
        .edge(5, 3)
        .edge(6, 3)
        .edge(7, 1)
        .edge(4, 7)
        .edge(1, 2)
        .edge(7, 6)
        .edge(2, 4)
        .edge(3, 5)
        .edge(2, 3)
        .edge(4, 6)
        .build()
}
