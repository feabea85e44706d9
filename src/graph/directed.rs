//! Core graph structure: vertices mapped to ordered outgoing neighbor sets.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use crate::types::{GraphError, GraphResult};

use super::search;
use super::traversal::{self, Traversal};

/// Bounds every vertex identifier must satisfy.
///
/// Ordering gives each neighbor set a single deterministic enumeration, so
/// every traversal produces one reproducible visitation order.
pub trait VertexId: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> VertexId for T {}

/// A directed graph stored as an adjacency-set mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V: VertexId> {
    /// Vertex -> outgoing neighbors.
    vertices: BTreeMap<V, BTreeSet<V>>,
}

impl<V: VertexId> Graph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(BTreeSet::len).sum()
    }

    /// Whether the vertex is present.
    pub fn contains_vertex(&self, id: &V) -> bool {
        self.vertices.contains_key(id)
    }

    /// Whether the directed edge `from -> to` is present.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.vertices
            .get(from)
            .map(|neighbors| neighbors.contains(to))
            .unwrap_or(false)
    }

    /// All vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }

    /// Read-only view of the full adjacency mapping.
    pub fn adjacency(&self) -> &BTreeMap<V, BTreeSet<V>> {
        &self.vertices
    }

    /// Insert a vertex with an empty neighbor set.
    ///
    /// Re-adding an existing vertex clears its outgoing edges.
    pub fn add_vertex(&mut self, id: V) {
        if let Some(old) = self.vertices.insert(id.clone(), BTreeSet::new()) {
            if !old.is_empty() {
                log::warn!(
                    "Vertex {:?} re-added; dropped {} outgoing edges",
                    id,
                    old.len()
                );
            }
        }
    }

    /// Add a directed edge between two existing vertices.
    pub fn add_edge(&mut self, from: V, to: V) -> GraphResult<()> {
        if !self.vertices.contains_key(&to) {
            return Err(GraphError::missing(&to));
        }
        let neighbors = self
            .vertices
            .get_mut(&from)
            .ok_or_else(|| GraphError::missing(&from))?;
        neighbors.insert(to);
        Ok(())
    }

    /// Outgoing neighbors of a vertex.
    pub fn neighbors(&self, id: &V) -> GraphResult<&BTreeSet<V>> {
        self.vertices.get(id).ok_or_else(|| GraphError::missing(id))
    }

    /// Visit every vertex reachable from `start` in breadth-first order.
    pub fn breadth_first_traverse(&self, start: &V) -> GraphResult<Traversal<V>> {
        traversal::breadth_first(self, start)
    }

    /// Visit every vertex reachable from `start` in depth-first order using an explicit stack.
    pub fn depth_first_traverse(&self, start: &V) -> GraphResult<Traversal<V>> {
        traversal::depth_first(self, start)
    }

    /// Visit every vertex of the graph depth-first, recursively, restarting
    /// from each still-unvisited vertex in ascending order.
    pub fn depth_first_traverse_recursive(&self) -> Traversal<V> {
        traversal::depth_first_recursive(self)
    }

    /// Shortest path from `start` to `goal`, or `None` if unreachable.
    pub fn shortest_path(&self, start: &V, goal: &V) -> GraphResult<Option<Vec<V>>> {
        search::shortest_path(self, start, goal)
    }

    /// Some path from `start` to `goal` found depth-first with an explicit stack.
    pub fn any_path(&self, start: &V, goal: &V) -> GraphResult<Option<Vec<V>>> {
        search::any_path(self, start, goal)
    }

    /// Some path from `start` to `goal` found by recursive depth-first search.
    pub fn any_path_recursive(&self, start: &V, goal: &V) -> GraphResult<Option<Vec<V>>> {
        search::any_path_recursive(self, start, goal)
    }
}

impl<V: VertexId> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}
