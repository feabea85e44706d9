//! Whole-graph traversals (BFT, DFT) with three-color vertex marking.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::Serialize;

use crate::types::{GraphError, GraphResult, VertexColor};

use super::directed::{Graph, VertexId};

/// Result of a traversal: visitation order plus the discovery tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversal<V: VertexId> {
    /// Vertices in the order they were first visited.
    pub order: Vec<V>,
    /// Vertex -> the vertex it was discovered from. Roots have no entry.
    pub parents: BTreeMap<V, V>,
    #[serde(skip)]
    seen: BTreeSet<V>,
}

impl<V: VertexId> Traversal<V> {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            parents: BTreeMap::new(),
            seen: BTreeSet::new(),
        }
    }

    fn record(&mut self, vertex: &V, parent: Option<&V>) {
        self.order.push(vertex.clone());
        self.seen.insert(vertex.clone());
        if let Some(parent) = parent {
            self.parents.insert(vertex.clone(), parent.clone());
        }
    }

    /// Whether the traversal visited `id`.
    pub fn visited(&self, id: &V) -> bool {
        self.seen.contains(id)
    }

    /// Reconstruct the discovery-tree path from the traversal root to `goal`.
    pub fn path_to(&self, goal: &V) -> Option<Vec<V>> {
        if !self.visited(goal) {
            return None;
        }
        Some(reconstruct(&self.parents, goal))
    }
}

/// Walk a parent map back from `goal` to its root.
pub(crate) fn reconstruct<V: VertexId>(parents: &BTreeMap<V, V>, goal: &V) -> Vec<V> {
    let mut path = vec![goal.clone()];
    let mut current = goal;
    while let Some(parent) = parents.get(current) {
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();
    path
}

/// Every vertex of the graph marked `Unvisited`.
fn fresh_colors<V: VertexId>(graph: &Graph<V>) -> BTreeMap<V, VertexColor> {
    graph
        .vertices()
        .map(|v| (v.clone(), VertexColor::Unvisited))
        .collect()
}

fn color_of<V: VertexId>(colors: &BTreeMap<V, VertexColor>, id: &V) -> VertexColor {
    colors.get(id).copied().unwrap_or_default()
}

/// BFT from `start`. A vertex is enqueued only while `Unvisited`, so each
/// reachable vertex appears exactly once.
pub fn breadth_first<V: VertexId>(graph: &Graph<V>, start: &V) -> GraphResult<Traversal<V>> {
    if !graph.contains_vertex(start) {
        return Err(GraphError::missing(start));
    }
    log::debug!("Breadth-first traversal from {:?}", start);

    let mut colors = fresh_colors(graph);
    let mut result = Traversal::new();
    let mut queue: VecDeque<V> = VecDeque::new();

    colors.insert(start.clone(), VertexColor::Frontier);
    result.record(start, None);
    queue.push_back(start.clone());

    while let Some(head) = queue.pop_front() {
        for neighbor in graph.neighbors(&head)? {
            if color_of(&colors, neighbor) == VertexColor::Unvisited {
                colors.insert(neighbor.clone(), VertexColor::Frontier);
                result.record(neighbor, Some(&head));
                queue.push_back(neighbor.clone());
            }
        }
        colors.insert(head, VertexColor::Done);
    }

    log::debug!("Breadth-first traversal visited {} vertices", result.order.len());
    Ok(result)
}

/// Iterative DFT from `start` using an explicit stack.
///
/// Neighbors are pushed in ascending order, so the largest is explored first.
pub fn depth_first<V: VertexId>(graph: &Graph<V>, start: &V) -> GraphResult<Traversal<V>> {
    if !graph.contains_vertex(start) {
        return Err(GraphError::missing(start));
    }
    log::debug!("Depth-first traversal from {:?}", start);

    let mut colors = fresh_colors(graph);
    let mut result = Traversal::new();
    let mut stack: Vec<(V, Option<V>)> = vec![(start.clone(), None)];

    while let Some((head, parent)) = stack.pop() {
        if color_of(&colors, &head) != VertexColor::Unvisited {
            continue;
        }
        colors.insert(head.clone(), VertexColor::Frontier);
        result.record(&head, parent.as_ref());

        for neighbor in graph.neighbors(&head)? {
            if color_of(&colors, neighbor) == VertexColor::Unvisited {
                stack.push((neighbor.clone(), Some(head.clone())));
            }
        }
        colors.insert(head, VertexColor::Done);
    }

    log::debug!("Depth-first traversal visited {} vertices", result.order.len());
    Ok(result)
}

/// State threaded through the recursive depth-first walk.
struct RecursiveWalk<'g, V: VertexId> {
    graph: &'g Graph<V>,
    colors: BTreeMap<V, VertexColor>,
    result: Traversal<V>,
}

impl<V: VertexId> RecursiveWalk<'_, V> {
    fn visit(&mut self, vertex: &V, parent: Option<&V>) {
        self.colors.insert(vertex.clone(), VertexColor::Frontier);
        self.result.record(vertex, parent);

        let graph = self.graph;
        if let Some(neighbors) = graph.adjacency().get(vertex) {
            for neighbor in neighbors {
                if color_of(&self.colors, neighbor) == VertexColor::Unvisited {
                    self.visit(neighbor, Some(vertex));
                }
            }
        }

        self.colors.insert(vertex.clone(), VertexColor::Done);
    }
}

/// Recursive DFT covering every vertex, including disconnected components.
pub fn depth_first_recursive<V: VertexId>(graph: &Graph<V>) -> Traversal<V> {
    let mut walk = RecursiveWalk {
        graph,
        colors: fresh_colors(graph),
        result: Traversal::new(),
    };

    for vertex in graph.vertices() {
        if color_of(&walk.colors, vertex) == VertexColor::Unvisited {
            walk.visit(vertex, None);
        }
    }

    log::debug!(
        "Recursive depth-first traversal visited {} vertices",
        walk.result.order.len()
    );
    walk.result
}
