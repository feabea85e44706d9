//! Goal-directed searches returning a path between two vertices.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::types::{GraphError, GraphResult, VertexColor};

use super::directed::{Graph, VertexId};
use super::traversal::reconstruct;

fn require_endpoints<V: VertexId>(graph: &Graph<V>, start: &V, goal: &V) -> GraphResult<()> {
    if !graph.contains_vertex(start) {
        return Err(GraphError::missing(start));
    }
    if !graph.contains_vertex(goal) {
        return Err(GraphError::missing(goal));
    }
    Ok(())
}

/// Breadth-first search over a queue of partial paths.
///
/// The first path whose tail is `goal` has minimum length.
pub fn shortest_path<V: VertexId>(
    graph: &Graph<V>,
    start: &V,
    goal: &V,
) -> GraphResult<Option<Vec<V>>> {
    require_endpoints(graph, start, goal)?;

    let mut visited: BTreeSet<V> = BTreeSet::new();
    let mut queue: VecDeque<Vec<V>> = VecDeque::new();
    queue.push_back(vec![start.clone()]);

    while let Some(path) = queue.pop_front() {
        let Some(vertex) = path.last() else {
            continue;
        };
        if visited.contains(vertex) {
            continue;
        }
        if vertex == goal {
            log::debug!("Shortest path {:?} -> {:?}: {} hops", start, goal, path.len() - 1);
            return Ok(Some(path));
        }
        visited.insert(vertex.clone());

        for next in graph.neighbors(vertex)? {
            if !visited.contains(next) {
                let mut extended = path.clone();
                extended.push(next.clone());
                queue.push_back(extended);
            }
        }
    }

    log::debug!("No path {:?} -> {:?}", start, goal);
    Ok(None)
}

/// Iterative depth-first search with an explicit stack.
///
/// Returns the discovery-tree path to the first time `goal` is popped. Not
/// necessarily the shortest.
pub fn any_path<V: VertexId>(
    graph: &Graph<V>,
    start: &V,
    goal: &V,
) -> GraphResult<Option<Vec<V>>> {
    require_endpoints(graph, start, goal)?;

    let mut colors: BTreeMap<V, VertexColor> = BTreeMap::new();
    let mut parents: BTreeMap<V, V> = BTreeMap::new();
    let mut stack: Vec<(V, Option<V>)> = vec![(start.clone(), None)];

    while let Some((head, parent)) = stack.pop() {
        if colors.get(&head).copied().unwrap_or_default() != VertexColor::Unvisited {
            continue;
        }
        colors.insert(head.clone(), VertexColor::Frontier);
        if let Some(parent) = parent {
            parents.insert(head.clone(), parent);
        }
        if &head == goal {
            return Ok(Some(reconstruct(&parents, goal)));
        }

        for neighbor in graph.neighbors(&head)? {
            if !colors.contains_key(neighbor) {
                stack.push((neighbor.clone(), Some(head.clone())));
            }
        }
        colors.insert(head, VertexColor::Done);
    }

    Ok(None)
}

/// Recursive depth-first search.
///
/// The visited set and the path accumulator are created fresh here and
/// threaded through [`descend`]; the first completed path short-circuits.
pub fn any_path_recursive<V: VertexId>(
    graph: &Graph<V>,
    start: &V,
    goal: &V,
) -> GraphResult<Option<Vec<V>>> {
    require_endpoints(graph, start, goal)?;

    let mut visited = BTreeSet::new();
    let mut path = Vec::new();
    if descend(graph, start, goal, &mut visited, &mut path) {
        Ok(Some(path))
    } else {
        Ok(None)
    }
}

/// Extend `path` with `vertex` and recurse. On failure the vertex is popped
/// again, leaving `path` as it was on entry.
fn descend<V: VertexId>(
    graph: &Graph<V>,
    vertex: &V,
    goal: &V,
    visited: &mut BTreeSet<V>,
    path: &mut Vec<V>,
) -> bool {
    visited.insert(vertex.clone());
    path.push(vertex.clone());
    if vertex == goal {
        return true;
    }

    if let Some(children) = graph.adjacency().get(vertex) {
        for child in children {
            if !visited.contains(child) && descend(graph, child, goal, visited, path) {
                return true;
            }
        }
    }

    path.pop();
    false
}
