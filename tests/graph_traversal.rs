//! Graph tests: construction, traversals, and path searches.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graphwalk::graph::{sample_graph, Graph, GraphBuilder};
use graphwalk::types::GraphError;

// ==================== Helper ====================

/// Every consecutive pair in `path` must be an edge of `graph`.
fn assert_edges_exist(graph: &Graph<u32>, path: &[u32]) {
    for pair in path.windows(2) {
        assert!(
            graph.has_edge(&pair[0], &pair[1]),
            "{:?} -> {:?} is not an edge (path {:?})",
            pair[0],
            pair[1],
            path
        );
    }
}

/// Length (in vertices) of the shortest simple path, by enumerating all of them.
fn brute_force_shortest(graph: &Graph<u32>, start: u32, goal: u32) -> Option<usize> {
    fn walk(
        graph: &Graph<u32>,
        vertex: u32,
        goal: u32,
        on_path: &mut Vec<u32>,
        best: &mut Option<usize>,
    ) {
        on_path.push(vertex);
        if vertex == goal {
            let len = on_path.len();
            *best = Some(best.map_or(len, |b| b.min(len)));
        } else {
            for &next in graph.neighbors(&vertex).unwrap() {
                if !on_path.contains(&next) {
                    walk(graph, next, goal, on_path, best);
                }
            }
        }
        on_path.pop();
    }

    let mut best = None;
    walk(graph, start, goal, &mut Vec::new(), &mut best);
    best
}

fn random_graph(seed: u64, size: u32, density: f64) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = GraphBuilder::new();
    builder.vertices(0..size);
    for from in 0..size {
        for to in 0..size {
            if from != to && rng.gen_bool(density) {
                builder.edge(from, to);
            }
        }
    }
    builder.build().unwrap()
}

// ==================== Construction Tests ====================

#[test]
fn test_sample_graph_adjacency() {
    let graph = sample_graph().unwrap();
    assert_eq!(graph.vertex_count(), 7);
    assert_eq!(graph.edge_count(), 10);

    let expected: [(u32, &[u32]); 7] = [
        (1, &[2]),
        (2, &[3, 4]),
        (3, &[5]),
        (4, &[6, 7]),
        (5, &[3]),
        (6, &[3]),
        (7, &[1, 6]),
    ];
    for (vertex, neighbors) in expected {
        let actual: Vec<u32> = graph.neighbors(&vertex).unwrap().iter().copied().collect();
        assert_eq!(actual, neighbors, "neighbors of {}", vertex);
    }
}

#[test]
fn test_add_edge_missing_source() {
    let mut graph = Graph::new();
    graph.add_vertex(1);
    let err = graph.add_edge(9, 1).unwrap_err();
    assert_eq!(err, GraphError::MissingVertex("9".to_string()));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_add_edge_missing_target() {
    let mut graph = Graph::new();
    graph.add_vertex(1);
    let err = graph.add_edge(1, 9).unwrap_err();
    assert_eq!(err, GraphError::MissingVertex("9".to_string()));
    assert!(graph.neighbors(&1).unwrap().is_empty());
}

#[test]
fn test_neighbors_missing_vertex() {
    let graph: Graph<&str> = Graph::new();
    match graph.neighbors(&"ghost") {
        Err(GraphError::MissingVertex(id)) => assert_eq!(id, "\"ghost\""),
        other => panic!("Expected MissingVertex, got {:?}", other),
    }
}

#[test]
fn test_builder_rejects_undeclared_vertex() {
    let result = GraphBuilder::new().vertices([1, 2]).edge(1, 3).build();
    assert!(matches!(result, Err(GraphError::MissingVertex(_))));
}

#[test]
fn test_string_vertices() {
    let graph = GraphBuilder::new()
        .vertices(["a", "b", "c"])
        .edge("a", "b")
        .edge("b", "c")
        .build()
        .unwrap();
    assert_eq!(
        graph.shortest_path(&"a", &"c").unwrap(),
        Some(vec!["a", "b", "c"])
    );
}

#[test]
fn test_readding_vertex_clears_outgoing_edges() {
    let mut graph = Graph::new();
    graph.add_vertex(1);
    graph.add_vertex(2);
    graph.add_edge(1, 2).unwrap();
    assert!(graph.has_edge(&1, &2));

    graph.add_vertex(1);
    assert!(!graph.has_edge(&1, &2));
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_edge_count_counts_directed_edges() {
    let mut graph = Graph::new();
    for v in ["a", "b", "c"] {
        graph.add_vertex(v);
    }
    graph.add_edge("a", "b").unwrap();
    graph.add_edge("b", "a").unwrap();
    graph.add_edge("a", "b").unwrap();
    assert_eq!(graph.edge_count(), 2);
}

// ==================== Traversal Tests ====================

#[test]
fn test_breadth_first_sample() {
    let graph = sample_graph().unwrap();
    let bft = graph.breadth_first_traverse(&1).unwrap();
    assert_eq!(bft.order, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(bft.parents.get(&6), Some(&4));
    assert_eq!(bft.path_to(&6), Some(vec![1, 2, 4, 6]));
}

#[test]
fn test_depth_first_sample() {
    let graph = sample_graph().unwrap();
    let dft = graph.depth_first_traverse(&1).unwrap();
    assert_eq!(dft.order, vec![1, 2, 4, 7, 6, 3, 5]);
    assert_eq!(dft.path_to(&5), Some(vec![1, 2, 4, 7, 6, 3, 5]));
}

#[test]
fn test_depth_first_recursive_sample() {
    let graph = sample_graph().unwrap();
    let dft = graph.depth_first_traverse_recursive();
    assert_eq!(dft.order, vec![1, 2, 3, 5, 4, 6, 7]);
}

#[test]
fn test_traversal_missing_start() {
    let graph = sample_graph().unwrap();
    assert!(matches!(
        graph.breadth_first_traverse(&42),
        Err(GraphError::MissingVertex(_))
    ));
    assert!(matches!(
        graph.depth_first_traverse(&42),
        Err(GraphError::MissingVertex(_))
    ));
}

#[test]
fn test_traversal_skips_unreachable() {
    let graph = GraphBuilder::new()
        .vertices(1..=5)
        .edge(1, 2)
        .edge(2, 1)
        .edge(3, 4)
        .edge(4, 5)
        .build()
        .unwrap();

    let bft = graph.breadth_first_traverse(&1).unwrap();
    assert_eq!(bft.order, vec![1, 2]);
    assert!(!bft.visited(&3));
    assert_eq!(bft.path_to(&4), None);

    let dft = graph.depth_first_traverse(&3).unwrap();
    assert_eq!(dft.order, vec![3, 4, 5]);
}

#[test]
fn test_recursive_covers_disconnected_components() {
    let graph = GraphBuilder::new()
        .vertices([10, 20, 30, 40])
        .edge(30, 10)
        .edge(40, 20)
        .build()
        .unwrap();

    let dft = graph.depth_first_traverse_recursive();
    assert_eq!(dft.order, vec![10, 20, 30, 40]);
    // 10 and 20 were roots, so they have no discovery parent.
    assert!(dft.parents.is_empty());
}

#[test]
fn test_path_to_every_recursive_root() {
    let graph = GraphBuilder::new()
        .vertices([1, 2, 3])
        .edge(2, 3)
        .build()
        .unwrap();

    let dft = graph.depth_first_traverse_recursive();
    assert_eq!(dft.order, vec![1, 2, 3]);
    assert!(dft.visited(&2));
    assert_eq!(dft.path_to(&2), Some(vec![2]));
    assert_eq!(dft.path_to(&3), Some(vec![2, 3]));
    assert_eq!(dft.path_to(&4), None);
}

#[test]
fn test_empty_graph_recursive() {
    let graph: Graph<u32> = Graph::new();
    assert!(graph.depth_first_traverse_recursive().order.is_empty());
}

// ==================== Search Tests ====================

#[test]
fn test_start_equals_goal() {
    let mut graph = Graph::new();
    graph.add_vertex('x');
    assert_eq!(graph.shortest_path(&'x', &'x').unwrap(), Some(vec!['x']));
    assert_eq!(graph.any_path(&'x', &'x').unwrap(), Some(vec!['x']));
    assert_eq!(graph.any_path_recursive(&'x', &'x').unwrap(), Some(vec!['x']));
}

#[test]
fn test_shortest_path_sample() {
    let graph = sample_graph().unwrap();
    assert_eq!(graph.shortest_path(&1, &6).unwrap(), Some(vec![1, 2, 4, 6]));
}

#[test]
fn test_any_path_sample() {
    let graph = sample_graph().unwrap();
    let path = graph.any_path(&1, &6).unwrap().unwrap();
    assert_eq!(path, vec![1, 2, 4, 7, 6]);
    assert_edges_exist(&graph, &path);
}

#[test]
fn test_any_path_recursive_sample() {
    let graph = sample_graph().unwrap();
    let path = graph.any_path_recursive(&1, &6).unwrap().unwrap();
    assert_eq!(path, vec![1, 2, 4, 6]);
    assert_edges_exist(&graph, &path);
}

#[test]
fn test_searches_unreachable_goal() {
    let graph = GraphBuilder::new()
        .vertices(1..=3)
        .edge(1, 2)
        .edge(3, 1)
        .build()
        .unwrap();

    assert_eq!(graph.shortest_path(&1, &3).unwrap(), None);
    assert_eq!(graph.any_path(&1, &3).unwrap(), None);
    assert_eq!(graph.any_path_recursive(&1, &3).unwrap(), None);
}

#[test]
fn test_searches_missing_endpoint() {
    let graph = sample_graph().unwrap();
    for result in [
        graph.shortest_path(&1, &99),
        graph.any_path(&99, &1),
        graph.any_path_recursive(&1, &99),
    ] {
        assert_eq!(result, Err(GraphError::MissingVertex("99".to_string())));
    }
}

#[test]
fn test_searches_follow_cycles_without_looping() {
    let graph = GraphBuilder::new()
        .vertices(1..=4)
        .edge(1, 2)
        .edge(2, 3)
        .edge(3, 1)
        .edge(3, 4)
        .build()
        .unwrap();

    assert_eq!(graph.shortest_path(&1, &4).unwrap(), Some(vec![1, 2, 3, 4]));
    assert_eq!(graph.any_path(&2, &4).unwrap(), Some(vec![2, 3, 4]));
    assert_eq!(graph.any_path_recursive(&3, &2).unwrap(), Some(vec![3, 1, 2]));
}

// ==================== Randomized Cross-Checks ====================

#[test]
fn test_random_graphs_against_brute_force() {
    for seed in 0..25 {
        let graph = random_graph(seed, 7, 0.25);
        let vertices: Vec<u32> = graph.vertices().copied().collect();

        for &start in &vertices {
            let bft = graph.breadth_first_traverse(&start).unwrap();
            let unique: BTreeSet<u32> = bft.order.iter().copied().collect();
            assert_eq!(unique.len(), bft.order.len(), "seed {}: BFT repeated a vertex", seed);

            let dft = graph.depth_first_traverse(&start).unwrap();
            let dft_set: BTreeSet<u32> = dft.order.iter().copied().collect();
            assert_eq!(dft_set, unique, "seed {}: BFT and DFT reach different sets", seed);

            for &goal in &vertices {
                let expected = brute_force_shortest(&graph, start, goal);
                assert_eq!(unique.contains(&goal), expected.is_some());

                let shortest = graph.shortest_path(&start, &goal).unwrap();
                assert_eq!(shortest.as_ref().map(Vec::len), expected, "seed {}", seed);

                let bft_path = bft.path_to(&goal);
                assert_eq!(bft_path.as_ref().map(Vec::len), expected, "seed {}", seed);

                let any = graph.any_path(&start, &goal).unwrap();
                let any_recursive = graph.any_path_recursive(&start, &goal).unwrap();
                assert_eq!(any.is_some(), expected.is_some());
                assert_eq!(any_recursive.is_some(), expected.is_some());

                for path in [shortest, bft_path, any, any_recursive].into_iter().flatten() {
                    assert_eq!(path.first(), Some(&start));
                    assert_eq!(path.last(), Some(&goal));
                    assert_edges_exist(&graph, &path);
                }
            }
        }

        let all = graph.depth_first_traverse_recursive();
        let mut sorted = all.order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vertices, "seed {}: recursive DFT missed vertices", seed);
    }
}
