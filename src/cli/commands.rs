//! CLI command implementations.

use crate::ancestor::AncestryIndex;
use crate::graph::{sample_graph, Graph, VertexId};
use crate::social::{stats_from_paths, SocialGraph};
use crate::types::{GraphResult, NO_ANCESTOR};

/// Family tree used by `ancestor` when no edges are given.
pub const DEFAULT_ANCESTRY: [(i64, i64); 10] = [
    (1, 3),
    (2, 3),
    (3, 6),
    (5, 6),
    (5, 7),
    (4, 5),
    (4, 8),
    (8, 9),
    (11, 8),
    (10, 1),
];

/// Parse `parent:child` pairs separated by commas, e.g. `1:3,2:3`.
pub fn parse_edges(input: &str) -> Result<Vec<(i64, i64)>, String> {
    input.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| -> Result<(i64, i64), String> {
            let (parent, child) = pair
                .split_once(':')
                .ok_or_else(|| format!("Expected parent:child, got {:?}", pair))?;
            let parent: i64 = parent
                .trim()
                .parse()
                .map_err(|_| format!("Invalid parent ID: {:?}", parent))?;
            let child: i64 = child
                .trim()
                .parse()
                .map_err(|_| format!("Invalid child ID: {:?}", child))?;
            Ok((parent, child))
        })
        .collect()
}

fn render_path<V: VertexId>(path: &Option<Vec<V>>) -> String {
    match path {
        Some(p) => format!("{:?}", p),
        None => "no path".to_string(),
    }
}

fn render_adjacency<V: VertexId>(graph: &Graph<V>) -> String {
    let entries: Vec<String> = graph
        .adjacency()
        .iter()
        .map(|(v, neighbors)| format!("{:?}: {:?}", v, neighbors))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

/// Build the demonstration graph and run every traversal and search on it.
pub fn cmd_graph(start: u32, goal: u32, json: bool) -> GraphResult<()> {
    let graph = sample_graph()?;

    let bft = graph.breadth_first_traverse(&start)?;
    let dft = graph.depth_first_traverse(&start)?;
    let dft_recursive = graph.depth_first_traverse_recursive();
    let shortest = graph.shortest_path(&start, &goal)?;
    let any = graph.any_path(&start, &goal)?;
    let any_recursive = graph.any_path_recursive(&start, &goal)?;

    if json {
        let info = serde_json::json!({
            "vertices": graph.adjacency(),
            "start": start,
            "goal": goal,
            "breadth_first": bft.order,
            "depth_first": dft.order,
            "depth_first_recursive": dft_recursive.order,
            "shortest_path": shortest,
            "any_path": any,
            "any_path_recursive": any_recursive,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Vertices: {}", render_adjacency(&graph));
        println!("Breadth-first from {}: {:?}", start, bft.order);
        println!("Depth-first from {}: {:?}", start, dft.order);
        println!("Depth-first (recursive, all): {:?}", dft_recursive.order);
        println!(
            "Shortest path {} -> {}: {}",
            start,
            goal,
            render_path(&shortest)
        );
        println!("Any path {} -> {}: {}", start, goal, render_path(&any));
        println!(
            "Any path (recursive) {} -> {}: {}",
            start,
            goal,
            render_path(&any_recursive)
        );
    }
    Ok(())
}

/// Find the earliest ancestor of `start`.
pub fn cmd_ancestor(edges: &[(i64, i64)], start: i64, json: bool) -> GraphResult<()> {
    let index = AncestryIndex::from_edges(edges);
    let ancestor = index.earliest_ancestor(&start)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "start": start,
                "earliest_ancestor": ancestor.unwrap_or(NO_ANCESTOR),
                "parents": index.parents_of(&start).collect::<Vec<_>>(),
            })
        );
    } else {
        match ancestor {
            Some(id) => println!("Earliest ancestor of {}: {}", start, id),
            None => println!("{} has no ancestors ({})", start, NO_ANCESTOR),
        }
    }
    Ok(())
}

/// Populate a random social graph and report `start`'s extended network.
pub fn cmd_social(
    num_users: usize,
    avg_friendships: usize,
    start: u64,
    seed: Option<u64>,
    json: bool,
) -> GraphResult<()> {
    let mut graph = SocialGraph::new();
    match seed {
        Some(seed) => graph.populate_graph_seeded(num_users, avg_friendships, seed)?,
        None => graph.populate_graph(num_users, avg_friendships, &mut rand::thread_rng())?,
    }

    let paths = graph.get_all_social_paths(start)?;
    let stats = stats_from_paths(start, &paths, graph.user_count());

    if json {
        let info = serde_json::json!({
            "users": graph.user_count(),
            "friendships": graph.friendships(),
            "paths": paths,
            "stats": stats,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!(
            "Users: {}  Friendships: {}",
            graph.user_count(),
            graph.friendship_count()
        );
        for (id, friends) in graph.friendships() {
            println!("  {}: {:?}", id, friends);
        }
        println!("Social paths from {}:", start);
        for (id, path) in &paths {
            println!("  {}: {:?}", id, path);
        }
        println!(
            "Extended network: {} users ({:.1}% of all)",
            stats.network_size, stats.coverage_percent
        );
        println!(
            "Average degree of separation: {:.2}",
            stats.average_separation
        );
    }
    Ok(())
}
