//! Earliest-ancestor search over a family tree given as parent -> child pairs.

use std::collections::{BTreeMap, BTreeSet};

use crate::graph::VertexId;
use crate::types::{GraphError, GraphResult, NO_ANCESTOR};

/// Child -> direct parents, built once from an edge list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestryIndex<V: VertexId> {
    parents: BTreeMap<V, BTreeSet<V>>,
}

impl<V: VertexId> AncestryIndex<V> {
    /// Build the index from `(parent, child)` pairs. Every vertex mentioned
    /// gets an entry, possibly with no parents.
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = &'a (V, V)>,
        V: 'a,
    {
        let mut parents: BTreeMap<V, BTreeSet<V>> = BTreeMap::new();
        for (parent, child) in edges {
            parents.entry(parent.clone()).or_default();
            parents
                .entry(child.clone())
                .or_default()
                .insert(parent.clone());
        }
        Self { parents }
    }

    /// Number of distinct vertices mentioned in the edge list.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Whether the edge list was empty.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Whether `id` appears in the edge list.
    pub fn contains(&self, id: &V) -> bool {
        self.parents.contains_key(id)
    }

    /// Direct parents of `id`. Unknown vertices have none.
    pub fn parents_of(&self, id: &V) -> impl Iterator<Item = &V> {
        self.parents.get(id).into_iter().flatten()
    }

    /// Expand upward one generation at a time until the next generation is
    /// empty, then return the lowest ID of the last non-empty one.
    ///
    /// Returns `None` when `start` has no parents at all.
    pub fn earliest_ancestor(&self, start: &V) -> GraphResult<Option<V>> {
        let mut generation: BTreeSet<V> = BTreeSet::from([start.clone()]);
        let mut depth = 0usize;

        loop {
            let next: BTreeSet<V> = generation
                .iter()
                .flat_map(|member| self.parents_of(member))
                .cloned()
                .collect();

            if next.is_empty() {
                if depth == 0 {
                    log::debug!("{:?} has no ancestors", start);
                    return Ok(None);
                }
                log::debug!("Earliest ancestor of {:?} found {} generations up", start, depth);
                // BTreeSet iterates ascending, so the first element is the minimum.
                return Ok(generation.into_iter().next());
            }

            depth += 1;
            if depth >= self.parents.len() {
                return Err(GraphError::CyclicAncestry(format!("{:?}", start)));
            }
            generation = next;
        }
    }
}

/// Earliest ancestor over integer IDs, returning [`NO_ANCESTOR`] (-1) when
/// `start` has no parents.
pub fn earliest_ancestor(edges: &[(i64, i64)], start: i64) -> GraphResult<i64> {
    let index = AncestryIndex::from_edges(edges);
    Ok(index.earliest_ancestor(&start)?.unwrap_or(NO_ANCESTOR))
}
