//! Exclusion filters: which vertices a query treats as removed from the graph.
//!
//! Ids that do not name a vertex of the graph are simply never matched, so an
//! exclusion set may carry stale or out-of-range ids without effect.

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// Membership test for excluded vertices.
pub trait VertexFilter {
    fn excludes(&self, node: usize) -> bool;
}

/// Nothing excluded.
impl VertexFilter for () {
    fn excludes(&self, _node: usize) -> bool {
        false
    }
}

impl<S: BuildHasher> VertexFilter for HashSet<usize, S> {
    fn excludes(&self, node: usize) -> bool {
        self.contains(&node)
    }
}

impl VertexFilter for BTreeSet<usize> {
    fn excludes(&self, node: usize) -> bool {
        self.contains(&node)
    }
}

/// Linear scan; fine for the handful of ids a command line usually carries.
impl VertexFilter for [usize] {
    fn excludes(&self, node: usize) -> bool {
        self.contains(&node)
    }
}

impl<const N: usize> VertexFilter for [usize; N] {
    fn excludes(&self, node: usize) -> bool {
        self.contains(&node)
    }
}

impl VertexFilter for Vec<usize> {
    fn excludes(&self, node: usize) -> bool {
        self.contains(&node)
    }
}

impl<F: VertexFilter + ?Sized> VertexFilter for &F {
    fn excludes(&self, node: usize) -> bool {
        (**self).excludes(node)
    }
}

/// Dense bitmap over `0..node_count`, O(1) lookups with no hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionMask {
    mask: Vec<bool>,
}

impl ExclusionMask {
    /// Mask for a graph of `node_count` vertices. Ids `>= node_count` are dropped.
    pub fn new<I>(node_count: usize, ids: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut mask = vec![false; node_count];
        for id in ids {
            if let Some(slot) = mask.get_mut(id) {
                *slot = true;
            }
        }
        Self { mask }
    }

    /// Every vertex of a `node_count`-vertex graph excluded.
    pub fn all(node_count: usize) -> Self {
        Self { mask: vec![true; node_count] }
    }

    pub fn len(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.mask.contains(&true)
    }
}

impl VertexFilter for ExclusionMask {
    fn excludes(&self, node: usize) -> bool {
        self.mask.get(node).copied().unwrap_or(false)
    }
}
