//! Influence counts and max influencers.
//!
//! The influence count of `v` is the number of vertices `v` reaches (itself included)
//! when a caller-chosen set of vertices is removed from the graph. Removal is total:
//! an excluded vertex is not counted, not traversed through, and has count 0.
//!
//! The engine keeps a private deep copy of the graph and no other state, so one
//! engine can serve any number of queries, each with its own exclusion set, from
//! any number of threads.

use tracing::{debug, trace};

use crate::error::{InfluenceError, Result};
use crate::exclusion::VertexFilter;
use crate::graph::{Digraph, Graph};
use crate::reachability::{self, Scratch};
use crate::topk::top_k;

/// What [`InfluenceEngine::max_influencers_with`] returns when every vertex is excluded.
///
/// Every count is 0 in that case, so all vertices tie for the maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AllExcludedPolicy {
    /// Report the tie: every vertex id.
    #[default]
    Everyone,
    /// Report no influencers at all.
    Nobody,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfluenceConfig {
    pub all_excluded: AllExcludedPolicy,
}

#[derive(Debug, Clone)]
pub struct InfluenceEngine {
    graph: Digraph,
}

impl InfluenceEngine {
    /// Deep-copies `graph`; later edits to it are not seen by the engine.
    pub fn new(graph: &Digraph) -> Self {
        Self::from(graph.clone())
    }

    /// Snapshot any [`Graph`] adapter.
    pub fn from_graph<G: Graph + ?Sized>(graph: &G) -> Result<Self> {
        Ok(Self::from(Digraph::from_graph(graph)?))
    }

    /// Read-only view of the engine's own copy.
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn check_vertex(&self, node: usize) -> Result<()> {
        let node_count = self.node_count();
        if node >= node_count {
            return Err(InfluenceError::InvalidVertex { node, node_count });
        }
        Ok(())
    }

    /// Influence count of `source` with `excluded` removed from the graph.
    ///
    /// `Ok(0)` if `source` is excluded; otherwise at least 1.
    ///
    /// # Errors
    ///
    /// [`InfluenceError::InvalidVertex`] if `source >= node_count()`, which
    /// includes every call on an empty graph.
    pub fn influence_count<F>(&self, source: usize, excluded: &F) -> Result<usize>
    where
        F: VertexFilter + ?Sized,
    {
        self.influence_count_with(source, excluded, &mut Scratch::with_capacity(self.node_count()))
    }

    /// [`Self::influence_count`] with caller-owned traversal bookkeeping.
    pub fn influence_count_with<F>(&self, source: usize, excluded: &F, scratch: &mut Scratch) -> Result<usize>
    where
        F: VertexFilter + ?Sized,
    {
        self.check_vertex(source)?;
        let count = reachability::influence_count(&self.graph, source, excluded, scratch);
        trace!(source, count, "influence count");
        Ok(count)
    }

    /// The vertices counted by [`Self::influence_count`], in BFS discovery order.
    pub fn influenced_by<F>(&self, source: usize, excluded: &F) -> Result<Vec<usize>>
    where
        F: VertexFilter + ?Sized,
    {
        self.check_vertex(source)?;
        let mut scratch = Scratch::with_capacity(self.node_count());
        Ok(reachability::reachable_from(&self.graph, source, excluded, &mut scratch).to_vec())
    }

    /// Influence count of every vertex, indexed by vertex id.
    pub fn influence_counts<F>(&self, excluded: &F) -> Vec<usize>
    where
        F: VertexFilter + ?Sized,
    {
        let mut scratch = Scratch::with_capacity(self.node_count());
        (0..self.node_count())
            .map(|v| reachability::influence_count(&self.graph, v, excluded, &mut scratch))
            .collect()
    }

    /// Vertices with the highest influence count, ascending by id.
    ///
    /// Non-empty for a non-empty graph; if every vertex is excluded, all of them
    /// tie at 0 and all are returned. Empty for an empty graph.
    pub fn max_influencers<F>(&self, excluded: &F) -> Vec<usize>
    where
        F: VertexFilter + ?Sized,
    {
        self.max_influencers_with(excluded, &InfluenceConfig::default())
    }

    pub fn max_influencers_with<F>(&self, excluded: &F, config: &InfluenceConfig) -> Vec<usize>
    where
        F: VertexFilter + ?Sized,
    {
        let n = self.node_count();
        let mut scratch = Scratch::with_capacity(n);
        let mut best = 0usize;
        let mut winners: Vec<usize> = Vec::new();

        // Vertex 0 seeds the running maximum even when its count is 0.
        for v in 0..n {
            let count = reachability::influence_count(&self.graph, v, excluded, &mut scratch);
            if v == 0 || count > best {
                winners.clear();
                winners.push(v);
                best = count;
            } else if count == best {
                winners.push(v);
            }
        }

        // With n > 0, a best of 0 means every vertex was excluded.
        if best == 0 && config.all_excluded == AllExcludedPolicy::Nobody {
            winners.clear();
        }

        debug!(nodes = n, max_count = best, winners = winners.len(), "max influencers");
        winners
    }

    /// The `k` most influential vertices as `(vertex, count)`, highest first.
    /// Excluded vertices never appear.
    pub fn top_influencers<F>(&self, excluded: &F, k: usize) -> Vec<(usize, usize)>
    where
        F: VertexFilter + ?Sized,
    {
        top_k(&self.influence_counts(excluded), k)
    }
}

impl From<Digraph> for InfluenceEngine {
    fn from(graph: Digraph) -> Self {
        debug!(nodes = graph.node_count(), edges = graph.edge_count(), "influence engine built");
        Self { graph }
    }
}
