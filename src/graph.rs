//! Minimal graph adapter traits, plus the owned [`Digraph`] the engine snapshots into.

use std::collections::TryReserveError;

use crate::error::{InfluenceError, Result};

/// Directed graph view over dense vertex ids `0..node_count()`.
pub trait Graph {
    fn node_count(&self) -> usize;
    fn neighbors(&self, node: usize) -> Vec<usize>;
    fn out_degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }
}

/// A graph view that can return **borrowed** neighbor slices.
///
/// This is the view traversal runs on: a BFS step reads the slice in place
/// instead of allocating a new `Vec` per dequeued vertex.
pub trait GraphRef {
    fn node_count(&self) -> usize;
    fn neighbors_ref(&self, node: usize) -> &[usize];
    fn out_degree(&self, node: usize) -> usize {
        self.neighbors_ref(node).len()
    }
}

/// Dense boolean adjacency matrix: `self.0[u][v]` means `u -> v`.
pub struct AdjacencyMatrix<'a>(pub &'a [Vec<bool>]);

impl<'a> Graph for AdjacencyMatrix<'a> {
    fn node_count(&self) -> usize {
        self.0.len()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.0[node].iter().enumerate().filter(|(_, &e)| e).map(|(i, _)| i).collect()
    }
}

#[cfg(feature = "petgraph")]
impl<N, E, Ty, Ix> Graph for petgraph::Graph<N, E, Ty, Ix>
where
    Ty: petgraph::EdgeType,
    Ix: petgraph::graph::IndexType,
{
    fn node_count(&self) -> usize {
        self.node_count()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.neighbors(petgraph::graph::NodeIndex::new(node)).map(|idx| idx.index()).collect()
    }
}

/// Owned adjacency-list digraph.
///
/// Invariant: every neighbor id is `< node_count()`. All constructors and
/// [`Digraph::add_edge`] enforce it, so traversal code can index without
/// re-checking. Self-loops and parallel edges are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digraph {
    adj: Vec<Vec<usize>>,
}

impl Digraph {
    /// A graph with `node_count` vertices and no edges.
    pub fn new(node_count: usize) -> Self {
        Self { adj: vec![Vec::new(); node_count] }
    }

    /// Like [`Digraph::new`], but reports an unsatisfiable `node_count`
    /// instead of aborting. Use it when the count comes from untrusted input.
    pub fn try_new(node_count: usize) -> std::result::Result<Self, TryReserveError> {
        let mut adj = Vec::new();
        adj.try_reserve_exact(node_count)?;
        adj.resize_with(node_count, Vec::new);
        Ok(Self { adj })
    }

    /// Take ownership of adjacency lists, validating every neighbor id.
    pub fn from_adjacency(adj: Vec<Vec<usize>>) -> Result<Self> {
        let n = adj.len();
        for (from, nbrs) in adj.iter().enumerate() {
            if let Some(&to) = nbrs.iter().find(|&&to| to >= n) {
                return Err(InfluenceError::EdgeOutOfRange { from, to, node_count: n });
            }
        }
        Ok(Self { adj })
    }

    /// Build from `u -> v` pairs. Out-of-range edges are rejected, not skipped.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut g = Self::new(node_count);
        for &(u, v) in edges {
            g.add_edge(u, v)?;
        }
        Ok(g)
    }

    /// Snapshot any [`Graph`] adapter into owned storage.
    pub fn from_graph<G: Graph + ?Sized>(graph: &G) -> Result<Self> {
        let adj = (0..graph.node_count()).map(|u| graph.neighbors(u)).collect();
        Self::from_adjacency(adj)
    }

    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        let n = self.adj.len();
        if from >= n || to >= n {
            return Err(InfluenceError::EdgeOutOfRange { from, to, node_count: n });
        }
        self.adj[from].push(to);
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }
}

impl Graph for Digraph {
    fn node_count(&self) -> usize {
        self.adj.len()
    }

    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.adj.get(node).cloned().unwrap_or_default()
    }
}

impl GraphRef for Digraph {
    fn node_count(&self) -> usize {
        self.adj.len()
    }

    fn neighbors_ref(&self, node: usize) -> &[usize] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}
