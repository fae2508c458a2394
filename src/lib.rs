//! # influence
//!
//! Exclusion-aware reachability ("influence") counts for directed graphs.
//!
//! The influence count of a vertex is how many vertices it reaches, itself
//! included, once a chosen set of vertices is removed from the graph. The
//! max influencers are the vertices with the highest count.
//!
//! ```
//! use std::collections::HashSet;
//! use influence::{Digraph, InfluenceEngine};
//!
//! // 0 -> 1 -> 2 -> 0
//! let graph = Digraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)])?;
//! let engine = InfluenceEngine::new(&graph);
//!
//! let excluded: HashSet<usize> = [1].into_iter().collect();
//! assert_eq!(engine.influence_count(0, &excluded)?, 1);
//! assert_eq!(engine.influence_count(2, &excluded)?, 2);
//! assert_eq!(engine.max_influencers(&excluded), vec![2]);
//! # Ok::<(), influence::InfluenceError>(())
//! ```
//!
//! Features:
//! - `petgraph`: [`Graph`] adapter for `petgraph::Graph`.
//! - `serde`: derives for [`InfluenceConfig`].

pub mod error;
pub mod exclusion;
pub mod graph;
pub mod influence;
pub mod reachability;
pub mod text;
pub mod topk;

pub use error::{InfluenceError, Result};
pub use exclusion::{ExclusionMask, VertexFilter};
pub use graph::{AdjacencyMatrix, Digraph, Graph, GraphRef};
pub use influence::{AllExcludedPolicy, InfluenceConfig, InfluenceEngine};
pub use reachability::{influence_count, reachable_from, Scratch};
pub use text::{load_digraph, parse_digraph, read_digraph};
pub use topk::top_k;
