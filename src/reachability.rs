//! Exclusion-aware reachability: the BFS kernel behind influence counts.
//!
//! This module is intentionally small and allocation-light:
//! - Use a "visited stamp" (`Vec<u32>`) to avoid re-clearing `seen` for every start node.
//! - Keep the BFS queue as a plain `Vec` with a read head, so after a traversal the
//!   queue *is* the visited set, in discovery order.
//!
//! Edges are interpreted as `u -> v` (directed). An excluded vertex is never marked,
//! enqueued or counted, so no path can route through it.

use crate::exclusion::VertexFilter;
use crate::graph::GraphRef;

/// Traversal bookkeeping, owned by exactly one caller at a time.
///
/// Reusing a `Scratch` across traversals is what keeps a full max-influencer
/// sweep at O(1) allocations instead of O(V). It is never stored in shared
/// state: every query either brings its own or builds a fresh one.
#[derive(Debug, Clone, Default)]
pub struct Scratch {
    visited: Vec<u32>,
    stamp: u32,
    queue: Vec<usize>,
}

impl Scratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for graphs of up to `node_count` vertices.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            visited: vec![0u32; node_count],
            stamp: 0,
            queue: Vec::with_capacity(node_count),
        }
    }

    fn begin(&mut self, node_count: usize) {
        if self.visited.len() < node_count {
            self.visited.resize(node_count, 0);
        }
        self.stamp = self.stamp.wrapping_add(1);
        if self.stamp == 0 {
            // Wrapped: old marks could alias the new stamp.
            self.visited.fill(0);
            self.stamp = 1;
        }
        self.queue.clear();
    }
}

/// Vertices reachable from `source` without touching an excluded vertex,
/// in BFS discovery order, `source` first.
///
/// Returns an empty slice when `source` itself is excluded.
///
/// # Panics
///
/// If `source` or any neighbor id reported by `graph` is `>= graph.node_count()`.
/// [`crate::Digraph`] upholds the neighbor half of that by construction; the
/// engine checks `source` before calling in.
pub fn reachable_from<'s, G, F>(
    graph: &G,
    source: usize,
    excluded: &F,
    scratch: &'s mut Scratch,
) -> &'s [usize]
where
    G: GraphRef + ?Sized,
    F: VertexFilter + ?Sized,
{
    scratch.begin(graph.node_count());
    if excluded.excludes(source) {
        return &scratch.queue;
    }

    let stamp = scratch.stamp;
    let visited = &mut scratch.visited;
    let q = &mut scratch.queue;

    visited[source] = stamp;
    q.push(source);
    let mut head = 0usize;
    while head < q.len() {
        let cur = q[head];
        head += 1;
        for &nx in graph.neighbors_ref(cur) {
            if visited[nx] != stamp && !excluded.excludes(nx) {
                visited[nx] = stamp;
                q.push(nx);
            }
        }
    }
    q
}

/// Number of vertices [`reachable_from`] would return: 0 if `source` is excluded,
/// otherwise at least 1 (the source reaches itself).
pub fn influence_count<G, F>(graph: &G, source: usize, excluded: &F, scratch: &mut Scratch) -> usize
where
    G: GraphRef + ?Sized,
    F: VertexFilter + ?Sized,
{
    reachable_from(graph, source, excluded, scratch).len()
}
