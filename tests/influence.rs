use std::collections::{BTreeSet, HashSet};
use std::io::Write;

use influence::{
    load_digraph, AdjacencyMatrix, Digraph, ExclusionMask, GraphRef, InfluenceEngine, InfluenceError,
};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use static_assertions::assert_impl_all;

assert_impl_all!(InfluenceEngine: Send, Sync, Clone);
assert_impl_all!(Digraph: Send, Sync);

fn engine(n: usize, edges: &[(usize, usize)]) -> InfluenceEngine {
    InfluenceEngine::new(&Digraph::from_edges(n, edges).unwrap())
}

fn set(ids: &[usize]) -> HashSet<usize> {
    ids.iter().copied().collect()
}

/// Reference answer: repeatedly sweep the edge list until nothing new is reached.
fn fixpoint_count(n: usize, edges: &[(usize, usize)], source: usize, excluded: &HashSet<usize>) -> usize {
    if excluded.contains(&source) {
        return 0;
    }
    let mut seen = vec![false; n];
    seen[source] = true;
    loop {
        let mut changed = false;
        for &(u, v) in edges {
            if seen[u] && !seen[v] && !excluded.contains(&v) {
                seen[v] = true;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    seen.iter().filter(|&&s| s).count()
}

fn random_graph(n: usize, m: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..m).map(|_| (rng.random_range(0..n), rng.random_range(0..n))).collect()
}

#[test]
fn three_cycle_scenarios() {
    let e = engine(3, &[(0, 1), (1, 2), (2, 0)]);
    for v in 0..3 {
        assert_eq!(e.influence_count(v, &set(&[])).unwrap(), 3);
    }
    assert_eq!(e.max_influencers(&set(&[])), vec![0, 1, 2]);

    let ex = set(&[1]);
    assert_eq!(e.influence_count(0, &ex).unwrap(), 1);
    assert_eq!(e.influence_count(2, &ex).unwrap(), 2);
    assert_eq!(e.influence_count(1, &ex).unwrap(), 0);
}

#[test]
fn disconnected_vertex_reaches_only_itself() {
    let e = engine(4, &[(0, 1), (1, 2), (2, 0)]);
    assert_eq!(e.influence_count(3, &set(&[])).unwrap(), 1);
}

#[test]
fn all_excluded_returns_every_vertex() {
    let e = engine(4, &[(0, 1), (2, 3)]);
    let all = set(&[0, 1, 2, 3]);
    assert_eq!(e.max_influencers(&all), vec![0, 1, 2, 3]);
    for v in 0..4 {
        assert_eq!(e.influence_count(v, &all).unwrap(), 0);
    }
}

#[test]
fn exclusion_filters_agree() {
    let edges = random_graph(30, 80, 7);
    let e = engine(30, &edges);
    let ids = [3usize, 11, 17, 29, 400];
    let hs: HashSet<usize> = ids.iter().copied().collect();
    let bs: BTreeSet<usize> = ids.iter().copied().collect();
    let mask = ExclusionMask::new(30, ids);
    let want = e.influence_counts(&hs);
    assert_eq!(e.influence_counts(&bs), want);
    assert_eq!(e.influence_counts(&mask), want);
    assert_eq!(e.influence_counts(&ids[..]), want);
    assert_eq!(e.influence_counts(&ids), want);
}

#[test]
fn engine_keeps_its_own_copy() {
    let mut g = Digraph::from_edges(3, &[(0, 1)]).unwrap();
    let e = InfluenceEngine::new(&g);
    assert_eq!(e.influence_count(0, &()).unwrap(), 2);

    g.add_edge(1, 2).unwrap();
    assert_eq!(e.influence_count(0, &()).unwrap(), 2);
    assert_eq!(e.edge_count(), 1);
    assert_eq!(InfluenceEngine::new(&g).influence_count(0, &()).unwrap(), 3);
}

#[test]
fn engine_outlives_dropped_graph() {
    let e = {
        let g = Digraph::from_edges(2, &[(1, 0)]).unwrap();
        InfluenceEngine::new(&g)
    };
    assert_eq!(e.max_influencers(&()), vec![1]);
}

#[test]
fn from_graph_snapshots_adapters() {
    let m = vec![vec![false, true], vec![false, false]];
    let e = InfluenceEngine::from_graph(&AdjacencyMatrix(&m)).unwrap();
    assert_eq!(e.influence_counts(&()), vec![2, 1]);
    assert_eq!(e.graph().neighbors_ref(0), &[1]);
}

#[test]
fn random_graphs_match_fixpoint_reference() {
    for seed in 0..20u64 {
        let n = 25;
        let edges = random_graph(n, 40, seed);
        let e = engine(n, &edges);
        let ex: HashSet<usize> = (0..n).filter(|v| (v + seed as usize) % 5 == 0).collect();
        for v in 0..n {
            assert_eq!(
                e.influence_count(v, &ex).unwrap(),
                fixpoint_count(n, &edges, v, &ex),
                "seed={seed} v={v}"
            );
        }
    }
}

#[test]
fn concurrent_queries_match_sequential() {
    let n = 200;
    let edges = random_graph(n, 500, 42);
    let e = engine(n, &edges);
    let exclusions: Vec<HashSet<usize>> = (0..4).map(|k| (0..n).filter(|v| v % 7 == k).collect()).collect();
    let expected: Vec<(Vec<usize>, Vec<usize>)> =
        exclusions.iter().map(|ex| (e.influence_counts(ex), e.max_influencers(ex))).collect();

    let got: Vec<(Vec<usize>, Vec<usize>)> = std::thread::scope(|s| {
        let handles: Vec<_> = exclusions
            .iter()
            .map(|ex| {
                let e = &e;
                s.spawn(move || (e.influence_counts(ex), e.max_influencers(ex)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(got, expected);
}

#[test]
fn load_digraph_from_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "4\n3\n0 1\n1 2\n2 0").unwrap();
    let g = load_digraph(f.path()).unwrap();
    let e = InfluenceEngine::from(g);
    assert_eq!(e.influence_counts(&set(&[1])), vec![1, 0, 2, 1]);
}

#[test]
fn load_digraph_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_digraph(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, InfluenceError::Io(_)));
}

fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..12).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..30)))
}

proptest! {
    // Property: a vertex always reaches itself.
    #[test]
    fn prop_count_at_least_one_without_exclusions((n, edges) in arb_graph()) {
        let e = engine(n, &edges);
        for v in 0..n {
            prop_assert!(e.influence_count(v, &()).unwrap() >= 1);
        }
    }

    // Property: excluded sources count 0, and excluded vertices never show up as reached.
    #[test]
    fn prop_excluded_vertices_are_removed(
        (n, edges) in arb_graph(),
        ex in prop::collection::hash_set(0usize..14, 0..6),
    ) {
        let e = engine(n, &edges);
        for v in 0..n {
            let reached = e.influenced_by(v, &ex).unwrap();
            prop_assert_eq!(reached.len(), e.influence_count(v, &ex).unwrap());
            if ex.contains(&v) {
                prop_assert!(reached.is_empty());
            }
            prop_assert!(reached.iter().all(|w| !ex.contains(w)));
        }
    }

    // Property: removing more vertices can only shrink what a vertex reaches.
    #[test]
    fn prop_monotone_in_exclusions(
        (n, edges) in arb_graph(),
        small in prop::collection::hash_set(0usize..12, 0..4),
        extra in prop::collection::hash_set(0usize..12, 0..4),
    ) {
        let e = engine(n, &edges);
        let big: HashSet<usize> = small.union(&extra).copied().collect();
        for v in (0..n).filter(|v| !big.contains(v)) {
            prop_assert!(e.influence_count(v, &small).unwrap() >= e.influence_count(v, &big).unwrap());
        }
    }

    // Property: repeated queries agree and leave the graph untouched.
    #[test]
    fn prop_idempotent((n, edges) in arb_graph(), ex in prop::collection::hash_set(0usize..12, 0..4)) {
        let e = engine(n, &edges);
        let before = e.graph().clone();
        let first = e.influence_counts(&ex);
        let second = e.influence_counts(&ex);
        prop_assert_eq!(first, second);
        prop_assert_eq!(e.graph(), &before);
    }

    // Property: the max set is non-empty, shares one count, and dominates everyone else.
    #[test]
    fn prop_max_influencers_dominate(
        (n, edges) in arb_graph(),
        ex in prop::collection::hash_set(0usize..12, 0..12),
    ) {
        let e = engine(n, &edges);
        let counts = e.influence_counts(&ex);
        let max = e.max_influencers(&ex);
        prop_assert!(!max.is_empty());
        prop_assert!(max.windows(2).all(|w| w[0] < w[1]));
        let best = counts[max[0]];
        prop_assert!(max.iter().all(|&v| counts[v] == best));
        prop_assert!((0..n).filter(|v| !max.contains(v)).all(|v| counts[v] < best));
    }
}
