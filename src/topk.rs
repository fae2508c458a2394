//! Ranking utilities.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The `k` highest non-zero counts as `(vertex, count)`, highest first.
///
/// Equal counts rank the lower vertex id first, so the output is deterministic.
/// Zero counts (excluded vertices) are never ranked.
pub fn top_k(counts: &[usize], k: usize) -> Vec<(usize, usize)> {
    if k == 0 || counts.is_empty() { return Vec::new(); }
    let mut heap = BinaryHeap::with_capacity(k.min(counts.len()) + 1);
    for (i, &count) in counts.iter().enumerate() {
        if count == 0 { continue; }
        let key = (count, Reverse(i));
        if heap.len() < k {
            heap.push(Reverse(key));
        } else if let Some(&Reverse(min_key)) = heap.peek() {
            if key > min_key {
                heap.pop();
                heap.push(Reverse(key));
            }
        }
    }
    let mut results: Vec<(usize, usize)> = heap.into_iter().map(|Reverse((c, Reverse(i)))| (i, c)).collect();
    results.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_count_then_id() {
        let counts = [2, 5, 0, 5, 1];
        assert_eq!(top_k(&counts, 3), vec![(1, 5), (3, 5), (0, 2)]);
    }

    #[test]
    fn skips_zero_counts_and_handles_large_k() {
        let counts = [0, 3, 0];
        assert_eq!(top_k(&counts, 10), vec![(1, 3)]);
        assert!(top_k(&counts, 0).is_empty());
        assert!(top_k(&[], 4).is_empty());
    }

    #[test]
    fn tie_at_cutoff_keeps_lower_id() {
        let counts = [4, 4, 4];
        assert_eq!(top_k(&counts, 2), vec![(0, 4), (1, 4)]);
    }
}
