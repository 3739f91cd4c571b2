//! Disjoint-set union (union-find) over a fixed set of node ids.
//!
//! Used by Kruskal's algorithm to reject edges whose endpoints are already
//! in the same component.

use std::collections::HashMap;

/// Partition of a fixed element set into disjoint classes.
///
/// Elements are node id strings, mapped to dense indices at construction.
/// Lookups of ids that were not part of the initial set are treated as
/// singleton classes of their own and never merged.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    index: HashMap<String, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Create a partition where every id is its own class.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = HashMap::new();
        for id in ids {
            let next = index.len();
            index.entry(id.into()).or_insert(next);
        }
        let n = index.len();
        Self {
            index,
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Number of elements in the set.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative index of the class containing `id`.
    ///
    /// Flattens the lookup chain as a side effect (path compression).
    pub fn find(&mut self, id: &str) -> Option<usize> {
        let idx = *self.index.get(id)?;
        Some(self.find_root(idx))
    }

    fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merge the classes of `a` and `b` by rank.
    ///
    /// Returns `true` if two distinct classes were merged, `false` if they
    /// were already one class or either id is unknown.
    pub fn union(&mut self, a: &str, b: &str) -> bool {
        let (Some(mut left), Some(mut right)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        true
    }

    /// Whether `a` and `b` are in the same class.
    ///
    /// An id is always connected to itself, even if unknown.
    pub fn connected(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        match (self.find(a), self.find(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_singletons() {
        let mut ds = DisjointSet::new(["a", "b", "c"]);
        assert_eq!(ds.len(), 3);
        assert!(!ds.connected("a", "b"));
        assert!(ds.connected("a", "a"));
    }

    #[test]
    fn test_union_connects() {
        let mut ds = DisjointSet::new(["a", "b", "c", "d"]);
        assert!(ds.union("a", "b"));
        assert!(ds.connected("a", "b"));
        assert!(ds.connected("b", "a"));
        assert!(!ds.connected("a", "c"));

        // Already merged
        assert!(!ds.union("b", "a"));
    }

    #[test]
    fn test_union_transitive() {
        let mut ds = DisjointSet::new(["a", "b", "c", "d"]);
        ds.union("a", "b");
        ds.union("c", "d");
        assert!(!ds.connected("a", "d"));
        ds.union("b", "c");
        assert!(ds.connected("a", "d"));
    }

    #[test]
    fn test_union_by_rank_keeps_deeper_root() {
        let mut ds = DisjointSet::new(["a", "b", "c"]);
        ds.union("a", "b"); // rank(a-root) == 1
        let root = ds.find("a").unwrap();
        ds.union("c", "a"); // singleton c hangs under the deeper root
        assert_eq!(ds.find("c"), Some(root));
    }

    #[test]
    fn test_unknown_ids() {
        let mut ds = DisjointSet::new(["a"]);
        assert_eq!(ds.find("zz"), None);
        assert!(!ds.union("a", "zz"));
        assert!(!ds.connected("a", "zz"));
        assert!(ds.connected("zz", "zz"));
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let ds = DisjointSet::new(["a", "a", "b"]);
        assert_eq!(ds.len(), 2);
    }

    proptest! {
        #[test]
        fn test_connected_is_an_equivalence(
            unions in prop::collection::vec((0usize..8, 0usize..8), 0..16),
            a in 0usize..8,
            b in 0usize..8,
            c in 0usize..8,
        ) {
            let ids: Vec<String> = (0..8).map(|i| format!("n{}", i)).collect();
            let mut ds = DisjointSet::new(ids.iter().cloned());
            for (x, y) in &unions {
                ds.union(&ids[*x], &ids[*y]);
                prop_assert!(ds.connected(&ids[*x], &ids[*y]));
            }

            prop_assert!(ds.connected(&ids[a], &ids[a]));
            prop_assert_eq!(ds.connected(&ids[a], &ids[b]), ds.connected(&ids[b], &ids[a]));
            if ds.connected(&ids[a], &ids[b]) && ds.connected(&ids[b], &ids[c]) {
                prop_assert!(ds.connected(&ids[a], &ids[c]));
            }
        }
    }
}
