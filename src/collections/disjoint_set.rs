//! Disjoint Set (Union-Find).
//!
//! # Performance
//!
//! - Uses `Cell<usize>` for parent pointers so `find` can compress paths through `&self`.
//! - Path compression and union-by-rank ensure nearly constant time operations.

use std::cell::Cell;

/// A Disjoint Set (Union-Find) data structure over ids `0..len`.
#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    /// Parent pointers; a root points at itself.
    parent: Vec<Cell<usize>>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).map(Cell::new).collect(),
            rank: vec![0; len],
        }
    }

    /// Adds a new singleton set and returns its id.
    pub fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(Cell::new(id));
        self.rank.push(0);
        id
    }

    /// Finds the representative of the set containing `id`, with path compression.
    ///
    /// # Panics
    /// Panics if `id >= self.len()`.
    pub fn find(&self, id: usize) -> usize {
        let mut root = id;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut curr = id;
        while curr != root {
            let next = self.parent[curr].get();
            self.parent[curr].set(root);
            curr = next;
        }

        root
    }

    /// Unites the sets containing `a` and `b`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            core::cmp::Ordering::Less => self.parent[ra].set(rb),
            core::cmp::Ordering::Greater => self.parent[rb].set(ra),
            core::cmp::Ordering::Equal => {
                self.parent[rb].set(ra);
                self.rank[ra] = self.rank[ra].saturating_add(1);
            }
        }
        true
    }

    /// Whether `a` and `b` are in the same set.
    pub fn same_set(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjoint_set_union_find() {
        let mut ds = DisjointSet::new(5);
        assert!(ds.union(0, 1));
        assert!(ds.union(3, 4));
        assert!(!ds.union(1, 0));
        assert!(ds.same_set(0, 1));
        assert!(!ds.same_set(1, 3));
        assert!(ds.union(1, 4));
        assert!(ds.same_set(0, 3));
        assert_eq!(ds.find(2), 2);
    }

    #[test]
    fn disjoint_set_make_set() {
        let mut ds = DisjointSet::default();
        assert!(ds.is_empty());
        let a = ds.make_set();
        let b = ds.make_set();
        assert_eq!((a, b), (0, 1));
        assert_eq!(ds.len(), 2);
        ds.union(a, b);
        assert_eq!(ds.find(a), ds.find(b));
    }
}
