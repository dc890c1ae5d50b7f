//! Compressed sparse row storage shared by the directed and undirected graphs.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `targets`: contiguous neighbor ids, row after row
//!
//! Rows keep the insertion order of their entries, which fixes the traversal
//! order of every algorithm built on top.

use core::ops::Range;

/// CSR adjacency rows.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_rows` | \(O(n + m)\) | Copies adjacency lists |
/// | `from_pairs` | \(O(n + m)\) | Counting sort by row, stable |
/// | `row` | \(O(1)\) | Returns a slice |
/// | `transpose` | \(O(n + m)\) | Stable in source order |
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Csr {
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl Csr {
    /// Builds CSR rows from adjacency lists without validating targets.
    pub(crate) fn from_rows(rows: &[Vec<usize>]) -> Self {
        let mut offsets = Vec::with_capacity(rows.len() + 1);
        offsets.push(0);

        let mut total = 0usize;
        for row in rows {
            total += row.len();
            offsets.push(total);
        }

        let mut targets = Vec::with_capacity(total);
        for row in rows {
            targets.extend_from_slice(row);
        }

        Self { offsets, targets }
    }

    /// Builds CSR rows from `(row, target)` pairs.
    ///
    /// Returns the rows together with the slot each pair landed in, so callers
    /// can lay out parallel per-slot data (edge ids).
    pub(crate) fn from_pairs(row_count: usize, pairs: &[(usize, usize)]) -> (Self, Vec<usize>) {
        let mut offsets = vec![0usize; row_count + 1];
        for &(row, _) in pairs {
            offsets[row + 1] += 1;
        }
        for i in 0..row_count {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = offsets[..row_count].to_vec();
        let mut targets = vec![0usize; pairs.len()];
        let mut slots = Vec::with_capacity(pairs.len());
        for &(row, target) in pairs {
            let slot = cursor[row];
            cursor[row] += 1;
            targets[slot] = target;
            slots.push(slot);
        }

        (Self { offsets, targets }, slots)
    }

    /// Number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Total number of stored entries.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.targets.len()
    }

    /// Slot range of `row` inside the target array.
    ///
    /// # Panics
    /// Panics if `row >= self.row_count()`.
    #[inline]
    pub fn row_range(&self, row: usize) -> Range<usize> {
        self.offsets[row]..self.offsets[row + 1]
    }

    /// Targets of `row`, in insertion order.
    ///
    /// # Panics
    /// Panics if `row >= self.row_count()`.
    #[inline]
    pub fn row(&self, row: usize) -> &[usize] {
        &self.targets[self.row_range(row)]
    }

    /// Returns the reversed rows: entry `u -> v` becomes `v -> u`.
    ///
    /// Each reversed row lists its sources in increasing order.
    pub fn transpose(&self) -> Self {
        let n = self.row_count();
        let mut pairs = Vec::with_capacity(self.entry_count());
        for u in 0..n {
            for &v in self.row(u) {
                pairs.push((v, u));
            }
        }
        Self::from_pairs(n, &pairs).0
    }

    /// Iterates every `(row, target)` entry in row order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.row_count()).flat_map(move |u| self.row(u).iter().map(move |&v| (u, v)))
    }
}
