//! `WeightMatrix` — a square, row-major dense matrix that grows and shrinks
//! one vertex at a time.
//!
//! Cell `(row, col)` holds the weight of the directed edge `row -> col`. The
//! zero value of `W` means "no edge"; there is no separate presence flag.
//!
//! Storage is a single contiguous `Vec<W>` with stride equal to the current
//! dimension, so a row is always a contiguous slice.

use num_traits::Zero;

/// A dense `n x n` matrix of edge weights.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WeightMatrix<W> {
    cells: Vec<W>,
    dim: usize,
}

impl<W: Copy + Zero> WeightMatrix<W> {
    /// Creates an empty `0 x 0` matrix with room for `capacity` vertices.
    ///
    /// A capacity whose square overflows `usize` reserves nothing up front.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity.checked_mul(capacity).unwrap_or(0)),
            dim: 0,
        }
    }

    /// Returns the current dimension (rows == cols).
    #[inline(always)]
    pub(crate) fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the weight stored at `(row, col)`, or `None` out of bounds.
    #[inline(always)]
    pub(crate) fn get(&self, row: usize, col: usize) -> Option<W> {
        if row < self.dim && col < self.dim {
            Some(self.cells[row * self.dim + col])
        } else {
            None
        }
    }

    /// Overwrites `(row, col)` and returns the previous weight.
    ///
    /// # Panics
    /// Panics if either coordinate is out of bounds.
    #[inline(always)]
    pub(crate) fn set(&mut self, row: usize, col: usize, weight: W) -> W {
        assert!(
            row < self.dim && col < self.dim,
            "cell ({row}, {col}) out of bounds for dim={}",
            self.dim
        );
        core::mem::replace(&mut self.cells[row * self.dim + col], weight)
    }

    /// Returns row `row` as a contiguous slice.
    #[inline]
    pub(crate) fn row(&self, row: usize) -> &[W] {
        let start = row * self.dim;
        &self.cells[start..start + self.dim]
    }

    /// Iterates column `col` top to bottom.
    pub(crate) fn column(&self, col: usize) -> impl Iterator<Item = W> + '_ {
        (0..self.dim).map(move |row| self.cells[row * self.dim + col])
    }

    /// Grows the matrix by one row and one column, all initialized to zero.
    ///
    /// Returns the index of the new row/column.
    pub(crate) fn grow(&mut self) -> usize {
        let old = self.dim;
        let new = old + 1;
        let mut cells = Vec::with_capacity(new * new);
        for row in 0..old {
            cells.extend_from_slice(&self.cells[row * old..(row + 1) * old]);
            cells.push(W::zero());
        }
        cells.resize(new * new, W::zero());
        self.cells = cells;
        self.dim = new;
        old
    }

    /// Removes row `idx` and column `idx`, shifting later rows up and later
    /// columns left.
    ///
    /// # Panics
    /// Panics if `idx` is out of bounds.
    pub(crate) fn shrink(&mut self, idx: usize) {
        assert!(idx < self.dim, "index {idx} out of bounds for dim={}", self.dim);
        let old = self.dim;
        let mut cursor = 0;
        // Compact in place: every kept cell moves to an earlier or equal slot.
        for row in (0..old).filter(|&r| r != idx) {
            for col in (0..old).filter(|&c| c != idx) {
                self.cells[cursor] = self.cells[row * old + col];
                cursor += 1;
            }
        }
        self.dim = old - 1;
        self.cells.truncate(self.dim * self.dim);
    }

    /// Counts the non-zero cells in row `idx` plus column `idx`.
    ///
    /// A self-loop at `(idx, idx)` is counted once.
    pub(crate) fn incident(&self, idx: usize) -> usize {
        let outgoing = self.row(idx).iter().filter(|w| !w.is_zero()).count();
        let incoming = self
            .column(idx)
            .enumerate()
            .filter(|&(row, w)| row != idx && !w.is_zero())
            .count();
        outgoing + incoming
    }

    /// Counts every non-zero cell.
    pub(crate) fn non_zero(&self) -> usize {
        self.cells.iter().filter(|w| !w.is_zero()).count()
    }
}
