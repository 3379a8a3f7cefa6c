//! Flattened score matrices for the alignment recurrence.

use crate::Score;
use crate::matcher::constants::SCORE_MIN;

/// A row-major `Score` matrix backed by a single reusable buffer.
///
/// Rows are needle indices, columns haystack indices. `resize` only grows
/// the allocation; callers overwrite every cell they read, so stale values
/// from a previous match never leak into a new one.
#[derive(Default, Debug)]
pub(super) struct ScoreMatrix {
    data: Vec<Score>,
    cols: usize,
}

impl ScoreMatrix {
    pub(super) fn resize(&mut self, rows: usize, cols: usize) {
        let needed = rows * cols;
        if needed > self.data.len() {
            self.data.resize(needed, SCORE_MIN);
        }
        self.cols = cols;
    }

    #[inline(always)]
    pub(super) fn get(&self, row: usize, col: usize) -> Score {
        self.data[row * self.cols + col]
    }

    #[inline(always)]
    pub(super) fn set(&mut self, row: usize, col: usize, value: Score) {
        self.data[row * self.cols + col] = value;
    }
}

/// The two same-shaped matrices of the recurrence.
///
/// `ending` (D): best score of an alignment of `needle[..=i]` that matches
/// `needle[i]` exactly at haystack position `j`; `SCORE_MIN` when no such
/// alignment exists.
///
/// `best` (M): best score of any alignment of `needle[..=i]` using the
/// haystack up to and including `j`. Invariant: `best >= ending` cell-wise.
#[derive(Default, Debug)]
pub(super) struct MatrixPair {
    pub(super) ending: ScoreMatrix,
    pub(super) best: ScoreMatrix,
}

impl MatrixPair {
    pub(super) fn resize(&mut self, rows: usize, cols: usize) {
        self.ending.resize(rows, cols);
        self.best.resize(rows, cols);
    }
}
