//! The alignment recurrence and its backward pass.

use std::cell::RefCell;

use thread_local::ThreadLocal;

use crate::config::Config;
use crate::{MatchIndices, Score};

use super::atom::Atom;
use super::constants::SCORE_MIN;
use super::matrix::MatrixPair;

/// Fill the D/M matrix pair and return the final score `M[n-1][m-1]`,
/// recovering the matched positions when `COMPUTE_POSITIONS` is set.
///
/// Callers must have handled the degenerate cases (empty inputs, needle
/// longer than haystack, over-length haystack, exact match) — the
/// recurrence assumes `0 < needle.len() <= haystack.len()`. The needle is
/// also expected to be a subsequence of the haystack (see `has_match`);
/// if it is not, the returned score is unspecified but finite-or-sentinel,
/// never a panic.
///
/// Forward pass, for each needle index `i` and haystack index `j`:
///
/// - On a character match, `D[i][j]` is the best score ending with that
///   match: either the first-row leading-gap form, or the better of
///   extending `M[i-1][j-1]` at the positional bonus and extending
///   `D[i-1][j-1]` at the flat consecutive-run bonus.
/// - `M[i][j]` carries the running best across the row: each non-matching
///   column costs one gap penalty (trailing on the last row, inner
///   otherwise).
///
/// `SCORE_MIN` is `-inf`, so gap accumulation through unreachable cells
/// stays at `-inf` instead of producing NaN or wrapping.
pub(super) fn match_dp<const COMPUTE_POSITIONS: bool, C: Atom>(
    config: &Config,
    needle: &[C],
    haystack: &[C],
    bonuses: &[Score],
    matrix_buf: &ThreadLocal<RefCell<MatrixPair>>,
) -> (MatchIndices, Score) {
    let n = needle.len();
    let m = haystack.len();
    debug_assert!(n > 0 && n <= m && bonuses.len() == m);

    let case_sensitive = config.case_sensitive;

    let mut buf = matrix_buf
        .get_or(|| RefCell::new(MatrixPair::default()))
        .borrow_mut();
    buf.resize(n, m);
    let MatrixPair { ending, best } = &mut *buf;

    for i in 0..n {
        let gap_penalty = if i == n - 1 {
            config.penalty_gap_trailing
        } else {
            config.penalty_gap_inner
        };
        // Best M value achievable at or before the current column, dragged
        // across the row under the gap penalty.
        let mut running_best = SCORE_MIN;

        for j in 0..m {
            if needle[i].eq(haystack[j], case_sensitive) {
                let matched = if i == 0 {
                    // Leading gaps are charged at their own (cheaper) rate.
                    (j as Score) * config.penalty_gap_leading + bonuses[j]
                } else if j > 0 {
                    let extend = best.get(i - 1, j - 1) + bonuses[j];
                    let run = ending.get(i - 1, j - 1) + config.bonus_consecutive;
                    extend.max(run)
                } else {
                    // A 2nd+ needle character can never match at the first
                    // haystack position.
                    SCORE_MIN
                };
                ending.set(i, j, matched);
                running_best = matched.max(running_best + gap_penalty);
                best.set(i, j, running_best);
            } else {
                ending.set(i, j, SCORE_MIN);
                running_best += gap_penalty;
                best.set(i, j, running_best);
            }
        }
    }

    let total = best.get(n - 1, m - 1);

    if !COMPUTE_POSITIONS {
        return (MatchIndices::new(), total);
    }

    // Backward pass. Walks rows from the last needle index down, accepting
    // the rightmost column whose D value both is reachable and was actually
    // selected by the forward pass. `match_required` is the one piece of
    // state: once a cell was chosen *because* it extended a consecutive
    // run, the previous needle character has no freedom — it must sit at
    // exactly the preceding column.
    let mut positions: MatchIndices = vec![0; n];
    let mut match_required = false;
    let mut j = m; // exclusive upper bound for the column scan

    for i in (0..n).rev() {
        while j > 0 {
            let col = j - 1;
            let here = ending.get(i, col);
            if here != SCORE_MIN && (match_required || here == best.get(i, col)) {
                match_required = i > 0
                    && col > 0
                    && best.get(i, col) == ending.get(i - 1, col - 1) + config.bonus_consecutive;
                positions[i] = col;
                // The previous needle character must match strictly earlier.
                j = col;
                break;
            }
            j -= 1;
        }
    }

    (positions, total)
}
