//! fzy-style fuzzy subsequence matching.
//!
//! Scores the best alignment of a needle inside a haystack with a
//! two-matrix dynamic program and recovers the matched character
//! positions with a backward pass over those matrices.
//!
//! ## Key design choices
//!
//! - **Two matrices, not one**: `D[i][j]` is the best alignment ending
//!   with a match at exactly `(i, j)`; `M[i][j]` the best alignment of the
//!   needle prefix using the haystack up to `j`. Keeping both is what lets
//!   the consecutive-run bonus be awarded only for truly adjacent matches,
//!   and what the backward pass compares to recover the alignment the
//!   forward pass actually chose.
//! - **Position-dependent gap penalties**: leading, inner and trailing
//!   gaps are charged at different rates, so a match deep inside a long
//!   path is not punished like a gappy one.
//! - **Context bonuses** are precomputed per haystack position from the
//!   *preceding* character (path separator, word boundary, dot, camelCase
//!   hump) before any case folding.
//!
//! Scores are `f64` with `-inf`/`+inf` as the "no match"/"exact match"
//! sentinels; `-inf` doubles as the unreachable-cell fill inside the
//! matrices and is absorbing under gap addition.

mod algo;
mod atom;
mod bonus;
pub(crate) mod constants;
mod filter;
mod matrix;
mod prefilter;

use std::cell::RefCell;

use thread_local::ThreadLocal;

use crate::config::Config;
use crate::{MatchIndices, Score};

use self::algo::match_dp;
use self::atom::Atom;
use self::bonus::precompute_bonuses;
use self::constants::{SCORE_MAX, SCORE_MIN};
use self::matrix::MatrixPair;
use self::prefilter::{is_exact, is_subsequence};

pub use self::filter::{FilterMatch, ScoredString};

/// Fuzzy subsequence matcher with fzy-style scoring.
///
/// Construction takes a validated [`Config`]; all matching operations are
/// pure functions of that config and their string arguments. The matcher
/// keeps thread-local scratch buffers (matrices, bonuses, char decoding)
/// so repeated calls reuse allocations; no match data survives a call.
///
/// ASCII inputs run on byte slices; anything else falls back to
/// `Vec<char>` (Unicode scalar values — one code point per position,
/// multi-code-point graphemes are not a unit). Returned positions are
/// 0-based character indices.
#[derive(Debug, Default)]
pub struct FzyMatcher {
    config: Config,
    matrix_buf: ThreadLocal<RefCell<MatrixPair>>,
    bonus_buf: ThreadLocal<RefCell<Vec<Score>>>,
    #[allow(clippy::type_complexity)]
    char_buf: ThreadLocal<RefCell<(Vec<char>, Vec<char>)>>,
}

impl FzyMatcher {
    /// Create a matcher using the given scoring configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// The configuration this matcher scores with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Greedy subsequence pre-check: do the needle's characters appear, in
    /// order, inside the haystack?
    ///
    /// Callers must use this (or [`FzyMatcher::filter`], which applies it)
    /// before trusting [`FzyMatcher::score`] or [`FzyMatcher::positions`]
    /// on a pair — those assume feasibility. An empty needle trivially
    /// matches everything.
    pub fn has_match(&self, needle: &str, haystack: &str) -> bool {
        if needle.is_ascii() && haystack.is_ascii() {
            return is_subsequence(needle.as_bytes(), haystack.as_bytes(), self.config.case_sensitive);
        }
        let bufs = self.borrow_char_bufs(needle, haystack);
        let (ref needle_buf, ref hay_buf) = *bufs;
        is_subsequence(needle_buf, hay_buf, self.config.case_sensitive)
    }

    /// True iff needle and haystack are equal under the active case rule.
    pub fn is_perfect_match(&self, needle: &str, haystack: &str) -> bool {
        if needle.is_ascii() && haystack.is_ascii() {
            return is_exact(needle.as_bytes(), haystack.as_bytes(), self.config.case_sensitive);
        }
        let bufs = self.borrow_char_bufs(needle, haystack);
        let (ref needle_buf, ref hay_buf) = *bufs;
        is_exact(needle_buf, hay_buf, self.config.case_sensitive)
    }

    /// Score the best alignment of `needle` inside `haystack`.
    ///
    /// Returns [`SCORE_MIN`] when either string is empty, the haystack
    /// exceeds the configured maximum length, or the needle is longer than
    /// the haystack; [`SCORE_MAX`] for an exact match. The needle is
    /// assumed to be a verified subsequence of the haystack (see
    /// [`FzyMatcher::has_match`]); otherwise the result is an unspecified
    /// score, never a panic.
    pub fn score(&self, needle: &str, haystack: &str) -> Score {
        self.run::<false>(needle, haystack).1
    }

    /// Like [`FzyMatcher::score`], additionally recovering the 0-based
    /// character positions of the optimal alignment, one per needle
    /// character, strictly increasing.
    ///
    /// Degenerate inputs return `(vec![], SCORE_MIN)`; an exact match
    /// returns the identity sequence and [`SCORE_MAX`] without running the
    /// alignment. Same subsequence precondition as `score`.
    pub fn positions(&self, needle: &str, haystack: &str) -> (MatchIndices, Score) {
        self.run::<true>(needle, haystack)
    }

    fn borrow_char_bufs(
        &self,
        needle: &str,
        haystack: &str,
    ) -> std::cell::RefMut<'_, (Vec<char>, Vec<char>)> {
        let mut bufs = self
            .char_buf
            .get_or(|| RefCell::new((Vec::new(), Vec::new())))
            .borrow_mut();
        let (ref mut needle_buf, ref mut hay_buf) = *bufs;
        needle_buf.clear();
        needle_buf.extend(needle.chars());
        hay_buf.clear();
        hay_buf.extend(haystack.chars());
        bufs
    }

    fn run<const COMPUTE_POSITIONS: bool>(&self, needle: &str, haystack: &str) -> (MatchIndices, Score) {
        if needle.is_empty() || haystack.is_empty() {
            return (MatchIndices::new(), SCORE_MIN);
        }

        // Fast path for ASCII matching.
        if needle.is_ascii() && haystack.is_ascii() {
            return self.run_slices::<COMPUTE_POSITIONS, _>(needle.as_bytes(), haystack.as_bytes());
        }

        let bufs = self.borrow_char_bufs(needle, haystack);
        let (ref needle_buf, ref hay_buf) = *bufs;
        // Split the borrow so run_slices can take the slices while the
        // RefMut is alive.
        let (needle_chars, hay_chars) = (needle_buf.as_slice(), hay_buf.as_slice());
        self.run_slices::<COMPUTE_POSITIONS, _>(needle_chars, hay_chars)
    }

    fn run_slices<const COMPUTE_POSITIONS: bool, C: Atom>(
        &self,
        needle: &[C],
        haystack: &[C],
    ) -> (MatchIndices, Score) {
        let n = needle.len();
        let m = haystack.len();

        if n == 0 || m == 0 || m > self.config.max_length || n > m {
            return (MatchIndices::new(), SCORE_MIN);
        }

        if is_exact(needle, haystack, self.config.case_sensitive) {
            let positions = if COMPUTE_POSITIONS {
                (0..n).collect()
            } else {
                MatchIndices::new()
            };
            return (positions, SCORE_MAX);
        }

        // Bonuses come from the raw haystack: case folding would erase the
        // camelCase transitions they key off.
        let mut bonus_buf = self.bonus_buf.get_or(|| RefCell::new(Vec::new())).borrow_mut();
        precompute_bonuses(&self.config, haystack, &mut bonus_buf);

        match_dp::<COMPUTE_POSITIONS, _>(&self.config, needle, haystack, &bonus_buf, &self.matrix_buf)
    }
}
