// ---------------------------------------------------------------------------
// Scoring sentinels and default weights
// ---------------------------------------------------------------------------
use crate::Score;

/// Score reserved for exact matches. Never produced by the recurrence.
pub const SCORE_MAX: Score = f64::INFINITY;

/// Score signalling "no usable match". Also the -infinity fill value inside
/// the alignment matrices; adding any finite gap penalty to it keeps it at
/// -infinity, so gap propagation through unreachable cells cannot produce
/// NaN or wrap.
pub const SCORE_MIN: Score = f64::NEG_INFINITY;

/// Flat bonus for two adjacent needle characters matched at adjacent
/// haystack positions. Replaces the character-class bonus on that path.
pub(crate) const DEFAULT_BONUS_CONSECUTIVE: Score = 1.0;

/// Bonus for a match right after a path separator (`/` or `\`).
/// A virtual separator precedes position 0, so a match at the very start
/// of the haystack earns this too.
pub(crate) const DEFAULT_BONUS_SLASH: Score = 0.9;

/// Bonus for a match right after `-`, `_` or space.
pub(crate) const DEFAULT_BONUS_WORD: Score = 0.8;

/// Bonus for a lowercase-to-uppercase transition (camelCase hump).
pub(crate) const DEFAULT_BONUS_CAPITAL: Score = 0.7;

/// Bonus for a match right after `.` (file extensions, domain names).
pub(crate) const DEFAULT_BONUS_DOT: Score = 0.6;

/// Per-position penalty for haystack characters skipped before the first
/// matched needle character. Smaller in magnitude than the inner penalty
/// so late-starting matches are not punished like gappy ones.
pub(crate) const DEFAULT_PENALTY_GAP_LEADING: Score = -0.005;

/// Per-position penalty for haystack characters skipped between matches.
pub(crate) const DEFAULT_PENALTY_GAP_INNER: Score = -0.01;

/// Per-position penalty for haystack characters after the last match.
pub(crate) const DEFAULT_PENALTY_GAP_TRAILING: Score = -0.005;

/// Haystacks longer than this are rejected before the quadratic DP runs.
/// The sole safeguard against unbounded work.
pub(crate) const DEFAULT_MAX_LENGTH: usize = 1024;
