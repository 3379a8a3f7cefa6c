//! Per-position match-bonus precomputation.

use crate::Score;
use crate::config::Config;

use super::atom::Atom;

/// Bonus earned by a match at a position whose *preceding* character is
/// `prev`. Classification priority: path separator, word separator, dot,
/// then camelCase transition (lowercase `prev`, uppercase `cur`).
#[inline(always)]
fn preceding_bonus<C: Atom>(config: &Config, prev: C, cur: C) -> Score {
    if prev.is_path_separator() {
        config.bonus_slash
    } else if prev.is_word_separator() {
        config.bonus_word
    } else if prev.is_dot() {
        config.bonus_dot
    } else if prev.is_lowercase() && cur.is_uppercase() {
        config.bonus_capital
    } else {
        0.0
    }
}

/// Fill `buf` with one bonus value per haystack position.
///
/// Must run on the raw haystack, before any case folding: the camelCase
/// bonus keys off a lowercase-to-uppercase transition that folding would
/// erase. Position 0 is treated as preceded by a virtual path separator,
/// so the first character always earns the slash bonus.
pub(super) fn precompute_bonuses<C: Atom>(config: &Config, haystack: &[C], buf: &mut Vec<Score>) {
    // Reset length (O(1), no deallocation) then fill with fresh values.
    buf.clear();
    if haystack.is_empty() {
        return;
    }
    let bonus_iter = std::iter::once(config.bonus_slash).chain(
        haystack
            .windows(2)
            .map(|w| preceding_bonus(config, w[0], w[1])),
    );
    buf.extend(bonus_iter);
}
