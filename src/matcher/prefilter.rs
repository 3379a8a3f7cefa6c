//! Cheap feasibility checks run before the quadratic alignment.

use super::atom::Atom;

/// Greedy single-pass subsequence test.
///
/// For each needle character in order, search forward in the haystack
/// starting just past the previous hit; bail the moment a character cannot
/// be found. Certifies feasibility only — the alignment the DP picks may
/// use entirely different positions.
///
/// Intentionally lenient as a prefilter: anything it accepts still has to
/// earn its score in the DP, but anything it rejects is skipped outright,
/// so there must be no false negatives. The greedy scan is exact for plain
/// subsequence containment.
pub(super) fn is_subsequence<C: Atom>(needle: &[C], haystack: &[C], case_sensitive: bool) -> bool {
    let mut rest = haystack;
    for &p in needle {
        match p.find_first_in(rest, case_sensitive) {
            Some(pos) => rest = &rest[pos + 1..],
            None => return false,
        }
    }
    true
}

/// Exact equality under the active case rule, without allocating folded
/// copies.
pub(super) fn is_exact<C: Atom>(needle: &[C], haystack: &[C], case_sensitive: bool) -> bool {
    needle.len() == haystack.len()
        && needle
            .iter()
            .zip(haystack)
            .all(|(&p, &c)| p.eq(c, case_sensitive))
}
