//! Batch helpers: apply the matcher across an ordered candidate list.

use log::debug;

use crate::{MatchIndices, Score};

use super::FzyMatcher;

/// One matching candidate out of a filtered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterMatch {
    /// The candidate's original index in the input collection.
    pub index: usize,
    /// 0-based matched character positions, one per needle character.
    pub positions: MatchIndices,
    pub score: Score,
}

/// Like [`FilterMatch`], additionally carrying the matched string itself,
/// for callers that want to drop the input collection after filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredString {
    pub index: usize,
    pub text: String,
    pub positions: MatchIndices,
    pub score: Score,
}

impl FzyMatcher {
    /// Run the subsequence pre-check and, for candidates that pass, the
    /// full positions/score computation, in input order.
    ///
    /// Non-matching candidates are omitted entirely; the output preserves
    /// the input's relative order and is *not* re-sorted by score —
    /// ranking is the caller's call. Candidates are independent, so
    /// callers may shard the input across threads as long as they
    /// reassemble results in input order.
    pub fn filter<'a, I>(&self, needle: &str, haystacks: I) -> Vec<FilterMatch>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut total = 0usize;
        let out: Vec<FilterMatch> = haystacks
            .into_iter()
            .enumerate()
            .inspect(|_| total += 1)
            .filter(|(_, haystack)| self.has_match(needle, haystack))
            .map(|(index, haystack)| {
                let (positions, score) = self.positions(needle, haystack);
                FilterMatch {
                    index,
                    positions,
                    score,
                }
            })
            .collect();
        debug!("filter: {} of {} candidates matched {:?}", out.len(), total, needle);
        out
    }

    /// [`FzyMatcher::filter`], but each result owns a copy of its matched
    /// string.
    pub fn filter_owned<'a, I>(&self, needle: &str, haystacks: I) -> Vec<ScoredString>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut total = 0usize;
        let out: Vec<ScoredString> = haystacks
            .into_iter()
            .enumerate()
            .inspect(|_| total += 1)
            .filter(|(_, haystack)| self.has_match(needle, haystack))
            .map(|(index, haystack)| {
                let (positions, score) = self.positions(needle, haystack);
                ScoredString {
                    index,
                    text: haystack.to_string(),
                    positions,
                    score,
                }
            })
            .collect();
        debug!(
            "filter_owned: {} of {} candidates matched {:?}",
            out.len(),
            total,
            needle
        );
        out
    }
}
