//! Fuzzy subsequence matching and ranking, fzy style.
//!
//! Given a short query ("needle") and a candidate string ("haystack"),
//! this crate decides whether the query's characters appear in order
//! inside the candidate, scores the best such alignment with a
//! gap-penalty/bonus dynamic program, and recovers the exact matched
//! character positions for highlighting. Batch helpers apply the matcher
//! across an ordered candidate list, as a filter UI would.
//!
//! ```
//! use fzyr::{Config, FzyMatcher};
//!
//! let matcher = FzyMatcher::new(Config::default());
//! assert!(matcher.has_match("amor", "app/models/order.rb"));
//!
//! let (positions, score) = matcher.positions("amor", "app/models/order.rb");
//! assert_eq!(positions, vec![0, 4, 11, 12]);
//! assert!(score > 0.0);
//! ```
//!
//! Everything is a pure function of the [`Config`] and the input strings:
//! no shared mutable state, no I/O, no blocking. Candidates are scored
//! independently, so batch work parallelizes trivially as long as results
//! are reassembled in input order.

pub mod config;
pub mod matcher;

pub use config::{Config, ConfigBuilder, ConfigError};
pub use matcher::constants::{SCORE_MAX, SCORE_MIN};
pub use matcher::{FilterMatch, FzyMatcher, ScoredString};

/// A 0-based character index into a haystack.
pub type IndexType = usize;

/// Alignment scores. `f64` so the [`SCORE_MIN`]/[`SCORE_MAX`] sentinels
/// behave as true infinities under gap arithmetic.
pub type Score = f64;

/// Matched haystack positions, one per needle character, strictly
/// increasing.
pub type MatchIndices = Vec<IndexType>;
