//! Scoring configuration: weights, limits, validation, derived bounds.

use log::trace;
use thiserror::Error;

use crate::Score;
use crate::matcher::constants::*;

/// A configuration field failed validation.
///
/// Raised at construction time only; matching itself never errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("`{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: Score },
    #[error("`{field}` is a bonus and must be non-negative, got {value}")]
    NegativeBonus { field: &'static str, value: Score },
    #[error("`{field}` is a gap penalty and must be non-positive, got {value}")]
    PositivePenalty { field: &'static str, value: Score },
    #[error("`max_length` must be at least 1")]
    ZeroMaxLength,
}

/// Immutable record of scoring weights and limits.
///
/// Construct via [`Config::default`] or [`Config::builder`]; pass by
/// reference into a [`crate::FzyMatcher`]. Fields are public so callers
/// can build one literally, but anything not produced by the builder
/// should be checked with [`Config::validate`] before use.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// When false (the default), characters compare case-insensitively.
    /// Bonus classification always sees the raw, unfolded haystack.
    pub case_sensitive: bool,
    /// Flat bonus for a match immediately following the previous one.
    pub bonus_consecutive: Score,
    /// Bonus for a match right after `/` or `\` (and for position 0,
    /// which is treated as preceded by a virtual separator).
    pub bonus_slash: Score,
    /// Bonus for a match right after `-`, `_` or space.
    pub bonus_word: Score,
    /// Bonus for a lowercase-to-uppercase transition.
    pub bonus_capital: Score,
    /// Bonus for a match right after `.`.
    pub bonus_dot: Score,
    /// Per-position penalty for haystack characters before the first
    /// match. Non-positive.
    pub penalty_gap_leading: Score,
    /// Per-position penalty for skipped characters between matches.
    /// Non-positive.
    pub penalty_gap_inner: Score,
    /// Per-position penalty for haystack characters after the last match.
    /// Non-positive.
    pub penalty_gap_trailing: Score,
    /// Haystacks longer than this score [`SCORE_MIN`] without running the
    /// quadratic alignment.
    pub max_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            bonus_consecutive: DEFAULT_BONUS_CONSECUTIVE,
            bonus_slash: DEFAULT_BONUS_SLASH,
            bonus_word: DEFAULT_BONUS_WORD,
            bonus_capital: DEFAULT_BONUS_CAPITAL,
            bonus_dot: DEFAULT_BONUS_DOT,
            penalty_gap_leading: DEFAULT_PENALTY_GAP_LEADING,
            penalty_gap_inner: DEFAULT_PENALTY_GAP_INNER,
            penalty_gap_trailing: DEFAULT_PENALTY_GAP_TRAILING,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl Config {
    /// Returns a default builder for chaining.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check every field against its sign/finiteness constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bonuses = [
            ("bonus_consecutive", self.bonus_consecutive),
            ("bonus_slash", self.bonus_slash),
            ("bonus_word", self.bonus_word),
            ("bonus_capital", self.bonus_capital),
            ("bonus_dot", self.bonus_dot),
        ];
        for (field, value) in bonuses {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeBonus { field, value });
            }
        }
        let penalties = [
            ("penalty_gap_leading", self.penalty_gap_leading),
            ("penalty_gap_inner", self.penalty_gap_inner),
            ("penalty_gap_trailing", self.penalty_gap_trailing),
        ];
        for (field, value) in penalties {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
            if value > 0.0 {
                return Err(ConfigError::PositivePenalty { field, value });
            }
        }
        if self.max_length == 0 {
            return Err(ConfigError::ZeroMaxLength);
        }
        Ok(())
    }

    /// Structural predicate form of [`Config::validate`], for boundary
    /// checks outside the hot path.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// The longest haystack the matcher will evaluate.
    pub fn max_match_length(&self) -> usize {
        self.max_length
    }

    /// Practical floor for non-sentinel scores: the most negative score an
    /// all-gap alignment at maximum length can produce.
    pub fn score_floor(&self) -> Score {
        self.max_length as Score * self.penalty_gap_inner
    }

    /// Practical ceiling for non-exact scores: a full-length consecutive
    /// run at maximum length.
    pub fn score_ceiling(&self) -> Score {
        self.max_length as Score * self.bonus_consecutive
    }
}

/// Builder over [`Config`]: each setter overrides one default.
///
/// [`ConfigBuilder::build`] validates the assembled record, so a config
/// that came out of the builder is always usable as-is.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.config.case_sensitive = case_sensitive;
        self
    }

    pub fn bonus_consecutive(mut self, bonus: Score) -> Self {
        self.config.bonus_consecutive = bonus;
        self
    }

    pub fn bonus_slash(mut self, bonus: Score) -> Self {
        self.config.bonus_slash = bonus;
        self
    }

    pub fn bonus_word(mut self, bonus: Score) -> Self {
        self.config.bonus_word = bonus;
        self
    }

    pub fn bonus_capital(mut self, bonus: Score) -> Self {
        self.config.bonus_capital = bonus;
        self
    }

    pub fn bonus_dot(mut self, bonus: Score) -> Self {
        self.config.bonus_dot = bonus;
        self
    }

    pub fn penalty_gap_leading(mut self, penalty: Score) -> Self {
        self.config.penalty_gap_leading = penalty;
        self
    }

    pub fn penalty_gap_inner(mut self, penalty: Score) -> Self {
        self.config.penalty_gap_inner = penalty;
        self
    }

    pub fn penalty_gap_trailing(mut self, penalty: Score) -> Self {
        self.config.penalty_gap_trailing = penalty;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.config.max_length = max_length;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        self.config.validate()?;
        trace!("built config {:?}", self.config);
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SCORE_MAX, SCORE_MIN};

    #[test]
    fn default_is_valid() {
        assert!(Config::default().is_valid());
    }

    #[test]
    fn builder_applies_overrides() {
        let config = Config::builder()
            .case_sensitive(true)
            .bonus_word(0.5)
            .max_length(64)
            .build()
            .unwrap();
        assert!(config.case_sensitive);
        assert_eq!(config.bonus_word, 0.5);
        assert_eq!(config.max_match_length(), 64);
        // Untouched fields keep their defaults.
        assert_eq!(config.bonus_slash, Config::default().bonus_slash);
    }

    #[test]
    fn positive_gap_penalty_rejected() {
        let err = Config::builder().penalty_gap_inner(0.01).build().unwrap_err();
        assert_eq!(
            err,
            ConfigError::PositivePenalty {
                field: "penalty_gap_inner",
                value: 0.01
            }
        );
    }

    #[test]
    fn negative_bonus_rejected() {
        let err = Config::builder().bonus_dot(-0.1).build().unwrap_err();
        assert!(matches!(err, ConfigError::NegativeBonus { field: "bonus_dot", .. }));
    }

    #[test]
    fn non_finite_weight_rejected() {
        assert!(matches!(
            Config::builder().bonus_consecutive(f64::NAN).build(),
            Err(ConfigError::NotFinite { .. })
        ));
        assert!(matches!(
            Config::builder().penalty_gap_leading(SCORE_MIN).build(),
            Err(ConfigError::NotFinite { .. })
        ));
    }

    #[test]
    fn zero_max_length_rejected() {
        assert_eq!(
            Config::builder().max_length(0).build().unwrap_err(),
            ConfigError::ZeroMaxLength
        );
    }

    #[test]
    fn hand_built_config_can_be_invalid() {
        let config = Config {
            bonus_slash: SCORE_MAX,
            ..Config::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn derived_bounds() {
        let config = Config::default();
        assert_eq!(config.score_floor(), 1024.0 * -0.01);
        assert_eq!(config.score_ceiling(), 1024.0);
        assert!(config.score_floor() > SCORE_MIN);
        assert!(config.score_ceiling() < SCORE_MAX);
    }
}
