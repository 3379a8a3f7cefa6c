//! Byte/char helpers

use memchr::memchr;

/// A single character unit of a needle or haystack.
///
/// Implemented for `u8` (ASCII fast path) and `char` (Unicode scalar
/// fallback). Matching operates on one atom at a time; multi-code-point
/// graphemes are out of scope.
pub(super) trait Atom: PartialEq + Into<char> + Copy {
    #[inline(always)]
    fn eq(self, other: Self, case_sensitive: bool) -> bool
    where
        Self: PartialEq + Sized,
    {
        if case_sensitive {
            self == other
        } else {
            self.eq_ignore_case(other)
        }
    }
    fn eq_ignore_case(self, other: Self) -> bool;
    fn is_lowercase(self) -> bool;
    fn is_uppercase(self) -> bool;

    /// Return the index of the first occurrence of `self` in `haystack`,
    /// or `None` if not found.
    ///
    /// Implementations may override this with a SIMD-backed search (e.g.
    /// `memchr` for `u8`).
    #[inline]
    fn find_first_in(self, haystack: &[Self], case_sensitive: bool) -> Option<usize> {
        haystack.iter().position(|&c| self.eq(c, case_sensitive))
    }

    /// True for `/` and `\` — path component boundaries.
    #[inline(always)]
    fn is_path_separator(self) -> bool {
        matches!(self.into(), '/' | '\\')
    }

    /// True for `-`, `_` and space — sub-word boundaries.
    #[inline(always)]
    fn is_word_separator(self) -> bool {
        matches!(self.into(), '-' | '_' | ' ')
    }

    #[inline(always)]
    fn is_dot(self) -> bool {
        self.into() == '.'
    }
}

impl Atom for u8 {
    #[inline(always)]
    fn eq_ignore_case(self, b: Self) -> bool {
        self.eq_ignore_ascii_case(&b)
    }
    #[inline(always)]
    fn is_lowercase(self) -> bool {
        self.is_ascii_lowercase()
    }
    #[inline(always)]
    fn is_uppercase(self) -> bool {
        self.is_ascii_uppercase()
    }

    /// Case-sensitive search uses SIMD-backed `memchr`; case-insensitive
    /// runs one `memchr` per case variant and keeps the earliest hit.
    #[inline]
    fn find_first_in(self, haystack: &[Self], case_sensitive: bool) -> Option<usize> {
        if case_sensitive {
            memchr(self, haystack)
        } else {
            let lo = self.to_ascii_lowercase();
            let hi = self.to_ascii_uppercase();
            if lo == hi {
                // No case distinction for this byte (digit, symbol, etc.).
                memchr(lo, haystack)
            } else {
                match (memchr(lo, haystack), memchr(hi, haystack)) {
                    (None, x) | (x, None) => x,
                    (Some(a), Some(b)) => Some(a.min(b)),
                }
            }
        }
    }
}

impl Atom for char {
    #[inline(always)]
    fn eq_ignore_case(self, b: Self) -> bool {
        self.to_lowercase().eq(b.to_lowercase())
    }
    // Bonus classification stays ASCII-only even on the char path, so both
    // paths agree on what counts as a camelCase transition.
    #[inline(always)]
    fn is_lowercase(self) -> bool {
        self.is_ascii_lowercase()
    }
    #[inline(always)]
    fn is_uppercase(self) -> bool {
        self.is_ascii_uppercase()
    }
}
