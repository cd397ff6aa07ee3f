//! Case mapping for single grapheme clusters
//!
//! Mapping a grapheme may change its length in code points ("İ" lowercases
//! to "i̇"), so results are returned as owned strings.

/// Lowercase a grapheme cluster
#[inline]
pub fn lowercase(grapheme: &str) -> String {
    grapheme.to_lowercase()
}

/// Uppercase a grapheme cluster
#[inline]
pub fn uppercase(grapheme: &str) -> String {
    grapheme.to_uppercase()
}

/// Fold a grapheme for comparison, honoring case sensitivity
#[inline]
pub(crate) fn fold(grapheme: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        grapheme.to_string()
    } else {
        lowercase(grapheme)
    }
}
