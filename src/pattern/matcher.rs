//! Boolean pattern matching against free text.

use crate::pattern::compile::compile;

/// Tests whether `pattern` matches anywhere in `text`.
///
/// Search semantics: the pattern is not anchored unless it anchors
/// itself with `^`/`$`. Correct for multi-byte text; a pattern made of
/// the literal content of a string matches that identical string.
///
/// # Arguments
///
/// * `pattern` - The pattern, in `regex` syntax plus the optional
///   `(?!...)` prefix described in the [module docs](crate::pattern)
/// * `text` - The text to search
///
/// # Returns
///
/// `false` for an empty pattern or empty text (absence is a definite
/// non-match, not an error), for a pattern that fails to compile, and
/// for a non-match; `true` otherwise.
///
/// # Examples
///
/// ```
/// use torrfeed::pattern::is_match;
///
/// assert!(is_match("(a|b)c", "abc"));
/// assert!(!is_match("(a|b)c", "adc"));
/// assert!(!is_match("(?!.*abc)def.*", "def abc"));
/// assert!(is_match("(?!.*abc)def.*", "def ghi"));
/// ```
pub fn is_match(pattern: &str, text: &str) -> bool {
    if pattern.is_empty() || text.is_empty() {
        return false;
    }
    let compiled = match compile(pattern) {
        Ok(compiled) => compiled,
        Err(e) => {
            tracing::warn!(pattern = pattern, error = %e, "pattern failed to compile");
            return false;
        }
    };
    compiled.is_match(text)
}

/// Tests `text` against a list of patterns, returning whether any
/// matches. Used to run an item title through a feed's filter list;
/// invalid patterns in the list are logged and count as non-matches.
pub fn matches_any<S: AsRef<str>>(text: &str, patterns: &[S]) -> bool {
    patterns.iter().any(|p| is_match(p.as_ref(), text))
}
