//! Pattern compilation, including the negative-lookahead prefix split.

use regex::Regex;
use thiserror::Error;

/// Errors raised while compiling a user-supplied pattern. Callers treat
/// every variant as a non-match; the error exists for the diagnostic.
#[derive(Debug, Error)]
pub(crate) enum PatternError {
    #[error("invalid pattern: {0}")]
    Syntax(#[from] regex::Error),
    #[error("unterminated negative lookahead group")]
    UnterminatedLookahead,
}

/// A compiled pattern: an optional veto expression from a leading
/// `(?!...)` group, and the body expression that must match.
pub(crate) struct CompiledPattern {
    veto: Option<Regex>,
    body: Regex,
}

impl CompiledPattern {
    /// Search semantics: true iff the body matches anywhere in `text`
    /// and the veto expression (if any) matches nowhere.
    pub(crate) fn is_match(&self, text: &str) -> bool {
        if let Some(veto) = &self.veto {
            if veto.is_match(text) {
                return false;
            }
        }
        self.body.is_match(text)
    }

    /// The substring captured by group `group`, or `None` when the
    /// pattern does not match, the group did not participate, or the
    /// index is out of range. Group 0 (the whole match) is not a valid
    /// request.
    pub(crate) fn capture(&self, text: &str, group: usize) -> Option<String> {
        if let Some(veto) = &self.veto {
            if veto.is_match(text) {
                return None;
            }
        }
        if group == 0 || group >= self.body.captures_len() {
            return None;
        }
        let captures = self.body.captures(text)?;
        captures.get(group).map(|m| m.as_str().to_owned())
    }
}

/// Compiles `pattern`, splitting off a leading `(?!...)` negative
/// lookahead if present. Lookahead anywhere else in the pattern is not
/// supported and falls through to the regex engine (which rejects it).
pub(crate) fn compile(pattern: &str) -> Result<CompiledPattern, PatternError> {
    if let Some(rest) = pattern.strip_prefix("(?!") {
        let (veto, body) = split_lookahead(rest)?;
        return Ok(CompiledPattern {
            veto: Some(Regex::new(veto)?),
            body: Regex::new(body)?,
        });
    }
    Ok(CompiledPattern {
        veto: None,
        body: Regex::new(pattern)?,
    })
}

/// Splits `rest` (the pattern content after `(?!`) at the parenthesis
/// closing the lookahead group, honoring nesting and backslash escapes.
fn split_lookahead(rest: &str) -> Result<(&str, &str), PatternError> {
    let mut depth = 1usize;
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&rest[..i], &rest[i + 1..]));
                }
            }
            _ => {}
        }
    }
    Err(PatternError::UnterminatedLookahead)
}
