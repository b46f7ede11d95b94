//! Regex matching and capture-group extraction.
//!
//! Used against item titles to filter feeds, and against free-form text
//! (HTTP response headers, download-client RPC payloads) to pull out
//! structured fields. The operations are pure functions of their inputs:
//! patterns are compiled fresh per call so no hidden compilation state
//! can leak between unrelated calls, and identical inputs always yield
//! identical results.
//!
//! Patterns use the `regex` crate's syntax (alternation, grouping,
//! character classes, quantifiers, anchors) plus one extension: a
//! negative-lookahead *prefix* of the form `(?!SUBEXPR)REST`, which
//! matches iff `SUBEXPR` matches nowhere in the text and `REST` does.
//!
//! An absent or empty pattern or text is a definite non-match, never an
//! error; so is a pattern that fails to compile (logged at warn).

mod compile;
mod extractor;
mod matcher;

pub use extractor::{capture, filename_from_disposition, rpc_result};
pub use matcher::{is_match, matches_any};
