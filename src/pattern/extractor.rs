//! Capture-group extraction from free text.

use crate::pattern::compile::compile;

/// Canonical pattern for pulling a filename out of a
/// `Content-Disposition` response header, quoted or not. The filename is
/// capture group 2 (group 1 is the disposition type).
const DISPOSITION_PATTERN: &str =
    "Content-Disposition:\\s(inline|attachment);\\s*filename=\"?(.+?)\"?;?\\r?\\n?$";

/// Pattern for the `"result"` status string in a download-client RPC
/// response body.
const RPC_RESULT_PATTERN: &str = "\"result\":\\s*\"(.+?)\"";

/// Runs `pattern` against `text` and returns the content of capture
/// group `group`.
///
/// # Arguments
///
/// * `pattern` - The pattern, in `regex` syntax plus the optional
///   `(?!...)` prefix described in the [module docs](crate::pattern)
/// * `text` - The text to search
/// * `group` - 1-based capture-group index; group 0 (the whole match)
///   is not a valid request
///
/// # Returns
///
/// An owned copy of exactly the requested group's substring, or `None`
/// when the pattern or text is empty, the pattern fails to compile or
/// does not match, or `group` is 0 or exceeds the pattern's
/// capture-group count. Identical inputs always yield identical output;
/// there is no compilation cache to leak state between calls.
///
/// # Examples
///
/// ```
/// use torrfeed::pattern::capture;
///
/// let header = "Content-Disposition: inline; filename=\"a.torrent\"";
/// let pattern = "filename=\"?(.+?)\"?$";
/// assert_eq!(capture(pattern, header, 1).as_deref(), Some("a.torrent"));
/// assert_eq!(capture(pattern, header, 2), None);
/// ```
pub fn capture(pattern: &str, text: &str, group: usize) -> Option<String> {
    if pattern.is_empty() || text.is_empty() {
        return None;
    }
    let compiled = match compile(pattern) {
        Ok(compiled) => compiled,
        Err(e) => {
            tracing::warn!(pattern = pattern, error = %e, "pattern failed to compile");
            return None;
        }
    };
    compiled.capture(text, group)
}

/// Extracts the filename from a `Content-Disposition` header line, e.g.
/// the name a tracker suggests for a fetched `.torrent` file.
pub fn filename_from_disposition(header_text: &str) -> Option<String> {
    capture(DISPOSITION_PATTERN, header_text, 2)
}

/// Extracts the `"result"` status string from a download-client RPC
/// response payload (`"success"`, `"duplicate torrent"`, ...).
pub fn rpc_result(payload: &str) -> Option<String> {
    capture(RPC_RESULT_PATTERN, payload, 1)
}
