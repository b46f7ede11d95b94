//! Document-level feed ingestion.
//!
//! Orchestrates one pass over a feed document: parse the bytes, apply
//! the one-shot TTL and sizing-hint latches, and hand the item node set
//! to the extractor. Both latch updates are best-effort hints for the
//! surrounding scheduler and storage layer; they never affect whether
//! ingestion succeeds.

use crate::feed::extract::{extract_items, FeedItem};
use crate::feed::tree::{FeedTree, ParseError, TreeNode};
use crate::state::{self, IngestState};

const TTL_PATH: &str = "//channel/ttl";
const ITEM_PATH: &str = "//item";

/// Maximum item count still considered a usable sizing hint.
const MAX_BUCKET_HINT: usize = 256;

/// Ingests a feed document against the process-global latch state.
///
/// See [`ingest_with`] for the full contract.
pub fn ingest(bytes: &[u8]) -> Result<Vec<FeedItem>, ParseError> {
    ingest_with(bytes, state::global())
}

/// Ingests a feed document: parses the bytes and returns the normalized
/// item sequence.
///
/// # Arguments
///
/// * `bytes` - A complete syndication-feed document
/// * `state` - The latch state to apply TTL and sizing hints to
///
/// # Returns
///
/// The accepted items in document order. An empty sequence is success,
/// not an error.
///
/// # Errors
///
/// - [`ParseError::MalformedDocument`] if the bytes cannot be parsed
///   into a tree
/// - [`ParseError::QueryFailure`] if the item-path query cannot be
///   evaluated against the parsed tree
///
/// # Side effects
///
/// Exactly two pieces of shared state may change, each at most once per
/// `state` lifetime:
///
/// - The first usable `<ttl>` hint trips a latch and may raise the
///   minimum poll interval. Absence, a malformed value, or an
///   already-tripped latch are silently ignored.
/// - The first item-count in `1..256` is published as a sizing hint for
///   downstream storage.
pub fn ingest_with(bytes: &[u8], state: &IngestState) -> Result<Vec<FeedItem>, ParseError> {
    let tree = FeedTree::parse(bytes)?;

    if !state.ttl_latched() {
        // Best-effort: a TTL query failure is logged, never fatal.
        match tree.query(TTL_PATH) {
            Ok(nodes) => apply_ttl_hint(&nodes, state),
            Err(e) => tracing::warn!(error = %e, "unable to evaluate TTL query"),
        }
    }

    let nodes = tree.query(ITEM_PATH)?;

    let count = nodes.len();
    if count > 0 && count < MAX_BUCKET_HINT && state.suggest_bucket_size(count) {
        tracing::debug!(bucket_size = count, "sizing hint applied");
    }
    tracing::info!(count = count, "items in feed document");

    Ok(extract_items(&nodes))
}

/// Consumes a feed TTL hint when the node set holds exactly one element
/// with a usable value. Anything else leaves the latch open.
fn apply_ttl_hint<N: TreeNode>(nodes: &[N], state: &IngestState) {
    let [node] = nodes else { return };
    if !node.is_element() {
        return;
    }
    let Some(text) = node.text() else { return };
    let ttl = parse_leading_u64(&text);
    if ttl == 0 {
        return;
    }
    state.latch_ttl(ttl);
}

/// Parses the leading unsigned integer of `text`, skipping leading
/// whitespace and ignoring trailing garbage (`"60 min"` is 60). Returns
/// 0 when no digits lead the value, so malformed hints read as "no
/// hint".
fn parse_leading_u64(text: &str) -> u64 {
    let trimmed = text.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().unwrap_or(0)
}
