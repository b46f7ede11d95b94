//! Item extraction over a feed-item node set.
//!
//! The rules here carry the precedence and classification behavior the
//! rest of the system depends on:
//!
//! - A torrent `<enclosure>` URL always wins over a `<link>` URL, even
//!   when the link came first. A link never overrides a URL that is
//!   already set.
//! - Torrent classification is *feed*-scoped: once any element in the
//!   batch contributes a torrent enclosure, every later element in the
//!   same call is treated as part of a torrent feed, even with no
//!   enclosure of its own. The acceptance of title+link-only items is
//!   therefore ordering-dependent, and deliberately so.
//!
//! Extraction never fails: unusable elements are dropped with a debug
//! diagnostic, because a feed with some malformed items is still a
//! valid feed.

use crate::feed::tree::TreeNode;

/// Media type that marks an enclosure as a torrent payload.
pub const TORRENT_MIME: &str = "application/x-bittorrent";

/// One downloadable entry extracted from a feed: a title and a resolved
/// URL. Both fields are required; partial items are never emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    /// The item's title.
    pub name: String,
    /// The download URL, taken from a torrent enclosure when present,
    /// otherwise from the item's link.
    pub url: String,
}

/// Alternate URL/media-type attachment on a feed item. Scoped to one
/// element's attribute scan, never persisted.
#[derive(Debug, Default)]
struct Enclosure {
    url: Option<String>,
    media_type: Option<String>,
}

fn read_enclosure<N: TreeNode>(node: &N) -> Enclosure {
    Enclosure {
        url: node.attribute("url").map(str::to_owned),
        // Some feeds label the media type "content" instead of "type".
        media_type: node
            .attribute("type")
            .or_else(|| node.attribute("content"))
            .map(str::to_owned),
    }
}

/// Extracts normalized items from a feed-item node set.
///
/// Walks each element's immediate children in document order, applying
/// the title/link/enclosure rules described in the module docs. An
/// element is accepted only when it has a title, a usable URL, and the
/// feed has been classified as a torrent feed by the time the element
/// is evaluated.
///
/// # Arguments
///
/// * `nodes` - The `<item>` node set, in document order
///
/// # Returns
///
/// The accepted items, in input order. An empty result is not an error;
/// drops are logged as diagnostics only.
pub fn extract_items<N: TreeNode>(nodes: &[N]) -> Vec<FeedItem> {
    let mut items = Vec::new();
    // Feed-scoped: never reset between elements. See module docs.
    let mut is_torrent_feed = false;

    for node in nodes {
        if !node.is_element() {
            tracing::warn!(name = node.name(), "skipping non-element node in item set");
            continue;
        }
        if !node.has_children() {
            continue;
        }

        let mut name: Option<String> = None;
        let mut url: Option<String> = None;
        let mut name_set = false;
        let mut url_set = false;

        for child in node.children() {
            if !child.is_element() {
                continue;
            }
            match child.name() {
                "title" => {
                    name = child.text();
                    name_set = name.is_some();
                }
                "link" => {
                    // An enclosure scanned before the link keeps precedence.
                    if !url_set {
                        url = child.text();
                        url_set = url.is_some();
                    }
                }
                "enclosure" => {
                    let enclosure = read_enclosure(&child);
                    if enclosure.media_type.as_deref() == Some(TORRENT_MIME) {
                        if let Some(enclosure_url) = enclosure.url {
                            // Torrent enclosure wins even over an
                            // already-set link URL.
                            url = Some(enclosure_url);
                            url_set = true;
                            is_torrent_feed = true;
                        }
                    }
                }
                _ => {}
            }
        }

        if name_set && url_set && is_torrent_feed {
            if let (Some(name), Some(url)) = (name, url) {
                items.push(FeedItem { name, url });
            }
        } else if !is_torrent_feed {
            tracing::debug!("dropping item: no torrent enclosure seen in this feed yet");
        } else {
            tracing::debug!(name_set, url_set, "dropping incomplete feed item");
        }
    }

    items
}
