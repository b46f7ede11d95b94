//! Feed ingestion: turning a syndication-feed document into normalized
//! downloadable items.
//!
//! This module provides the core pipeline for working with torrent RSS
//! feeds:
//!
//! - **Tree boundary**: A narrow query surface over the XML document
//!   (node-set lookup, text content, attributes)
//! - **Extraction**: Per-item precedence rules between `<link>` and
//!   torrent `<enclosure>` URLs, plus feed-level torrent classification
//! - **Ingestion**: Orchestration, including the one-shot TTL and
//!   sizing-hint latches in [`crate::state`]
//!
//! # Architecture
//!
//! The module is organized into three submodules:
//!
//! - [`tree`] - roxmltree-backed document parsing behind the [`TreeNode`]
//!   capability trait
//! - [`extract`] - item extraction over any [`TreeNode`] implementation
//! - [`ingest`] - document-level orchestration and latch side effects
//!
//! # Example
//!
//! ```ignore
//! let items = torrfeed::feed::ingest(&bytes)?;
//! for item in items {
//!     queue.push(item.name, item.url);
//! }
//! ```

mod extract;
mod ingest;
mod tree;

pub use extract::{extract_items, FeedItem, TORRENT_MIME};
pub use ingest::{ingest, ingest_with};
pub use tree::{FeedTree, ParseError, TreeNode, XmlNode};
