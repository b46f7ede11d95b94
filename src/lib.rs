//! Torrent RSS feed ingestion and pattern matching.
//!
//! This crate turns syndication-feed documents into a normalized list of
//! downloadable items, and provides a small regex facility used to filter
//! those items and to pull structured fields (filenames, status strings)
//! out of free-form text such as HTTP response headers or RPC payloads.
//!
//! # Architecture
//!
//! - [`feed`] - Feed document parsing and item extraction
//! - [`pattern`] - Regex matching and capture-group extraction
//! - [`state`] - Process-wide poll-interval and sizing-hint latches
//!
//! # Example
//!
//! ```
//! use torrfeed::feed::ingest;
//! use torrfeed::pattern;
//!
//! let doc = br#"<?xml version="1.0"?>
//! <rss version="2.0"><channel>
//!   <item>
//!     <title>Example Release</title>
//!     <enclosure url="https://example.com/release.torrent"
//!                type="application/x-bittorrent"/>
//!   </item>
//! </channel></rss>"#;
//!
//! let items = ingest(doc).unwrap();
//! assert_eq!(items.len(), 1);
//! assert!(pattern::is_match("Example.*", &items[0].name));
//! ```

pub mod feed;
pub mod pattern;
pub mod state;

pub use feed::{ingest, FeedItem, ParseError};
