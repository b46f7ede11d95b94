//! Integration tests for the full ingestion pipeline: document bytes in,
//! normalized items and latch side effects out.
//!
//! Each test creates its own `IngestState` for isolation; the
//! process-global state is left to the doc examples.

use pretty_assertions::assert_eq;
use torrfeed::feed::{ingest_with, FeedItem, ParseError, TORRENT_MIME};
use torrfeed::state::IngestState;

fn state() -> IngestState {
    IngestState::new(10)
}

fn feed_doc(body: &str) -> Vec<u8> {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel>{body}</channel></rss>"#
    )
    .into_bytes()
}

fn torrent_item(title: &str, url: &str) -> String {
    format!(
        r#"<item><title>{title}</title><enclosure url="{url}" type="{TORRENT_MIME}"/></item>"#
    )
}

fn link_item(title: &str, url: &str) -> String {
    format!(r#"<item><title>{title}</title><link>{url}</link></item>"#)
}

// ============================================================================
// Document-level error handling
// ============================================================================

#[test]
fn test_malformed_document_is_an_error() {
    let err = ingest_with(b"<rss><channel>", &state()).unwrap_err();
    assert!(matches!(err, ParseError::MalformedDocument(_)));
}

#[test]
fn test_empty_channel_is_success_not_error() {
    let items = ingest_with(&feed_doc(""), &state()).unwrap();
    assert_eq!(items, Vec::new());
}

// ============================================================================
// Item extraction through a real document
// ============================================================================

#[test]
fn test_torrent_feed_items_extracted_in_order() {
    let body = [
        torrent_item("First", "https://example.com/1.torrent"),
        torrent_item("Second", "https://example.com/2.torrent"),
    ]
    .concat();

    let items = ingest_with(&feed_doc(&body), &state()).unwrap();
    assert_eq!(
        items,
        vec![
            FeedItem {
                name: "First".into(),
                url: "https://example.com/1.torrent".into(),
            },
            FeedItem {
                name: "Second".into(),
                url: "https://example.com/2.torrent".into(),
            },
        ]
    );
}

#[test]
fn test_link_item_accepted_after_torrent_classification() {
    // The link-only item rides on the feed-level torrent flag raised by
    // the enclosure item before it.
    let body = [
        torrent_item("Seed", "https://example.com/seed.torrent"),
        link_item("Tail", "https://example.com/tail"),
    ]
    .concat();

    let items = ingest_with(&feed_doc(&body), &state()).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].url, "https://example.com/tail");
}

#[test]
fn test_link_only_feed_yields_nothing() {
    let body = [
        link_item("A", "https://example.com/a"),
        link_item("B", "https://example.com/b"),
    ]
    .concat();

    let items = ingest_with(&feed_doc(&body), &state()).unwrap();
    assert_eq!(items, Vec::new());
}

#[test]
fn test_item_missing_title_is_dropped() {
    let body = format!(
        r#"<item><enclosure url="https://example.com/a.torrent" type="{TORRENT_MIME}"/></item>"#
    );
    let items = ingest_with(&feed_doc(&body), &state()).unwrap();
    assert_eq!(items, Vec::new());
}

#[test]
fn test_non_ascii_titles_survive_extraction() {
    let body = torrent_item("Ädy – テスト", "https://example.com/a.torrent");
    let items = ingest_with(&feed_doc(&body), &state()).unwrap();
    assert_eq!(items[0].name, "Ädy – テスト");
}

// ============================================================================
// Latch side effects
// ============================================================================

#[test]
fn test_ttl_latch_is_one_shot_across_documents() {
    let s = state();

    ingest_with(&feed_doc("<ttl>45</ttl>"), &s).unwrap();
    assert_eq!(s.poll_interval(), 45);

    ingest_with(&feed_doc("<ttl>500</ttl>"), &s).unwrap();
    assert_eq!(s.poll_interval(), 45);
}

#[test]
fn test_sizing_hint_uses_first_bounded_item_count() {
    let s = state();

    // First document has no items: no hint.
    ingest_with(&feed_doc(""), &s).unwrap();
    assert_eq!(s.bucket_size(), None);

    // Second document applies its count, third is ignored.
    let two = [
        torrent_item("A", "https://example.com/a.torrent"),
        torrent_item("B", "https://example.com/b.torrent"),
    ]
    .concat();
    ingest_with(&feed_doc(&two), &s).unwrap();
    assert_eq!(s.bucket_size(), Some(2));

    let one = torrent_item("C", "https://example.com/c.torrent");
    ingest_with(&feed_doc(&one), &s).unwrap();
    assert_eq!(s.bucket_size(), Some(2));
}

#[test]
fn test_sizing_hint_skips_unbounded_item_counts() {
    let s = state();

    let body: String = (0..300)
        .map(|i| torrent_item(&format!("Item {i}"), &format!("https://example.com/{i}.torrent")))
        .collect();
    let items = ingest_with(&feed_doc(&body), &s).unwrap();

    assert_eq!(items.len(), 300);
    // 300 >= 256: not a usable hint, latch stays open.
    assert_eq!(s.bucket_size(), None);

    let one = torrent_item("A", "https://example.com/a.torrent");
    ingest_with(&feed_doc(&one), &s).unwrap();
    assert_eq!(s.bucket_size(), Some(1));
}

#[test]
fn test_item_count_includes_items_that_get_dropped() {
    // The sizing hint reflects the node-set size, not the accepted
    // item count.
    let s = state();
    let body = [
        link_item("A", "https://example.com/a"),
        link_item("B", "https://example.com/b"),
        link_item("C", "https://example.com/c"),
    ]
    .concat();

    let items = ingest_with(&feed_doc(&body), &s).unwrap();
    assert_eq!(items, Vec::new());
    assert_eq!(s.bucket_size(), Some(3));
}
