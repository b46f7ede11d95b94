//! The tree-query boundary over feed documents.
//!
//! Item extraction never touches a serialized document or a concrete XML
//! library directly. [`FeedTree`] parses raw bytes and answers a minimal
//! descendant-path query, and [`TreeNode`] is the narrow capability
//! surface (name, text content, attributes, children) the extractor
//! walks. Tests can substitute fake nodes for the roxmltree-backed
//! [`XmlNode`].

use thiserror::Error;

/// Errors produced while turning document bytes into a node set.
///
/// The two variants are deliberately distinct: a document that cannot be
/// parsed is malformed *input*, while a query that cannot be evaluated
/// against a successfully parsed tree is a *collaborator* failure.
/// Neither is retriable by this crate; retry policy belongs to the
/// caller's scheduler.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The bytes could not be parsed into a document tree.
    #[error("malformed feed document: {0}")]
    MalformedDocument(String),
    /// The node-set query could not be evaluated against the parsed tree.
    #[error("query evaluation failed: {0}")]
    QueryFailure(String),
}

/// Read-only view of one node in a parsed feed document.
///
/// This is all the extractor is allowed to see: enough to walk an item
/// element's immediate children and read text content and attributes,
/// nothing tied to a concrete tree representation.
pub trait TreeNode {
    /// Whether this node is an element (as opposed to text, comment, etc.).
    fn is_element(&self) -> bool;

    /// The node's local name, ignoring any namespace prefix.
    fn name(&self) -> &str;

    /// Whether the node has any child nodes at all, text included.
    fn has_children(&self) -> bool;

    /// The node's immediate children in document order.
    fn children(&self) -> Vec<Self>
    where
        Self: Sized;

    /// The node's text content: every descendant text node concatenated
    /// in document order. `None` when the node has no children to take
    /// content from, which callers treat as an extraction failure.
    fn text(&self) -> Option<String>;

    /// The value of the named attribute, if present.
    fn attribute(&self, name: &str) -> Option<&str>;
}

/// A node in a [`FeedTree`], backed by roxmltree.
#[derive(Debug, Clone, Copy)]
pub struct XmlNode<'a, 'input>(roxmltree::Node<'a, 'input>);

impl TreeNode for XmlNode<'_, '_> {
    fn is_element(&self) -> bool {
        self.0.is_element()
    }

    fn name(&self) -> &str {
        self.0.tag_name().name()
    }

    fn has_children(&self) -> bool {
        self.0.first_child().is_some()
    }

    fn children(&self) -> Vec<Self> {
        self.0.children().map(XmlNode).collect()
    }

    fn text(&self) -> Option<String> {
        if self.0.first_child().is_none() {
            return None;
        }
        let mut content = String::new();
        for descendant in self.0.descendants() {
            if descendant.is_text() {
                content.push_str(descendant.text().unwrap_or(""));
            }
        }
        Some(content)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.0.attribute(name)
    }
}

/// A parsed feed document that can answer node-set queries.
///
/// Borrows the input bytes for its lifetime; callers keep the raw
/// document alive for the duration of one ingestion, which matches the
/// single-document, run-to-completion processing model.
#[derive(Debug)]
pub struct FeedTree<'input> {
    doc: roxmltree::Document<'input>,
}

impl<'input> FeedTree<'input> {
    /// Parses raw document bytes into a queryable tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedDocument`] if the bytes are not
    /// valid UTF-8 or not well-formed XML.
    pub fn parse(bytes: &'input [u8]) -> Result<Self, ParseError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ParseError::MalformedDocument(e.to_string()))?;
        let doc = roxmltree::Document::parse(text)
            .map_err(|e| ParseError::MalformedDocument(e.to_string()))?;
        Ok(Self { doc })
    }

    /// Evaluates a descendant-path expression and returns the matching
    /// node set in document order.
    ///
    /// Supported expressions are of the form `//name` or
    /// `//name/child/...`: the first segment selects every element with
    /// that name anywhere in the document, and each further segment
    /// narrows to immediate children. This covers the two expressions
    /// feed ingestion needs (`//item`, `//channel/ttl`) without pulling
    /// in a full XPath engine.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::QueryFailure`] for an expression this
    /// evaluator cannot handle: missing `//` prefix, or an empty
    /// segment.
    pub fn query(&self, path: &str) -> Result<Vec<XmlNode<'_, 'input>>, ParseError> {
        let rest = path.strip_prefix("//").ok_or_else(|| {
            ParseError::QueryFailure(format!("unsupported path expression \"{path}\""))
        })?;
        let segments: Vec<&str> = rest.split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(ParseError::QueryFailure(format!(
                "empty segment in path expression \"{path}\""
            )));
        }

        let mut matched: Vec<roxmltree::Node<'_, 'input>> = self
            .doc
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == segments[0])
            .collect();

        for segment in &segments[1..] {
            matched = matched
                .iter()
                .flat_map(|n| {
                    n.children()
                        .filter(|c| c.is_element() && c.tag_name().name() == *segment)
                })
                .collect();
        }

        Ok(matched.into_iter().map(XmlNode).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0"?>
<rss version="2.0"><channel>
    <ttl>60</ttl>
    <item><title>One</title></item>
    <item><title>Two</title></item>
</channel></rss>"#;

    #[test]
    fn test_parse_rejects_invalid_xml() {
        let err = FeedTree::parse(b"<not valid xml").unwrap_err();
        assert!(matches!(err, ParseError::MalformedDocument(_)));
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        let err = FeedTree::parse(b"<rss>\xff\xfe</rss>").unwrap_err();
        assert!(matches!(err, ParseError::MalformedDocument(_)));
    }

    #[test]
    fn test_query_descendant_elements() {
        let tree = FeedTree::parse(FEED.as_bytes()).unwrap();
        let items = tree.query("//item").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name(), "item");
    }

    #[test]
    fn test_query_child_segment() {
        let tree = FeedTree::parse(FEED.as_bytes()).unwrap();
        let ttl = tree.query("//channel/ttl").unwrap();
        assert_eq!(ttl.len(), 1);
        assert_eq!(ttl[0].text().as_deref(), Some("60"));
    }

    #[test]
    fn test_query_no_matches_is_empty_not_error() {
        let tree = FeedTree::parse(FEED.as_bytes()).unwrap();
        assert!(tree.query("//missing").unwrap().is_empty());
    }

    #[test]
    fn test_query_rejects_unsupported_expressions() {
        let tree = FeedTree::parse(FEED.as_bytes()).unwrap();
        assert!(matches!(
            tree.query("item").unwrap_err(),
            ParseError::QueryFailure(_)
        ));
        assert!(matches!(
            tree.query("//channel//ttl").unwrap_err(),
            ParseError::QueryFailure(_)
        ));
        assert!(matches!(
            tree.query("").unwrap_err(),
            ParseError::QueryFailure(_)
        ));
    }

    #[test]
    fn test_text_of_empty_element_is_none() {
        let tree = FeedTree::parse(b"<rss><item><title/></item></rss>").unwrap();
        let titles = tree.query("//title").unwrap();
        assert_eq!(titles[0].text(), None);
    }

    #[test]
    fn test_text_concatenates_nested_content() {
        let tree =
            FeedTree::parse(b"<rss><title>A <b>nested</b> title</title></rss>").unwrap();
        let titles = tree.query("//title").unwrap();
        assert_eq!(titles[0].text().as_deref(), Some("A nested title"));
    }

    #[test]
    fn test_attribute_lookup() {
        let tree = FeedTree::parse(
            br#"<rss><enclosure url="https://example.com/a.torrent" type="application/x-bittorrent"/></rss>"#,
        )
        .unwrap();
        let nodes = tree.query("//enclosure").unwrap();
        assert_eq!(
            nodes[0].attribute("url"),
            Some("https://example.com/a.torrent")
        );
        assert_eq!(nodes[0].attribute("length"), None);
    }
}
