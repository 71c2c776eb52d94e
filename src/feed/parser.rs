//! Streaming RSS decode.
//!
//! Decodes an `rss > channel > item*` document into a [`Feed`] with a
//! `quick-xml` event loop. The schema is permissive: unknown elements are
//! skipped and missing optional elements become empty strings. Structural
//! breakage is not: a truncated stream, a mismatched tag, a non-`rss`
//! root, or an unknown entity reference all fail the whole decode rather
//! than returning a partially populated feed.
//!
//! XXE safety: quick-xml (0.37) never parses `<!ENTITY>` declarations
//! from DOCTYPE. Entity resolution only covers the five XML builtins;
//! anything else is an unescape error, which we surface as malformed.

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

/// Errors from decoding a feed document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML-level syntax or encoding failure, including unknown entities.
    #[error("XML syntax error: {0}")]
    Xml(String),

    /// The stream ended while elements were still open.
    #[error("unexpected end of document")]
    Truncated,

    /// The document root is not `<rss>`.
    #[error("document root is not <rss>")]
    NotRss,

    /// The `<rss>` element contains no `<channel>`.
    #[error("missing <channel> element")]
    MissingChannel,
}

/// A parsed RSS channel. Built fresh per fetch, discarded after display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    pub title: String,
    pub description: String,
    pub link: String,
    /// Items in document order.
    pub items: Vec<Item>,
}

/// A single `<item>` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    pub link: String,
    /// May still contain inline markup or CDATA text; cleaned at display
    /// time, not here.
    pub description: String,
    /// Free-form date string, passed through verbatim.
    pub pub_date: String,
}

/// The leaf elements we collect, shared between channel and item scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
    Description,
    PubDate,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Self::Title),
            b"link" => Some(Self::Link),
            b"description" => Some(Self::Description),
            b"pubDate" => Some(Self::PubDate),
            _ => None,
        }
    }
}

/// Decodes one RSS document from raw bytes.
pub fn parse_feed(bytes: &[u8]) -> Result<Feed, ParseError> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut feed = Feed::default();
    // Open-element path; non-empty at EOF means the stream was cut short.
    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut saw_rss = false;
    let mut saw_channel = false;
    let mut item: Option<Item> = None;
    // Leaf currently being collected, and the path depth it was opened at.
    // Nested markup inside a leaf (rare, but legal) keeps accumulating
    // text until the leaf itself closes.
    let mut field: Option<(Field, usize)> = None;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.name().as_ref().to_vec();
                let opened = classify_start(
                    &name,
                    &path,
                    &mut saw_rss,
                    &mut saw_channel,
                    &mut item,
                    &mut text,
                )?;
                path.push(name);
                if field.is_none() {
                    if let Some(f) = opened {
                        field = Some((f, path.len()));
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                let name = e.name().into_inner();
                if path.is_empty() {
                    if name != b"rss" {
                        return Err(ParseError::NotRss);
                    }
                    saw_rss = true;
                } else if name == b"item" && in_channel(&path) {
                    feed.items.push(Item::default());
                }
                // A self-closing leaf contributes its default empty string.
            }
            Ok(Event::End(_)) => {
                // quick-xml rejects mismatched end tags before we get here.
                path.pop();
                if let Some((f, depth)) = field {
                    if path.len() < depth {
                        commit_field(f, std::mem::take(&mut text), &mut feed, &mut item);
                        field = None;
                    }
                }
                if item.is_some() && in_channel(&path) {
                    // Closed the </item> itself.
                    if let Some(done) = item.take() {
                        feed.items.push(done);
                    }
                }
            }
            Ok(Event::Text(t)) => {
                if field.is_some() {
                    let decoded = t.unescape().map_err(|e| ParseError::Xml(e.to_string()))?;
                    text.push_str(&decoded);
                }
            }
            Ok(Event::CData(t)) => {
                if field.is_some() {
                    let raw = t.into_inner();
                    let decoded = reader
                        .decoder()
                        .decode(&raw)
                        .map_err(|e| ParseError::Xml(e.to_string()))?;
                    text.push_str(&decoded);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // declaration, comments, processing instructions
            Err(e) => return Err(ParseError::Xml(e.to_string())),
        }
        buf.clear();
    }

    if !path.is_empty() {
        return Err(ParseError::Truncated);
    }
    if !saw_rss {
        return Err(ParseError::NotRss);
    }
    if !saw_channel {
        return Err(ParseError::MissingChannel);
    }

    Ok(feed)
}

/// True when the open path is exactly `rss > channel`.
fn in_channel(path: &[Vec<u8>]) -> bool {
    path.len() == 2 && path[0] == b"rss" && path[1] == b"channel"
}

/// Validates a start tag against its position and reports which leaf, if
/// any, it opens. The caller pushes the element onto the path afterwards.
fn classify_start(
    name: &[u8],
    path: &[Vec<u8>],
    saw_rss: &mut bool,
    saw_channel: &mut bool,
    item: &mut Option<Item>,
    text: &mut String,
) -> Result<Option<Field>, ParseError> {
    if path.is_empty() {
        if name != b"rss" {
            return Err(ParseError::NotRss);
        }
        *saw_rss = true;
        return Ok(None);
    }

    if path.len() == 1 && path[0] == b"rss" && name == b"channel" {
        *saw_channel = true;
        return Ok(None);
    }

    if in_channel(path) {
        if name == b"item" {
            *item = Some(Item::default());
            return Ok(None);
        }
        if item.is_none() {
            if let Some(f) = Field::from_name(name) {
                text.clear();
                return Ok(Some(f));
            }
        }
        return Ok(None);
    }

    // Directly inside an <item>.
    if path.len() == 3 && item.is_some() {
        if let Some(f) = Field::from_name(name) {
            text.clear();
            return Ok(Some(f));
        }
    }

    Ok(None)
}

fn commit_field(f: Field, value: String, feed: &mut Feed, item: &mut Option<Item>) {
    if let Some(it) = item.as_mut() {
        match f {
            Field::Title => it.title = value,
            Field::Link => it.link = value,
            Field::Description => it.description = value,
            Field::PubDate => it.pub_date = value,
        }
    } else {
        match f {
            Field::Title => feed.title = value,
            Field::Link => feed.link = value,
            Field::Description => feed.description = value,
            // A channel-level <pubDate> exists in the wild; nothing in the
            // display uses it, so it is read and dropped.
            Field::PubDate => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Test Feed</title>
    <link>https://example.com</link>
    <description>Channel description</description>
    <item>
      <title>Item 1</title>
      <link>https://example.com/1</link>
      <description>&lt;p&gt;First &amp;amp; foremost&lt;/p&gt;</description>
      <pubDate>Mon, 06 Jan 2025 10:00:00 +0100</pubDate>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parses_channel_and_items() {
        let feed = parse_feed(FEED.as_bytes()).unwrap();
        assert_eq!(feed.title, "Test Feed");
        assert_eq!(feed.link, "https://example.com");
        assert_eq!(feed.description, "Channel description");
        assert_eq!(feed.items.len(), 1);

        let item = &feed.items[0];
        assert_eq!(item.title, "Item 1");
        assert_eq!(item.link, "https://example.com/1");
        // XML unescape happens here; HTML cleanup happens at display time.
        assert_eq!(item.description, "<p>First &amp; foremost</p>");
        assert_eq!(item.pub_date, "Mon, 06 Jan 2025 10:00:00 +0100");
    }

    #[test]
    fn test_items_preserve_document_order() {
        let xml = r#"<rss><channel>
            <title>Ordered</title>
            <item><title>first</title></item>
            <item><title>second</title></item>
            <item><title>third</title></item>
        </channel></rss>"#;
        let feed = parse_feed(xml.as_bytes()).unwrap();
        let titles: Vec<&str> = feed.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_missing_optional_fields_are_empty() {
        let xml = "<rss><channel><item><title>bare</title></item></channel></rss>";
        let feed = parse_feed(xml.as_bytes()).unwrap();
        assert_eq!(feed.title, "");
        assert_eq!(feed.items[0].link, "");
        assert_eq!(feed.items[0].description, "");
        assert_eq!(feed.items[0].pub_date, "");
    }

    #[test]
    fn test_empty_channel_is_a_valid_feed() {
        let feed = parse_feed(b"<rss><channel></channel></rss>").unwrap();
        assert!(feed.items.is_empty());
        assert_eq!(feed.title, "");
    }

    #[test]
    fn test_cdata_description_is_kept_raw() {
        let xml = r#"<rss><channel><item>
            <description><![CDATA[<b>bold</b> move]]></description>
        </item></channel></rss>"#;
        let feed = parse_feed(xml.as_bytes()).unwrap();
        assert_eq!(feed.items[0].description, "<b>bold</b> move");
    }

    #[test]
    fn test_unknown_elements_are_skipped() {
        let xml = r#"<rss><channel>
            <title>Known</title>
            <language>it-it</language>
            <item><title>x</title><guid>abc</guid></item>
        </channel></rss>"#;
        let feed = parse_feed(xml.as_bytes()).unwrap();
        assert_eq!(feed.title, "Known");
        assert_eq!(feed.items.len(), 1);
    }

    #[test]
    fn test_self_closing_item_is_an_empty_item() {
        let feed = parse_feed(b"<rss><channel><item/></channel></rss>").unwrap();
        assert_eq!(feed.items.len(), 1);
        assert_eq!(feed.items[0], Item::default());
    }

    #[test]
    fn test_truncated_document_is_structural_error() {
        let err = parse_feed(b"<rss><channel><title>").unwrap_err();
        assert!(
            matches!(err, ParseError::Truncated | ParseError::Xml(_)),
            "expected structural error, got {err:?}"
        );
    }

    #[test]
    fn test_wrong_root_is_rejected() {
        let err = parse_feed(b"<html><body/></html>").unwrap_err();
        assert!(matches!(err, ParseError::NotRss));
    }

    #[test]
    fn test_rss_without_channel_is_rejected() {
        let err = parse_feed(b"<rss version=\"2.0\"></rss>").unwrap_err();
        assert!(matches!(err, ParseError::MissingChannel));
    }

    #[test]
    fn test_garbage_input_is_rejected() {
        assert!(parse_feed(b"not xml at all").is_err());
        assert!(parse_feed(b"").is_err());
    }
}
