//! HTML cleanup for feed descriptions.
//!
//! Feed items carry descriptions with simple inline markup (`<p>`, `<b>`,
//! CDATA-wrapped snippets) and HTML entities. For terminal display we strip
//! the markup with a generic "anything between angle brackets" pattern and
//! decode entities to their literal characters.
//!
//! The pattern is a deliberate approximation, not an HTML parser: it does
//! not track quoting or nesting, so a `>` inside an attribute value will
//! cut a tag short. Feed snippets are simple enough that this never
//! matters in practice, and the contract stays lossy on purpose.

use regex::Regex;

/// Strips markup and decodes entities from feed text.
///
/// Holds the one precompiled tag pattern; build it once at startup and
/// share it by reference for the life of the process.
pub struct Sanitizer {
    tag: Regex,
}

impl Sanitizer {
    /// Compiles the tag pattern.
    ///
    /// The pattern is fixed and valid, but compilation is still surfaced
    /// as a result so the binary can fail cleanly at startup instead of
    /// panicking.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            tag: Regex::new(r"<[^>]*>")?,
        })
    }

    /// Cleans one description for display.
    ///
    /// Removes every `<...>` tag, rewrites `&nbsp;` to a plain space
    /// (decoding it would yield U+00A0, which renders confusingly in a
    /// terminal), decodes the remaining HTML entities, and trims the ends.
    ///
    /// Pure function of its input. Idempotent on text that is already
    /// free of tags and entities.
    pub fn clean(&self, text: &str) -> String {
        let stripped = self.tag.replace_all(text, "");
        let spaced = stripped.replace("&nbsp;", " ");
        html_escape::decode_html_entities(&spaced).trim().to_string()
    }
}
