//! Pure formatting of the menu and fetched feeds.
//!
//! Everything here writes to an injected `io::Write`, so tests can render
//! into a buffer and assert on the exact output. No reordering, filtering,
//! or deduplication of items; publish dates are printed verbatim.

use std::io::{self, Write};

use crate::categories::CATEGORIES;
use crate::feed::Feed;
use crate::sanitize::Sanitizer;

/// Separator printed after each item.
const SEPARATOR_WIDTH: usize = 80;

/// Prints the category menu and the selection prompt.
///
/// The prompt line is not newline-terminated; the caller flushes before
/// reading input.
pub fn render_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Adnkronos RSS Reader")?;
    writeln!(out, "0: Exit")?;
    for category in &CATEGORIES {
        writeln!(out, "{}: {}", category.id, category.name)?;
    }
    write!(out, "\nSelect category number: ")?;
    Ok(())
}

/// Prints channel metadata followed by every item in document order.
///
/// Item descriptions are cleaned for the terminal here; every other field
/// is printed as parsed.
pub fn render_feed(feed: &Feed, sanitizer: &Sanitizer, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nTitle: {}", feed.title)?;
    writeln!(out, "Link: {}", feed.link)?;
    writeln!(out, "Description: {}\n", feed.description)?;

    for item in &feed.items {
        writeln!(out, "Title: {}", item.title)?;
        writeln!(out, "Link: {}", item.link)?;
        writeln!(out, "Description: {}", sanitizer.clean(&item.description))?;
        writeln!(out, "Published: {}\n", item.pub_date)?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    }

    Ok(())
}
