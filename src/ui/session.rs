//! The interactive read-eval-print loop.
//!
//! `Prompt → ReadSelection → {Terminate | Dispatch(category) → Fetch →
//! {Error → Prompt | Render → Prompt}}`. Nothing persists across
//! iterations except the client, the sanitizer, and the static category
//! table; every failure prints one message and control returns to the
//! prompt.

use std::io::{self, Write};

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::feed::FeedClient;
use crate::sanitize::Sanitizer;

use super::input::{parse_selection, Selection};
use super::render;

/// Runs the interactive session against stdin/stdout until the user
/// quits or the input stream closes.
pub async fn run(client: &FeedClient, sanitizer: &Sanitizer) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut out = io::stdout();
    run_session(stdin, &mut out, client, sanitizer).await
}

/// Loop body with injected streams so tests can drive it with canned
/// input and inspect the output.
async fn run_session<R>(
    input: R,
    out: &mut impl Write,
    client: &FeedClient,
    sanitizer: &Sanitizer,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    loop {
        render::render_menu(out)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            // Closed input stream is equivalent to quitting.
            writeln!(out)?;
            break;
        };

        match parse_selection(&line) {
            Ok(Selection::Quit) => break,
            Ok(Selection::Category(category)) => {
                tracing::debug!(category = category.name, url = category.url, "fetching feed");
                match client.fetch(category.url).await {
                    Ok(feed) => render::render_feed(&feed, sanitizer, out)?,
                    Err(e) => {
                        tracing::warn!(category = category.name, error = %e, "fetch failed");
                        writeln!(out, "Error: {e}")?;
                    }
                }
            }
            Err(e) => writeln!(out, "Error: {e}")?,
        }
    }

    Ok(())
}
