use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use edicola::categories;
use edicola::config::Config;
use edicola::feed::FeedClient;
use edicola::sanitize::Sanitizer;
use edicola::ui;

/// Get the config directory path (~/.config/edicola/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("edicola"))
}

#[derive(Parser, Debug)]
#[command(name = "edicola", about = "Terminal RSS reader for the Adnkronos news feeds")]
struct Args {
    /// Override the configured request timeout
    #[arg(long, value_name = "SECONDS")]
    timeout_secs: Option<u64>,

    /// Fetch a single category non-interactively and exit
    #[arg(long, value_name = "ID")]
    once: Option<u8>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so feed output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = get_config_dir()?.join("config.toml");
    let mut config = Config::load(&config_path).context("Failed to load configuration")?;
    if let Some(secs) = args.timeout_secs {
        config.request_timeout_secs = secs;
    }

    let client = FeedClient::new(&config).context("Failed to build HTTP client")?;
    let sanitizer = Sanitizer::new().context("Failed to compile tag pattern")?;

    if let Some(id) = args.once {
        return fetch_once(id, &client, &sanitizer).await;
    }

    ui::run(&client, &sanitizer).await
}

/// Non-interactive mode: fetch one category, render it, exit. A pipeline
/// failure propagates as a nonzero exit after printing the message.
async fn fetch_once(id: u8, client: &FeedClient, sanitizer: &Sanitizer) -> Result<()> {
    let category = categories::find(id)
        .with_context(|| format!("Unknown category number: {id} (valid: 1-8)"))?;

    let feed = client
        .fetch(category.url)
        .await
        .with_context(|| format!("Failed to fetch {}", category.name))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ui::render::render_feed(&feed, sanitizer, &mut out)?;
    out.flush()?;
    Ok(())
}
