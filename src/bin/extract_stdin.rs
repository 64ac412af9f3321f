//! Reads an HTML page from stdin and prints the extracted article as JSON.
//!
//! Usage: `extract_stdin [BASE_URL] < page.html`
//!
//! Logs go to stderr; set `RUST_LOG` (default `warn`) to see more.

use std::io::{self, Read, Write};

use rs_article_extract::{extract_bytes, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_BASE_URL: &str = "https://example.com/";

fn main() -> Result<()> {
    init_logging();

    let base_url = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let mut html = Vec::new();
    io::stdin().read_to_end(&mut html)?;
    tracing::debug!(bytes = html.len(), base_url = %base_url, "read page from stdin");

    let content = extract_bytes(&html, &base_url);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", content.to_json()?)?;
    Ok(())
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Err(err) = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init()
    {
        eprintln!("tracing setup failed: {err}");
    }
}
