//! Fetch command implementation

use anyhow::Result;
use dasc_core::{Config, Converter, Document, Fetcher, OriginContext};
use tracing::info;

use crate::error::CliError;
use crate::utils::write_json;

/// Derive the origin for `target`, download the page and convert it
pub async fn execute(
    target: &str,
    origin: Option<&str>,
    compact: bool,
    config: &Config,
) -> Result<()> {
    let mut ctx = resolve_context(target).map_err(CliError::from)?;
    if let Some(origin) = origin {
        ctx = ctx.with_origin(origin);
    }
    info!("Fetching {} ({} tier)", ctx.content_url(), ctx.tier);

    let fetcher = Fetcher::with_config(&config.fetch).map_err(CliError::from)?;
    let html = fetcher.fetch_context(&ctx).await.map_err(CliError::from)?;

    let document = Document::parse(&html);
    let json = Converter::new(config.convert_options())
        .to_json(&document.root())
        .map_err(CliError::from)?;

    write_json(&mut std::io::stdout().lock(), &json, compact)
}

/// Full URLs are parsed for their path; anything else is a content path.
fn resolve_context(target: &str) -> dasc_core::Result<OriginContext> {
    if target.starts_with("http://") || target.starts_with("https://") {
        OriginContext::from_url(target)
    } else {
        OriginContext::from_path(target)
    }
}
