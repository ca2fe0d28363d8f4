//! Convert command implementation

use anyhow::Result;
use dasc_core::{Config, Converter, Document};
use std::path::Path;
use tracing::debug;

use crate::error::CliError;
use crate::utils::{read_html, write_json};

/// Execute the convert command on a file or stdin
pub fn execute(file: Option<&Path>, compact: bool, config: &Config) -> Result<()> {
    let html = read_html(file)?;
    debug!("Read {} bytes of HTML", html.len());

    let document = Document::parse(&html);
    let json = Converter::new(config.convert_options())
        .to_json(&document.root())
        .map_err(CliError::from)?;

    write_json(&mut std::io::stdout().lock(), &json, compact)
}
