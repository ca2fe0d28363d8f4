//! Metadata command implementation

use anyhow::Result;
use dasc_core::{Config, Converter, Document};
use std::path::Path;

use crate::error::CliError;
use crate::utils::{read_html, write_json};

/// Execute the metadata command, printing only the `da-form` properties
pub fn execute(file: Option<&Path>, compact: bool, config: &Config) -> Result<()> {
    let html = read_html(file)?;
    let document = Document::parse(&html);
    let metadata = Converter::new(config.convert_options())
        .metadata(&document.root())
        .map_err(CliError::from)?;

    write_json(&mut std::io::stdout().lock(), &metadata.to_json(), compact)
}
