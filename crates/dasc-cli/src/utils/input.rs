//! Input and output plumbing shared by the commands.

use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::error::{ErrorCategory, IntoCliError};

/// Read HTML from `path`, or from stdin when `path` is `None` or `-`.
///
/// A missing file is reported as not found.
pub fn read_html(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path).map_err(|e| {
            let category = if e.kind() == ErrorKind::NotFound {
                ErrorCategory::NotFound
            } else {
                ErrorCategory::Internal
            };
            let err = anyhow::Error::from(e).context(format!("Failed to read {}", path.display()));
            anyhow::Error::from(err.with_category(category))
        }),
        _ => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .context("Failed to read stdin")?;
            Ok(html)
        },
    }
}

/// Print `value` to `out`, pretty unless `compact`.
pub fn write_json(out: &mut impl Write, value: &Value, compact: bool) -> Result<()> {
    if compact {
        serde_json::to_writer(&mut *out, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, value)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
