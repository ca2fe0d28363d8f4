//! # CLI Structure and Argument Parsing
//!
//! The `dasc` command line is built with `clap` derive macros.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Convert a saved page (or stdin when FILE is omitted or `-`)
//! dasc convert page.html
//! curl -s https://main--shop--acme.aem.page/forms/offer | dasc convert
//!
//! # Only the da-form metadata
//! dasc metadata page.html --compact
//!
//! # Derive the origin from a content path, fetch and convert
//! dasc fetch /preview/acme/shop/forms/offer.json
//! dasc fetch /live/acme/shop/forms/offer --origin http://localhost:3000
//! ```
//!
//! ## Exit Codes
//!
//! See [`crate::error`] for the mapping from failures to exit codes.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for the `dasc` command
#[derive(Parser, Clone, Debug)]
#[command(name = "dasc")]
#[command(version)]
#[command(about = "dasc - Convert block-structured HTML documents to JSON", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging on stderr
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Path to a configuration file (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "FILE", env = "DASC_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Convert an HTML document to JSON
    Convert {
        /// HTML file to read; stdin when omitted or `-`
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print only the document metadata
    Metadata {
        /// HTML file to read; stdin when omitted or `-`
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Fetch a page from its origin and convert it
    Fetch {
        /// Content path (`/{tier}/{org}/{site}/{path}`) or a full URL containing one
        #[arg(value_name = "PATH_OR_URL")]
        target: String,

        /// Fetch from this origin instead of the derived one
        #[arg(long, value_name = "URL")]
        origin: Option<String>,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
}
