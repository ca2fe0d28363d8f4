//! Error types and handling for dasc-core operations.
//!
//! Conversion itself is lenient: missing blocks, rows, columns and unresolved
//! references all degrade to empty values instead of failing. Only a handful of
//! conditions surface as [`Error`]s:
//!
//! - **Embedded JSON**: a `pre > code` payload that is not valid JSON
//! - **Reference cycles**: self-references that loop or nest too deeply
//! - **Origin / fetch errors**: malformed content paths, HTTP failures
//! - **Configuration errors**: unreadable or malformed config files
//!
//! ## Recovery Hints
//!
//! ```rust
//! use dasc_core::{Error, Result};
//!
//! fn handle(result: Result<()>) {
//!     match result {
//!         Err(e) if e.is_recoverable() => println!("Temporary failure, retrying..."),
//!         Err(e) => println!("Permanent failure ({}): {}", e.category(), e),
//!         Ok(()) => println!("Success"),
//!     }
//! }
//! # handle(Ok(()));
//! ```

use thiserror::Error;

/// The main error type for dasc-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network operation failed.
    ///
    /// Connection and timeout errors are typically recoverable, while
    /// malformed URL errors are permanent.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The embedded `pre > code` payload of a code-stored document is not valid JSON.
    #[error("Embedded JSON is invalid: {0}")]
    EmbeddedJson(String),

    /// A self-reference chain revisited a block or exceeded the depth limit.
    ///
    /// `reference` is the variation identifier that could not be resolved and
    /// `depth` the length of the resolution stack at that point.
    #[error("Reference cycle while resolving '{reference}' at depth {depth}")]
    ReferenceCycle {
        /// Variation identifier being resolved.
        reference: String,
        /// Number of references on the resolution stack.
        depth: usize,
    },

    /// URL or content path is malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Requested resource was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Operation timed out.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Generic error for uncategorized failures.
    #[error("{0}")]
    Other(String),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl Error {
    /// Check if the error might be recoverable through retry logic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dasc_core::Error;
    /// use std::io;
    ///
    /// assert!(Error::Timeout("Request timed out".to_string()).is_recoverable());
    /// assert!(Error::Io(io::Error::new(io::ErrorKind::Interrupted, "interrupted")).is_recoverable());
    /// assert!(!Error::EmbeddedJson("expected value".to_string()).is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout(_) => true,
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// - `"io"` - File system and I/O operations
    /// - `"network"` - HTTP requests and network operations
    /// - `"embedded_json"` - Invalid code-stored payloads
    /// - `"reference_cycle"` - Self-reference loops
    /// - `"invalid_url"` - URL and content path validation
    /// - `"not_found"` - Missing resources
    /// - `"config"` - Configuration and settings
    /// - `"timeout"` - Operation timeouts
    /// - `"other"` - Uncategorized errors
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Network(_) => "network",
            Self::EmbeddedJson(_) => "embedded_json",
            Self::ReferenceCycle { .. } => "reference_cycle",
            Self::InvalidUrl(_) => "invalid_url",
            Self::NotFound(_) => "not_found",
            Self::Config(_) => "config",
            Self::Timeout(_) => "timeout",
            Self::Other(_) => "other",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
