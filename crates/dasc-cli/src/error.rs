//! CLI error handling with semantic exit codes.
//!
//! Errors are categorized so scripts can react to the kind of failure
//! without parsing messages.
//!
//! # Exit Code Categories
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Command completed successfully |
//! | 1 | `Internal` | Unexpected/internal error |
//! | 2 | `Usage` | Invalid arguments, content path or configuration |
//! | 3 | `NotFound` | Input file or remote page not found |
//! | 4 | `InvalidContent` | Embedded JSON is invalid or references loop |
//! | 5 | `Network` | Network or fetch failure |
//! | 6 | `Timeout` | Operation timed out |
//!
//! # Usage
//!
//! ```bash
//! dasc fetch /preview/acme/shop/forms/offer
//! case $? in
//!     0) echo "Converted" ;;
//!     3) echo "Page not found" ;;
//!     4) echo "Page content is broken" ;;
//!     *) echo "Other error" ;;
//! esac
//! ```

use std::fmt;
use std::process::ExitCode;

use dasc_core::Error as CoreError;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,

    /// Invalid arguments, content path or configuration (exit code 2).
    Usage = 2,

    /// Input file or remote page not found (exit code 3).
    NotFound = 3,

    /// Document content cannot be converted (exit code 4).
    ///
    /// Raised for invalid embedded JSON payloads and reference cycles.
    InvalidContent = 4,

    /// Network or fetch failure (exit code 5).
    Network = 5,

    /// Operation timed out (exit code 6).
    Timeout = 6,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Create an `ExitCode` from this category.
    #[must_use]
    pub fn as_exit_code(self) -> ExitCode {
        ExitCode::from(self.exit_code())
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::NotFound => "not found",
            Self::InvalidContent => "invalid content",
            Self::Network => "network error",
            Self::Timeout => "timeout",
        }
    }

    /// Category for a core library error.
    #[must_use]
    pub const fn from_core(err: &CoreError) -> Self {
        match err {
            CoreError::InvalidUrl(_) | CoreError::Config(_) => Self::Usage,
            CoreError::NotFound(_) => Self::NotFound,
            CoreError::EmbeddedJson(_) | CoreError::ReferenceCycle { .. } => Self::InvalidContent,
            CoreError::Network(_) => Self::Network,
            CoreError::Timeout(_) => Self::Timeout,
            CoreError::Io(_) | CoreError::Other(_) => Self::Internal,
        }
    }

    /// Infer the error category from an error message.
    ///
    /// Heuristic fallback for errors that were not categorized explicitly.
    #[must_use]
    pub fn infer_from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        // Timeout before Network so "connection timed out" is a timeout
        if msg_lower.contains("timeout") || msg_lower.contains("timed out") {
            return Self::Timeout;
        }

        if msg_lower.contains("network")
            || msg_lower.contains("connection")
            || msg_lower.contains("dns")
            || msg_lower.contains("http")
            || msg_lower.contains("fetch")
        {
            return Self::Network;
        }

        if msg_lower.contains("not found")
            || msg_lower.contains("no such")
            || msg_lower.contains("does not exist")
        {
            return Self::NotFound;
        }

        if msg_lower.contains("embedded json") || msg_lower.contains("reference cycle") {
            return Self::InvalidContent;
        }

        if msg_lower.contains("invalid url")
            || msg_lower.contains("usage:")
            || msg_lower.contains("configuration")
        {
            return Self::Usage;
        }

        Self::Internal
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A CLI error with a semantic category for exit code mapping.
///
/// Wraps an `anyhow::Error` so context chains survive.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create a CLI error, inferring the category from the error message.
    pub fn inferred(source: impl Into<anyhow::Error>) -> Self {
        let source = source.into();
        let category = ErrorCategory::infer_from_message(&source.to_string());
        Self { category, source }
    }

    /// Create a usage error.
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }

    /// Create a not-found error.
    pub fn not_found(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::NotFound, source)
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }

    /// Create an `ExitCode` from this error.
    #[must_use]
    pub fn as_exit_code(&self) -> ExitCode {
        self.category.as_exit_code()
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::new(ErrorCategory::from_core(&err), err)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    // Display already shows the wrapped error, so the chain starts at its cause
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.chain().nth(1)
    }
}

/// Extension trait for converting errors to `CliError` with category inference.
pub trait IntoCliError {
    /// Convert to a `CliError`, inferring the category from the error message.
    fn into_cli_error(self) -> CliError;

    /// Convert to a `CliError` with an explicit category.
    fn with_category(self, category: ErrorCategory) -> CliError;
}

impl<E: Into<anyhow::Error>> IntoCliError for E {
    fn into_cli_error(self) -> CliError {
        CliError::inferred(self)
    }

    fn with_category(self, category: ErrorCategory) -> CliError {
        CliError::new(category, self)
    }
}

/// Determine the exit code from an `anyhow::Error`.
///
/// A `CliError` or core error anywhere in the chain decides the category;
/// otherwise the message is inspected.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }

    if let Some(core_err) = err.chain().find_map(|e| e.downcast_ref::<CoreError>()) {
        return ErrorCategory::from_core(core_err).exit_code();
    }

    ErrorCategory::infer_from_message(&err.to_string()).exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    mod error_category {
        use super::*;

        #[test]
        fn test_exit_codes() {
            assert_eq!(ErrorCategory::Internal.exit_code(), 1);
            assert_eq!(ErrorCategory::Usage.exit_code(), 2);
            assert_eq!(ErrorCategory::NotFound.exit_code(), 3);
            assert_eq!(ErrorCategory::InvalidContent.exit_code(), 4);
            assert_eq!(ErrorCategory::Network.exit_code(), 5);
            assert_eq!(ErrorCategory::Timeout.exit_code(), 6);
        }

        #[test]
        fn test_from_core() {
            assert_eq!(
                ErrorCategory::from_core(&CoreError::EmbeddedJson("eof".into())),
                ErrorCategory::InvalidContent
            );
            assert_eq!(
                ErrorCategory::from_core(&CoreError::ReferenceCycle {
                    reference: "a".into(),
                    depth: 2,
                }),
                ErrorCategory::InvalidContent
            );
            assert_eq!(
                ErrorCategory::from_core(&CoreError::InvalidUrl("Usage".into())),
                ErrorCategory::Usage
            );
            assert_eq!(
                ErrorCategory::from_core(&CoreError::NotFound("page".into())),
                ErrorCategory::NotFound
            );
            assert_eq!(
                ErrorCategory::from_core(&CoreError::Timeout("slow".into())),
                ErrorCategory::Timeout
            );
            assert_eq!(
                ErrorCategory::from_core(&CoreError::Config("bad toml".into())),
                ErrorCategory::Usage
            );
            assert_eq!(
                ErrorCategory::from_core(&CoreError::Other("500".into())),
                ErrorCategory::Internal
            );
        }

        #[test]
        fn test_infer_timeout_before_network() {
            assert_eq!(
                ErrorCategory::infer_from_message("Connection timed out"),
                ErrorCategory::Timeout
            );
            assert_eq!(
                ErrorCategory::infer_from_message("HTTP 500 error"),
                ErrorCategory::Network
            );
        }

        #[test]
        fn test_infer_not_found() {
            assert_eq!(
                ErrorCategory::infer_from_message("No such file or directory"),
                ErrorCategory::NotFound
            );
        }

        #[test]
        fn test_infer_default() {
            assert_eq!(
                ErrorCategory::infer_from_message("Something went wrong"),
                ErrorCategory::Internal
            );
        }
    }

    mod exit_code_from_error {
        use super::*;

        #[test]
        fn test_cli_error() {
            let err: anyhow::Error = CliError::not_found(anyhow!("missing.html")).into();
            assert_eq!(exit_code_from_error(&err), 3);
        }

        #[test]
        fn test_core_error_with_context() {
            let err = anyhow::Error::from(CoreError::EmbeddedJson("eof".into()))
                .context("Failed to convert page");
            assert_eq!(exit_code_from_error(&err), 4);
        }

        #[test]
        fn test_regular_error() {
            let err = anyhow!("Operation timed out");
            assert_eq!(exit_code_from_error(&err), 6);
        }
    }

    mod into_cli_error {
        use super::*;

        #[test]
        fn test_into_cli_error() {
            let err = anyhow!("Page not found").into_cli_error();
            assert_eq!(err.category, ErrorCategory::NotFound);
        }

        #[test]
        fn test_with_category() {
            let err = anyhow!("bad flag").with_category(ErrorCategory::Usage);
            assert_eq!(err.category, ErrorCategory::Usage);
            assert_eq!(err.to_string(), "bad flag");
        }
    }
}
