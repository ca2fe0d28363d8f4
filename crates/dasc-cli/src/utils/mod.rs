//! Shared helpers for CLI commands.
//!
//! - [`logging`]: tracing subscriber and color setup
//! - [`input`]: reading HTML from files or stdin and printing JSON

pub mod input;
pub mod logging;

pub use input::{read_html, write_json};
pub use logging::initialize_logging;
