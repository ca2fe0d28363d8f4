//! Command implementations for the dasc CLI
//!
//! Each command lives in its own submodule.

mod convert;
mod fetch;
mod metadata;

pub use convert::execute as convert;
pub use fetch::execute as fetch;
pub use metadata::execute as metadata;
