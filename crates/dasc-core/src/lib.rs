//! # dasc-core
//!
//! Converts block-structured HTML documents into typed JSON.
//!
//! A document is a `main` element whose sections hold named blocks. Each block
//! is a `div` whose first class token names it and whose optional second class
//! token is a variation. Every block row is a key column followed by a value
//! column:
//!
//! ```html
//! <main><div>
//!   <div class="da-form">
//!     <div><div>x-schema-name</div><div>offer</div></div>
//!   </div>
//!   <div class="offer">
//!     <div><div>headline</div><div>Summer sale</div></div>
//!     <div><div>discount</div><div>15</div></div>
//!   </div>
//! </div></main>
//! ```
//!
//! ## Architecture
//!
//! - **Tree**: [`Document`] parses HTML with html5ever; extraction works over
//!   any [`TreeNode`] implementation
//! - **Blocks**: [`BlockIndex`] locates blocks by name or variation
//! - **Values**: [`Extractor`] reads rows, coerces text and follows
//!   `self://#` references
//! - **Assembly**: [`Converter`] reads `da-form` metadata and builds the result
//! - **Origins**: [`OriginContext`] and [`Fetcher`] locate and download pages
//!
//! ## Quick Start
//!
//! ```rust
//! use dasc_core::html_to_json;
//! use serde_json::json;
//!
//! let json = html_to_json(r#"<main><div>
//!   <div class="da-form"><div><div>x-schema-name</div><div>offer</div></div></div>
//!   <div class="offer">
//!     <div><div>discount</div><div>15</div></div>
//!     <div><div>active</div><div>true</div></div>
//!   </div>
//! </div></main>"#)?;
//!
//! assert_eq!(json["data"], json!({ "discount": 15, "active": true }));
//! # Ok::<(), dasc_core::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Conversion itself fails only on an invalid embedded JSON payload or a
//! reference cycle:
//!
//! ```rust
//! use dasc_core::{Error, html_to_json};
//!
//! match html_to_json("<main></main>") {
//!     Ok(json) => println!("{json}"),
//!     Err(Error::ReferenceCycle { reference, .. }) => eprintln!("cycle at {reference}"),
//!     Err(e) => eprintln!("[{}] {e}", e.category()),
//! }
//! ```

/// Scalar coercion of cell text
pub mod coerce;
/// Configuration loading and defaults
pub mod config;
/// Origin resolution from request paths
pub mod context;
/// Metadata handling and document assembly
pub mod convert;
/// Document tree abstraction and traversal
pub mod dom;
/// Error types and result aliases
pub mod error;
/// Block rows to property maps
pub mod extract;
/// HTTP fetching of page HTML
pub mod fetcher;
/// Block discovery and lookup
pub mod index;
/// Self-reference parsing and cycle tracking
pub mod reference;
/// Typed values produced by extraction
pub mod value;

// Re-export commonly used types
pub use config::{Config, ConvertConfig, FetchConfig};
pub use context::{OriginContext, Tier};
pub use convert::{ConvertOptions, Converter, Metadata, StorageFormat, html_to_json};
pub use dom::{Document, Node, NodeKind, TreeNode};
pub use error::{Error, Result};
pub use extract::Extractor;
pub use fetcher::Fetcher;
pub use index::{Block, BlockIndex, BlockKey};
pub use value::{PropertyMap, Value};
