//! Document assembly: metadata, storage format and the final JSON value.
//!
//! Every document declares itself in a `da-form` block:
//!
//! | row key | metadata field |
//! |---|---|
//! | `x-schema-name` | `schemaName`: name of the block holding the data |
//! | `x-storage-format` | `storageFormat`: `code` or `blocks` |
//!
//! Code-stored documents carry their data verbatim as JSON in a `pre > code`
//! element. Everything else is derived from the block named by `schemaName`
//! and returned as `{"metadata": …, "data": …}`.

use crate::dom::{Document, TreeNode, has_ancestor_tags, walk};
use crate::extract::Extractor;
use crate::index::{BlockIndex, BlockKey};
use crate::reference::DEFAULT_MAX_REFERENCE_DEPTH;
use crate::value::{PropertyMap, Value};
use crate::{Error, Result};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, warn};

/// Name of the block carrying document metadata.
pub const METADATA_BLOCK: &str = "da-form";

const SCHEMA_NAME_KEY: &str = "x-schema-name";
const STORAGE_FORMAT_KEY: &str = "x-storage-format";

/// How a document stores its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    /// Literal JSON inside a `pre > code` element.
    Code,
    /// Rows of the block named by `schemaName`.
    Blocks,
}

/// Properties of the `da-form` block, with the reserved keys renamed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    /// Value of the `x-schema-name` row.
    pub schema_name: Option<Value>,
    /// Value of the `x-storage-format` row.
    pub storage_format: Option<Value>,
    /// Every other row, unchanged.
    pub extra: PropertyMap,
}

impl Metadata {
    /// Split the reserved keys out of a raw `da-form` property map.
    #[must_use]
    pub fn from_properties(mut props: PropertyMap) -> Self {
        Self {
            schema_name: props.remove(SCHEMA_NAME_KEY),
            storage_format: props.remove(STORAGE_FORMAT_KEY),
            extra: props,
        }
    }

    /// The schema name when it is text.
    ///
    /// A coerced value (e.g. the number `42`) never names a block.
    #[must_use]
    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_ref().and_then(Value::as_str)
    }

    /// `Code` only for the exact string `code`; anything else, including a
    /// missing row, means `Blocks`.
    #[must_use]
    pub fn storage_format(&self) -> StorageFormat {
        match self.storage_format.as_ref().and_then(Value::as_str) {
            Some("code") => StorageFormat::Code,
            _ => StorageFormat::Blocks,
        }
    }

    /// JSON object with `schemaName`, `storageFormat` and passthrough keys.
    ///
    /// Absent reserved keys are omitted; passthrough keys win on collision.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        let mut out = Map::new();
        if let Some(schema_name) = &self.schema_name {
            out.insert("schemaName".to_string(), schema_name.to_json());
        }
        if let Some(storage_format) = &self.storage_format {
            out.insert("storageFormat".to_string(), storage_format.to_json());
        }
        for (key, value) in self.extra.iter() {
            out.insert(key.clone(), value.to_json());
        }
        JsonValue::Object(out)
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Conversion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Maximum number of nested self-references followed before failing.
    pub max_reference_depth: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_reference_depth: DEFAULT_MAX_REFERENCE_DEPTH,
        }
    }
}

/// Converts parsed documents to JSON.
///
/// Stateless between calls: converting the same document twice yields the
/// same value.
///
/// ```rust
/// use dasc_core::{Converter, Document};
/// use serde_json::json;
///
/// let doc = Document::parse(r#"<main><div>
///   <div class="da-form">
///     <div><div>x-schema-name</div><div>offer</div></div>
///     <div><div>x-storage-format</div><div>blocks</div></div>
///   </div>
///   <div class="offer"><div><div>headline</div><div>Hi</div></div></div>
/// </div></main>"#);
///
/// let json = Converter::default().to_json(&doc.root())?;
/// assert_eq!(json["data"], json!({ "headline": "Hi" }));
/// # Ok::<(), dasc_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with explicit options.
    #[must_use]
    pub const fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    #[must_use]
    pub const fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert the document rooted at `root`.
    ///
    /// Fails only on an invalid embedded JSON payload or a reference cycle.
    pub fn to_json<N: TreeNode>(&self, root: &N) -> Result<JsonValue> {
        let index = BlockIndex::new(root);
        let mut extractor = Extractor::new(&index, self.options.max_reference_depth);
        let metadata = read_metadata(&mut extractor)?;

        match metadata.storage_format() {
            StorageFormat::Code => parse_code_payload(root),
            StorageFormat::Blocks => {
                let data = read_data(&mut extractor, &metadata)?;
                Ok(assemble(&metadata, &data))
            },
        }
    }

    /// Extract only the metadata block.
    pub fn metadata<N: TreeNode>(&self, root: &N) -> Result<Metadata> {
        let index = BlockIndex::new(root);
        let mut extractor = Extractor::new(&index, self.options.max_reference_depth);
        read_metadata(&mut extractor)
    }

    /// Run block extraction regardless of the declared storage format.
    pub fn convert_blocks<N: TreeNode>(&self, root: &N) -> Result<JsonValue> {
        let index = BlockIndex::new(root);
        let mut extractor = Extractor::new(&index, self.options.max_reference_depth);
        let metadata = read_metadata(&mut extractor)?;
        let data = read_data(&mut extractor, &metadata)?;
        Ok(assemble(&metadata, &data))
    }
}

/// Parse `html` and convert it with default options.
pub fn html_to_json(html: &str) -> Result<JsonValue> {
    let document = Document::parse(html);
    Converter::default().to_json(&document.root())
}

fn read_metadata<N: TreeNode>(extractor: &mut Extractor<'_, N>) -> Result<Metadata> {
    let props = extractor.find_block(METADATA_BLOCK, BlockKey::Name)?;
    if props.is_empty() {
        debug!("document has no {METADATA_BLOCK} block");
    }
    Ok(Metadata::from_properties(props))
}

fn read_data<N: TreeNode>(
    extractor: &mut Extractor<'_, N>,
    metadata: &Metadata,
) -> Result<PropertyMap> {
    match metadata.schema_name() {
        Some(name) => extractor.find_block(name, BlockKey::Name),
        None => {
            debug!("metadata has no textual schema name");
            Ok(PropertyMap::new())
        },
    }
}

fn assemble(metadata: &Metadata, data: &PropertyMap) -> JsonValue {
    let mut out = Map::new();
    out.insert("metadata".to_string(), metadata.to_json());
    out.insert("data".to_string(), data.to_json());
    JsonValue::Object(out)
}

/// First `code` element whose parent is a `pre`, anywhere in the document.
pub fn find_code_payload<N: TreeNode>(root: &N) -> Option<N> {
    let mut found = None;
    walk(root, |node, ancestors| {
        if found.is_none() && node.has_tag("code") && has_ancestor_tags(ancestors, &["pre"]) {
            found = Some(node.clone());
        }
    });
    found
}

fn parse_code_payload<N: TreeNode>(root: &N) -> Result<JsonValue> {
    let Some(code) = find_code_payload(root) else {
        warn!("code storage declared but no pre > code payload found");
        return Ok(JsonValue::Object(Map::new()));
    };
    serde_json::from_str(&code.text_content()).map_err(|e| Error::EmbeddedJson(e.to_string()))
}
