//! Row/property extraction.
//!
//! Each element child of a block is a row. A row's first element child is the
//! key column and its second the value column:
//!
//! | value column starts with | result |
//! |---|---|
//! | nothing (missing or childless) | `""` |
//! | a `ul` / `ol` (ignoring leading whitespace) | array of item texts, references resolved |
//! | anything else | trimmed text, coerced |
//!
//! Malformed rows never fail: a row without element children is skipped and a
//! row without a value column yields `""`. A list holding a single empty item
//! is the authoring surface's placeholder for an empty list and yields `[]`.

use crate::coerce::{Scalar, coerce_scalar};
use crate::dom::TreeNode;
use crate::index::{BlockIndex, BlockKey};
use crate::reference::{ResolutionStack, parse_reference};
use crate::value::{PropertyMap, Value};
use crate::Result;
use tracing::{debug, warn};

/// Extracts property maps from the blocks of one document.
///
/// Holds the reference resolution stack for a single conversion; create a new
/// extractor per document.
#[derive(Debug)]
pub struct Extractor<'a, N> {
    index: &'a BlockIndex<N>,
    stack: ResolutionStack,
}

impl<'a, N: TreeNode> Extractor<'a, N> {
    /// Create an extractor over `index`, resolving at most `max_reference_depth` nested references.
    pub const fn new(index: &'a BlockIndex<N>, max_reference_depth: usize) -> Self {
        Self {
            index,
            stack: ResolutionStack::new(max_reference_depth),
        }
    }

    /// Extract the first block matching `term`, or an empty map when none does.
    pub fn find_block(&mut self, term: &str, key: BlockKey) -> Result<PropertyMap> {
        let index = self.index;
        match index.find(term, key) {
            Some(block) => self.extract(block.node()),
            None => Ok(PropertyMap::new()),
        }
    }

    /// Fold every row of `block` into a property map.
    pub fn extract(&mut self, block: &N) -> Result<PropertyMap> {
        let mut props = PropertyMap::new();
        for row in block.element_children() {
            if let Some((key, value)) = self.extract_row(&row)? {
                props.insert(key, value);
            }
        }
        Ok(props)
    }

    fn extract_row(&mut self, row: &N) -> Result<Option<(String, Value)>> {
        let columns = row.element_children();
        let Some(key_col) = columns.first() else {
            return Ok(None);
        };
        let key = key_col.text_content().trim().to_string();

        let Some(value_col) = columns.get(1) else {
            debug!(key, "row has no value column");
            return Ok(Some((key, Value::empty())));
        };

        let children = value_col.children();
        if children.is_empty() {
            return Ok(Some((key, Value::empty())));
        }

        let value = match children.iter().find(|child| child.is_significant()) {
            Some(first) if is_list(first) => self.extract_list(first)?,
            _ => self.coerce(value_col.text_content().trim())?,
        };
        Ok(Some((key, value)))
    }

    fn extract_list(&mut self, list: &N) -> Result<Value> {
        let items: Vec<String> = list
            .element_children()
            .iter()
            .filter(|child| child.has_tag("li"))
            .map(|item| item.text_content().trim().to_string())
            .collect();

        let placeholder = match items.as_slice() {
            [] => true,
            [only] => only.is_empty(),
            _ => false,
        };
        if placeholder {
            return Ok(Value::Array(Vec::new()));
        }

        let mut values = Vec::with_capacity(items.len());
        for text in items {
            let value = match self.resolve_reference(&text)? {
                Some(props) => Value::Reference(props),
                None => Value::String(text),
            };
            values.push(value);
        }
        Ok(Value::Array(values))
    }

    /// Coerce a trimmed scalar cell, resolving self-references.
    pub fn coerce(&mut self, text: &str) -> Result<Value> {
        Ok(match coerce_scalar(text) {
            Scalar::Empty => Value::empty(),
            Scalar::Boolean(b) => Value::Boolean(b),
            Scalar::Number(n) => Value::Number(n),
            Scalar::Reference(id) => self
                .resolve_variation(&id)?
                .map_or_else(|| Value::String(text.to_string()), Value::Reference),
            Scalar::Text => Value::String(text.to_string()),
        })
    }

    /// Resolve `text` if it is a self-reference to a non-empty block.
    ///
    /// Returns `Ok(None)` for plain text and for references whose target is
    /// missing or empty.
    pub fn resolve_reference(&mut self, text: &str) -> Result<Option<PropertyMap>> {
        match parse_reference(text) {
            Some(id) => self.resolve_variation(&id),
            None => Ok(None),
        }
    }

    fn resolve_variation(&mut self, id: &str) -> Result<Option<PropertyMap>> {
        self.stack.enter(id)?;
        let resolved = self.find_block(id, BlockKey::Variation);
        self.stack.exit();

        let props = resolved?;
        if props.is_empty() {
            warn!(reference = id, "self-reference did not resolve, keeping literal text");
            return Ok(None);
        }
        Ok(Some(props))
    }
}

fn is_list<N: TreeNode>(node: &N) -> bool {
    node.has_tag("ul") || node.has_tag("ol")
}
