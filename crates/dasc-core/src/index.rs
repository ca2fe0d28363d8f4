//! Block discovery and lookup.
//!
//! Blocks are the `div` elements exactly two levels below `<main>`:
//!
//! ```html
//! <main>
//!   <div>                                  <!-- section -->
//!     <div class="offer forms-offer">      <!-- block: name "offer", variation "forms-offer" -->
//!       <div><div>key</div><div>value</div></div>   <!-- row -->
//!     </div>
//!   </div>
//! </main>
//! ```

use crate::dom::{TreeNode, has_ancestor_tags, walk};
use tracing::debug;

/// Which class token a lookup compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKey {
    /// First class token, the block name.
    Name,
    /// Second class token, the variation used by self-references.
    Variation,
}

impl BlockKey {
    const fn position(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Variation => 1,
        }
    }
}

/// Whether `node`, reached through `ancestors`, sits at block depth.
pub fn is_block_element<N: TreeNode>(node: &N, ancestors: &[N]) -> bool {
    node.has_tag("div") && has_ancestor_tags(ancestors, &["main", "div"])
}

/// One block element and its class tokens.
#[derive(Debug, Clone)]
pub struct Block<N> {
    node: N,
    classes: Vec<String>,
}

impl<N: TreeNode> Block<N> {
    /// The underlying element.
    pub const fn node(&self) -> &N {
        &self.node
    }

    /// First class token.
    pub fn name(&self) -> Option<&str> {
        self.class_at(BlockKey::Name)
    }

    /// Second class token.
    pub fn variation(&self) -> Option<&str> {
        self.class_at(BlockKey::Variation)
    }

    fn class_at(&self, key: BlockKey) -> Option<&str> {
        self.classes.get(key.position()).map(String::as_str)
    }
}

/// All blocks of a document, in document order.
#[derive(Debug, Clone)]
pub struct BlockIndex<N> {
    blocks: Vec<Block<N>>,
}

impl<N: TreeNode> BlockIndex<N> {
    /// Collect every block under `root`.
    pub fn new(root: &N) -> Self {
        let mut blocks = Vec::new();
        walk(root, |node, ancestors| {
            if is_block_element(node, ancestors) {
                blocks.push(Block {
                    node: node.clone(),
                    classes: node.class_tokens(),
                });
            }
        });
        debug!(count = blocks.len(), "indexed blocks");
        Self { blocks }
    }

    /// First block whose name or variation equals `term`.
    ///
    /// Later duplicates are ignored.
    pub fn find(&self, term: &str, key: BlockKey) -> Option<&Block<N>> {
        let found = self
            .blocks
            .iter()
            .find(|block| block.class_at(key) == Some(term));
        if found.is_none() {
            debug!(term, ?key, "no matching block");
        }
        found
    }

    /// All indexed blocks.
    pub fn blocks(&self) -> &[Block<N>] {
        &self.blocks
    }

    /// Number of indexed blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
