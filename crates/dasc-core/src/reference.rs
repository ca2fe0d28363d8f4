//! Self-references between blocks.
//!
//! A cell whose text starts with `self://#` points at another block in the same
//! document. The remainder of the token, with `/` replaced by `-`, is matched
//! against block *variation* tokens: `self://#forms/offer` resolves to the
//! block classed `<name> forms-offer`.

use crate::{Error, Result};
use tracing::trace;

/// Marker prefix of a self-reference token.
pub const SELF_REF: &str = "self://#";

/// Default bound on nested reference resolution.
pub const DEFAULT_MAX_REFERENCE_DEPTH: usize = 32;

/// Variation identifier for a self-reference token, or `None` for plain text.
///
/// ```rust
/// use dasc_core::reference::parse_reference;
///
/// assert_eq!(parse_reference("self://#forms/offer").as_deref(), Some("forms-offer"));
/// assert_eq!(parse_reference("https://example.com"), None);
/// ```
#[must_use]
pub fn parse_reference(text: &str) -> Option<String> {
    text.strip_prefix(SELF_REF)
        .map(|rest| rest.replace('/', "-"))
}

/// Variation identifiers currently being resolved, innermost last.
///
/// Entering an identifier that is already on the stack, or going deeper than
/// `max_depth`, fails with [`Error::ReferenceCycle`].
#[derive(Debug, Clone)]
pub struct ResolutionStack {
    frames: Vec<String>,
    max_depth: usize,
}

impl ResolutionStack {
    /// Create an empty stack bounded at `max_depth` frames.
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push `reference`, failing on revisits and on depth overflow.
    pub fn enter(&mut self, reference: &str) -> Result<()> {
        let depth = self.frames.len();
        if depth >= self.max_depth || self.frames.iter().any(|frame| frame == reference) {
            return Err(Error::ReferenceCycle {
                reference: reference.to_string(),
                depth,
            });
        }
        trace!(reference, depth, "entering reference");
        self.frames.push(reference.to_string());
        Ok(())
    }

    /// Pop the innermost frame.
    pub fn exit(&mut self) {
        self.frames.pop();
    }

    /// Number of frames on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl Default for ResolutionStack {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REFERENCE_DEPTH)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_replaces_every_separator() {
        assert_eq!(
            parse_reference("self://#a/b/c").as_deref(),
            Some("a-b-c")
        );
        assert_eq!(parse_reference("self://#").as_deref(), Some(""));
        assert_eq!(parse_reference(" self://#a"), None);
        assert_eq!(parse_reference("self://a"), None);
    }

    #[test]
    fn test_stack_rejects_revisits() {
        let mut stack = ResolutionStack::new(8);
        stack.enter("a").unwrap();
        stack.enter("b").unwrap();

        match stack.enter("a") {
            Err(Error::ReferenceCycle { reference, depth }) => {
                assert_eq!(reference, "a");
                assert_eq!(depth, 2);
            },
            other => panic!("expected cycle error, got {other:?}"),
        }
    }

    #[test]
    fn test_stack_enforces_depth_limit() {
        let mut stack = ResolutionStack::new(2);
        stack.enter("a").unwrap();
        stack.enter("b").unwrap();

        assert!(matches!(
            stack.enter("c"),
            Err(Error::ReferenceCycle { depth: 2, .. })
        ));
    }

    #[test]
    fn test_exit_allows_sibling_references() {
        let mut stack = ResolutionStack::default();
        stack.enter("a").unwrap();
        stack.exit();
        stack.enter("a").unwrap();

        assert_eq!(stack.depth(), 1);
    }
}
