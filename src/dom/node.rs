use std::cell::RefCell;

use serde::{Deserialize, Serialize};

// ============================================================================
// Tree traversal and document query capabilities
// ============================================================================

/// One element in a document tree, as seen by the selector builders.
///
/// The builders only ever walk upward (parent) and sideways (the parent's
/// element children), read naming data, and compare element identity, so
/// any tree that can answer these questions can back them, not just a
/// browser-hosted document.
pub trait DomNode: Clone {
    /// Lower-cased tag name.
    fn tag_name(&self) -> String;

    /// The `id` attribute, if present (may be empty).
    fn id(&self) -> Option<String>;

    /// Class tokens in document order.
    fn classes(&self) -> Vec<String>;

    /// Attribute (name, value) pairs in the order the backing tree
    /// enumerates them.
    fn attributes(&self) -> Vec<(String, String)>;

    /// Parent element, or `None` at the top of the tree.
    fn parent(&self) -> Option<Self>;

    /// Element children in document order (text nodes excluded).
    fn children(&self) -> Vec<Self>;

    /// Whether both handles refer to the same element node.
    fn is_same(&self, other: &Self) -> bool;

    /// Whether this is the document's root element (`<html>`).
    fn is_document_root(&self) -> bool;

    /// Whether this is the document's top-level `<body>`.
    fn is_document_body(&self) -> bool;
}

/// Answers "how many elements does this selector match" against a live
/// document. Consulted by the optimized strategy to verify uniqueness.
pub trait SelectorOracle {
    /// Number of elements the selector matches, or `None` when the
    /// selector string does not parse.
    fn match_count(&self, selector: &str) -> Option<usize>;

    /// True iff the selector matches exactly one element. A selector that
    /// does not parse counts as not unique rather than an error.
    fn is_unique(&self, selector: &str) -> bool {
        self.match_count(selector) == Some(1)
    }
}

// ============================================================================
// Recording oracle — captures every probe for inspection output
// ============================================================================

/// One uniqueness probe: the candidate selector and what the document
/// said about it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeAttempt {
    pub selector: String,
    /// Match count, or `None` when the candidate did not parse.
    pub matches: Option<usize>,
}

/// Wraps another oracle and records every `match_count` call, so the
/// inspect command can show which candidates the optimized strategy tried
/// before settling on its answer.
pub struct RecordingOracle<'a, O: SelectorOracle> {
    inner: &'a O,
    attempts: RefCell<Vec<ProbeAttempt>>,
}

impl<'a, O: SelectorOracle> RecordingOracle<'a, O> {
    pub fn new(inner: &'a O) -> Self {
        Self {
            inner,
            attempts: RefCell::new(Vec::new()),
        }
    }

    /// The probes made so far, in call order.
    pub fn into_attempts(self) -> Vec<ProbeAttempt> {
        self.attempts.into_inner()
    }
}

impl<O: SelectorOracle> SelectorOracle for RecordingOracle<'_, O> {
    fn match_count(&self, selector: &str) -> Option<usize> {
        let matches = self.inner.match_count(selector);
        self.attempts.borrow_mut().push(ProbeAttempt {
            selector: selector.to_string(),
            matches,
        });
        matches
    }
}
