use serde::{Deserialize, Serialize};

use crate::dom::node::{DomNode, SelectorOracle};
use crate::selector::full_path::build_full_path;
use crate::selector::nth_child::build_nth_child;
use crate::selector::optimized::build_optimized;

// ============================================================================
// Strategy and configuration snapshot
// ============================================================================

/// Class prefix used by cosmetic instrumentation (hover highlight, copied
/// flash). Classes carrying it must never leak into generated output.
pub const RESERVED_CLASS_PREFIX: &str = "selector-copy-";

pub fn is_reserved_class(name: &str) -> bool {
    name.starts_with(RESERVED_CLASS_PREFIX)
}

/// How a target element is turned into a selector string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Describe every ancestor level in full attribute-selector form.
    #[serde(rename = "full")]
    FullPath,

    /// Qualify each level with its sibling position; stop early at an id.
    NthChild,

    /// Probe for the shortest candidate that is unique in the document.
    Optimized,
}

impl Strategy {
    /// Parse a user-facing strategy name (`full`, `nth-child`, `optimized`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "full" => Some(Strategy::FullPath),
            "nth-child" => Some(Strategy::NthChild),
            "optimized" => Some(Strategy::Optimized),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::FullPath => "full",
            Strategy::NthChild => "nth-child",
            Strategy::Optimized => "optimized",
        }
    }

    /// All strategies, in presentation order.
    pub fn all() -> [Strategy; 3] {
        [Strategy::FullPath, Strategy::NthChild, Strategy::Optimized]
    }

    /// Build a selector path for `target` with this strategy. Only the
    /// optimized strategy consults the oracle.
    pub fn build_path<E: DomNode>(
        self,
        target: &E,
        oracle: &impl SelectorOracle,
        options: &SelectorOptions,
    ) -> String {
        match self {
            Strategy::FullPath => build_full_path(target, options),
            Strategy::NthChild => build_nth_child(target, options),
            Strategy::Optimized => build_optimized(target, oracle, options),
        }
    }
}

/// Read-only configuration snapshot for one generation call. The caller
/// keeps the latest settings and injects them; the builders never read
/// shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOptions {
    pub include_ids: bool,
    pub include_classes: bool,
    pub include_attributes: bool,

    /// Number of ancestor levels walked, not a string-length limit.
    pub depth: usize,

    pub strategy: Strategy,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            include_ids: true,
            include_classes: true,
            include_attributes: false,
            depth: 10,
            strategy: Strategy::FullPath,
        }
    }
}

impl SelectorOptions {
    pub const MIN_DEPTH: usize = 1;
    pub const MAX_DEPTH: usize = 10;

    /// Clamp the depth into the range the options surface allows.
    pub fn clamped(mut self) -> Self {
        self.depth = self.depth.clamp(Self::MIN_DEPTH, Self::MAX_DEPTH);
        self
    }
}

/// Generate a selector for `target` using the strategy carried in
/// `options`. Returns an empty string when no selector is available
/// (body or document-root target).
pub fn generate_selector<E: DomNode>(
    target: &E,
    oracle: &impl SelectorOracle,
    options: &SelectorOptions,
) -> String {
    options.strategy.build_path(target, oracle, options)
}
