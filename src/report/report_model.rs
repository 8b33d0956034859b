use serde::{Deserialize, Serialize};

use crate::dom::node::{ProbeAttempt, SelectorOracle};
use crate::selector::selector_model::Strategy;

// ============================================================================
// Generation report — one source document, one target locator
// ============================================================================

/// Result of running one strategy against one target element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyResult {
    /// Serializes as the user-facing name: `full`, `nth-child`, `optimized`.
    pub strategy: Strategy,

    /// The generated selector; empty when no selector is available.
    pub selector: String,

    /// Document match count for the generated selector, when an oracle
    /// verdict was computed. `None` with `unique: Some(false)` means the
    /// selector did not parse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,

    /// Candidates probed on the way to this result (inspect only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub probes: Vec<ProbeAttempt>,
}

impl StrategyResult {
    /// Build a result and score the selector against the document.
    pub fn evaluated(
        strategy: Strategy,
        selector: String,
        oracle: &impl SelectorOracle,
    ) -> Self {
        if selector.is_empty() {
            return Self {
                strategy,
                selector,
                matches: None,
                unique: None,
                probes: Vec::new(),
            };
        }

        let matches = oracle.match_count(&selector);
        Self {
            strategy,
            selector,
            matches,
            unique: Some(matches == Some(1)),
            probes: Vec::new(),
        }
    }

    pub fn with_probes(mut self, probes: Vec<ProbeAttempt>) -> Self {
        self.probes = probes;
        self
    }
}

/// Results for one element matched by the target locator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetReport {
    /// Match index of this element under the locator (0-based).
    pub index: usize,

    pub strategies: Vec<StrategyResult>,
}

/// Full report for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorReport {
    /// File path or URL the document came from.
    pub source: String,

    /// The locator used to resolve the target element(s).
    pub target: String,

    pub results: Vec<TargetReport>,
}

impl SelectorReport {
    /// Number of non-empty selectors across all targets and strategies.
    pub fn generated_count(&self) -> usize {
        self.results
            .iter()
            .flat_map(|target| target.strategies.iter())
            .filter(|result| !result.selector.is_empty())
            .count()
    }

    /// Whether every strategy run produced a selector.
    pub fn all_generated(&self) -> bool {
        self.results
            .iter()
            .flat_map(|target| target.strategies.iter())
            .all(|result| !result.selector.is_empty())
    }
}
