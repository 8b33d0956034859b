use std::time::Duration;

use scraper::{ElementRef, Html, Selector};

use crate::dom::error::DomError;
use crate::dom::node::{DomNode, SelectorOracle};

// ============================================================================
// scraper-backed document — parsing, target resolution, uniqueness oracle
// ============================================================================

/// Settings for fetching a page over HTTP.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: "selector-forge/0.1".to_string(),
        }
    }
}

/// A parsed HTML document. Owns the tree; elements are borrowed views.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    pub fn from_file(path: &str) -> Result<Self, DomError> {
        let content = std::fs::read_to_string(path).map_err(|e| DomError::ReadFile {
            path: path.to_string(),
            source: e,
        })?;
        Ok(Self::parse(&content))
    }

    pub fn from_url(url: &str, options: &FetchOptions) -> Result<Self, DomError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .user_agent(options.user_agent.clone())
            .build()
            .map_err(|e| DomError::Fetch {
                url: url.to_string(),
                source: e,
            })?;

        let body = client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| DomError::Fetch {
                url: url.to_string(),
                source: e,
            })?;

        Ok(Self::parse(&body))
    }

    /// Every element matching the locator, in document order.
    pub fn select_all(&self, selector: &str) -> Result<Vec<HtmlElement<'_>>, DomError> {
        let parsed = Selector::parse(selector).map_err(|e| DomError::TargetSelector {
            selector: selector.to_string(),
            message: e.to_string(),
        })?;
        Ok(self.html.select(&parsed).map(HtmlElement::new).collect())
    }

    /// First element matching the locator.
    pub fn select_first(&self, selector: &str) -> Result<HtmlElement<'_>, DomError> {
        self.select_all(selector)?
            .into_iter()
            .next()
            .ok_or_else(|| DomError::TargetNotFound {
                selector: selector.to_string(),
            })
    }
}

impl SelectorOracle for HtmlDocument {
    fn match_count(&self, selector: &str) -> Option<usize> {
        let parsed = Selector::parse(selector).ok()?;
        Some(self.html.select(&parsed).count())
    }
}

// ============================================================================
// Element view implementing the tree traversal capability
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct HtmlElement<'a> {
    node: ElementRef<'a>,
}

impl<'a> HtmlElement<'a> {
    fn new(node: ElementRef<'a>) -> Self {
        Self { node }
    }
}

impl DomNode for HtmlElement<'_> {
    fn tag_name(&self) -> String {
        self.node.value().name().to_ascii_lowercase()
    }

    fn id(&self) -> Option<String> {
        self.node.value().id().map(str::to_string)
    }

    fn classes(&self) -> Vec<String> {
        self.node.value().classes().map(str::to_string).collect()
    }

    fn attributes(&self) -> Vec<(String, String)> {
        self.node
            .value()
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    fn parent(&self) -> Option<Self> {
        self.node.parent().and_then(ElementRef::wrap).map(Self::new)
    }

    fn children(&self) -> Vec<Self> {
        self.node
            .children()
            .filter_map(ElementRef::wrap)
            .map(Self::new)
            .collect()
    }

    fn is_same(&self, other: &Self) -> bool {
        self.node == other.node
    }

    fn is_document_root(&self) -> bool {
        self.node
            .parent()
            .map_or(false, |parent| parent.value().is_document())
    }

    fn is_document_body(&self) -> bool {
        self.node.value().name() == "body"
            && self.parent().map_or(false, |parent| parent.is_document_root())
    }
}
