use selector_forge::dom::document::{HtmlDocument, HtmlElement};
use selector_forge::selector::selector_model::{SelectorOptions, Strategy};

/// Wrap a body fragment in a full document shell and parse it.
pub fn page(body: &str) -> HtmlDocument {
    HtmlDocument::parse(&format!(
        "<!DOCTYPE html><html><head><title>fixture</title></head><body>{}</body></html>",
        body
    ))
}

/// First element matching `selector`, panicking with context when absent.
pub fn target<'a>(doc: &'a HtmlDocument, selector: &str) -> HtmlElement<'a> {
    doc.select_first(selector)
        .unwrap_or_else(|e| panic!("fixture target '{}': {}", selector, e))
}

/// Default options (ids on, classes on, attributes off, depth 10, full).
pub fn options() -> SelectorOptions {
    SelectorOptions::default()
}

pub fn options_with(strategy: Strategy) -> SelectorOptions {
    SelectorOptions {
        strategy,
        ..SelectorOptions::default()
    }
}
