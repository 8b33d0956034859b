use crate::dom::node::{DomNode, SelectorOracle};
use crate::selector::descriptor::simple_descriptor;
use crate::selector::escape::escape_css_identifier;
use crate::selector::selector_model::{SelectorOptions, is_reserved_class};

// ============================================================================
// Optimized builder — shortest candidate that is unique in the document
// ============================================================================

/// Try candidates in priority order and return the first one the oracle
/// confirms as unique:
///
/// 1. `#id`
/// 2. `tag.class`, one class at a time
/// 3. `tag.class1.class2...`, all classes combined
/// 4. `tag[data-*="value"]`, one data attribute at a time
/// 5. fallback: a simple descriptor widened with ancestor context until
///    unique, the body is reached, or the segment count hits the depth
///    limit, then returned as-is, unique or not
///
/// Candidates that fail to parse count as not unique and fall through.
/// Only the depth limit is read from `options`; the id/class/attribute
/// toggles do not gate the candidate ladder.
pub fn build_optimized<E: DomNode>(
    target: &E,
    oracle: &impl SelectorOracle,
    options: &SelectorOptions,
) -> String {
    if let Some(id) = target.id().filter(|id| !id.is_empty()) {
        let candidate = format!("#{}", escape_css_identifier(&id));
        if oracle.is_unique(&candidate) {
            return candidate;
        }
    }

    let tag = target.tag_name();

    let classes: Vec<String> = target
        .classes()
        .into_iter()
        .filter(|class| !is_reserved_class(class))
        .collect();

    for class in &classes {
        let candidate = format!("{}.{}", tag, escape_css_identifier(class));
        if oracle.is_unique(&candidate) {
            return candidate;
        }
    }

    if classes.len() > 1 {
        let compound: String = classes
            .iter()
            .map(|class| format!(".{}", escape_css_identifier(class)))
            .collect();
        let candidate = format!("{}{}", tag, compound);
        if oracle.is_unique(&candidate) {
            return candidate;
        }
    }

    for (name, value) in target.attributes() {
        if !name.starts_with("data-") {
            continue;
        }
        let candidate = format!("{}[{}=\"{}\"]", tag, name, value);
        if oracle.is_unique(&candidate) {
            return candidate;
        }
    }

    // Fallback: widen with ancestor context until unique or out of room.
    let mut current = target.clone();
    let mut selector = simple_descriptor(&current);

    loop {
        if oracle.is_unique(&selector) {
            break;
        }

        let parent = match current.parent() {
            Some(parent) => parent,
            None => break,
        };

        if current.is_document_body() {
            break;
        }

        selector = format!("{} > {}", simple_descriptor(&parent), selector);
        current = parent;

        if selector.split('>').count() >= options.depth {
            break;
        }
    }

    selector
}
