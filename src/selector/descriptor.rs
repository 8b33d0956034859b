use crate::dom::node::DomNode;
use crate::selector::escape::escape_css_identifier;
use crate::selector::selector_model::{SelectorOptions, is_reserved_class};

// ============================================================================
// Single-level element descriptors
// ============================================================================

/// Attributes that never contribute to a descriptor fragment.
const SKIPPED_ATTRIBUTES: [&str; 3] = ["id", "class", "style"];

/// At most this many extra attributes per fragment.
const MAX_FRAGMENT_ATTRIBUTES: usize = 3;

/// At most this many classes in a simple descriptor.
const MAX_SIMPLE_CLASSES: usize = 2;

/// Describe one element in full attribute-selector form:
/// `tag[id="..."][class="..."][attr="value"]...`.
///
/// Purely descriptive; no uniqueness guarantee. Id, class, and attribute
/// values are emitted verbatim, so a literal quote or bracket in them
/// produces a selector that will not parse downstream. Known limitation,
/// kept as-is.
pub fn describe_element<E: DomNode>(element: &E, options: &SelectorOptions) -> String {
    let mut fragment = element.tag_name();

    if options.include_ids {
        if let Some(id) = element.id() {
            if !id.is_empty() {
                fragment.push_str(&format!("[id=\"{}\"]", id));
            }
        }
    }

    if options.include_classes {
        let classes = element
            .classes()
            .into_iter()
            .filter(|class| !is_reserved_class(class))
            .collect::<Vec<_>>()
            .join(" ");

        if !classes.is_empty() {
            fragment.push_str(&format!("[class=\"{}\"]", classes));
        }
    }

    if options.include_attributes {
        for (name, value) in element
            .attributes()
            .into_iter()
            .filter(|(name, _)| !SKIPPED_ATTRIBUTES.contains(&name.as_str()))
            .take(MAX_FRAGMENT_ATTRIBUTES)
        {
            fragment.push_str(&format!("[{}=\"{}\"]", name, value));
        }
    }

    fragment
}

/// Compact descriptor used while the optimized strategy widens its
/// context: tag, then either `#id` (returned immediately) or up to two
/// classes, plus a same-tag position when the element has same-tag
/// siblings.
pub fn simple_descriptor<E: DomNode>(element: &E) -> String {
    let tag = element.tag_name();

    if let Some(id) = element.id() {
        if !id.is_empty() {
            return format!("{}#{}", tag, escape_css_identifier(&id));
        }
    }

    let mut fragment = tag;

    for class in element
        .classes()
        .iter()
        .filter(|class| !is_reserved_class(class))
        .take(MAX_SIMPLE_CLASSES)
    {
        fragment.push('.');
        fragment.push_str(&escape_css_identifier(class));
    }

    if let Some(position) = same_tag_position(element) {
        fragment.push_str(&format!(":nth-of-type({})", position));
    }

    fragment
}

/// 1-based position among siblings sharing the element's tag, or `None`
/// when the element is the only one of its tag under its parent.
pub fn same_tag_position<E: DomNode>(element: &E) -> Option<usize> {
    let parent = element.parent()?;
    let tag = element.tag_name();

    let same_tag: Vec<E> = parent
        .children()
        .into_iter()
        .filter(|sibling| sibling.tag_name() == tag)
        .collect();

    if same_tag.len() < 2 {
        return None;
    }

    same_tag
        .iter()
        .position(|sibling| sibling.is_same(element))
        .map(|index| index + 1)
}

/// 1-based position among all element siblings, or `None` when the
/// element is an only child.
pub fn sibling_position<E: DomNode>(element: &E) -> Option<usize> {
    let parent = element.parent()?;
    let siblings = parent.children();

    if siblings.len() < 2 {
        return None;
    }

    siblings
        .iter()
        .position(|sibling| sibling.is_same(element))
        .map(|index| index + 1)
}
