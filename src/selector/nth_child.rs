use crate::dom::node::DomNode;
use crate::selector::descriptor::{same_tag_position, sibling_position};
use crate::selector::escape::escape_css_identifier;
use crate::selector::selector_model::{SelectorOptions, is_reserved_class};

// ============================================================================
// Nth-child builder — positional qualifiers, id short-circuit
// ============================================================================

/// Same outer walk as the full-path builder, but each level is qualified
/// by sibling position instead of full attribute descriptors:
///
/// - an id ends the walk with `tag#escaped-id`, specific enough on its
///   own, no ancestors needed
/// - `:nth-of-type(k)` among same-tag siblings when there is more than
///   one, else `:nth-child(k)` among all siblings when there is more
///   than one
/// - `.class` suffixes only when no positional qualifier was added
pub fn build_nth_child<E: DomNode>(target: &E, options: &SelectorOptions) -> String {
    let mut path: Vec<String> = Vec::new();
    let mut cursor = Some(target.clone());
    let mut found_main = false;
    let mut depth = 0;

    while let Some(element) = cursor {
        if element.is_document_body() || element.is_document_root() || depth >= options.depth {
            cursor = Some(element);
            break;
        }

        let mut fragment = element.tag_name();

        let id = if options.include_ids {
            element.id().filter(|id| !id.is_empty())
        } else {
            None
        };

        if let Some(id) = id {
            fragment.push('#');
            fragment.push_str(&escape_css_identifier(&id));
            path.insert(0, fragment);
            // The id anchors the path; no body prepend applies here.
            cursor = Some(element);
            break;
        }

        let mut positioned = false;
        if let Some(position) = same_tag_position(&element) {
            fragment.push_str(&format!(":nth-of-type({})", position));
            positioned = true;
        } else if let Some(position) = sibling_position(&element) {
            fragment.push_str(&format!(":nth-child({})", position));
            positioned = true;
        }

        if options.include_classes && !positioned {
            for class in element
                .classes()
                .iter()
                .filter(|class| !is_reserved_class(class))
            {
                fragment.push('.');
                fragment.push_str(&escape_css_identifier(class));
            }
        }

        path.insert(0, fragment);
        depth += 1;

        if element.tag_name().eq_ignore_ascii_case("main") {
            found_main = true;
            cursor = Some(element);
            break;
        }

        cursor = element.parent();
    }

    if !found_main
        && !path.is_empty()
        && depth < options.depth
        && !target.is_document_body()
        && cursor.map_or(false, |element| element.is_document_body())
    {
        path.insert(0, "body".to_string());
    }

    path.join(" > ")
}
