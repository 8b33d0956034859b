use crate::dom::node::DomNode;
use crate::selector::descriptor::describe_element;
use crate::selector::selector_model::SelectorOptions;

// ============================================================================
// Full-path builder — every ancestor level in full descriptor form
// ============================================================================

/// Walk upward from `target`, describing each level, until the body or
/// document root is reached, a `main` landmark is hit, or the depth limit
/// runs out. Levels are joined child-combinator style (`" > "`).
///
/// When the walk reached the body with depth to spare, a literal `body`
/// segment is prepended so the path is anchored. A body or root target
/// yields an empty string: no selector available.
pub fn build_full_path<E: DomNode>(target: &E, options: &SelectorOptions) -> String {
    let mut path: Vec<String> = Vec::new();
    let mut cursor = Some(target.clone());
    let mut found_main = false;
    let mut depth = 0;

    while let Some(element) = cursor {
        if element.is_document_body() || element.is_document_root() || depth >= options.depth {
            cursor = Some(element);
            break;
        }

        path.insert(0, describe_element(&element, options));
        depth += 1;

        // Stop at the main content container.
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
