use selector_forge::selector::full_path::build_full_path;
use selector_forge::selector::selector_model::SelectorOptions;

use crate::common::fixtures::{options, page, target};

mod common;

// ============================================================================
// Anchoring and termination
// ============================================================================

#[test]
fn path_is_anchored_at_body() {
    let doc = page(r#"<div id="app"><p>content</p></div>"#);

    assert_eq!(
        build_full_path(&target(&doc, "#app"), &options()),
        r#"body > div[id="app"]"#
    );
}

#[test]
fn nested_path_describes_every_level() {
    let doc = page(r#"<div class="outer"><section><p>x</p></section></div>"#);

    assert_eq!(
        build_full_path(&target(&doc, "p"), &options()),
        r#"body > div[class="outer"] > section > p"#
    );
}

#[test]
fn walk_stops_at_main_without_body_anchor() {
    let doc = page("<main><section><p>x</p></section></main>");

    assert_eq!(
        build_full_path(&target(&doc, "p"), &options()),
        "main > section > p",
        "The main landmark ends the walk; no body segment is added"
    );
}

#[test]
fn depth_limit_cuts_the_path_and_skips_the_body_anchor() {
    let doc = page(r#"<div id="a"><div id="b"><div id="c">x</div></div></div>"#);
    let shallow = SelectorOptions {
        depth: 2,
        ..SelectorOptions::default()
    };

    assert_eq!(
        build_full_path(&target(&doc, "#c"), &shallow),
        r#"div[id="b"] > div[id="c"]"#,
        "Two levels walked, no room left for the body segment"
    );
}

#[test]
fn body_and_root_targets_yield_empty_string() {
    let doc = page("<p>x</p>");

    assert_eq!(
        build_full_path(&target(&doc, "body"), &options()),
        "",
        "No selector available for the body itself"
    );
    assert_eq!(
        build_full_path(&target(&doc, "html"), &options()),
        "",
        "No selector available for the document root"
    );
}

// ============================================================================
// Fragment content
// ============================================================================

#[test]
fn reserved_marker_classes_never_leak() {
    let doc = page(
        r#"<div class="selector-copy-highlight wrap"><span class="selector-copy-copied">x</span></div>"#,
    );

    let path = build_full_path(&target(&doc, "span"), &options());
    assert_eq!(path, r#"body > div[class="wrap"] > span"#);
    assert!(
        !path.contains("selector-copy"),
        "Marker classes must not appear: {}",
        path
    );
}

#[test]
fn id_values_are_emitted_verbatim_even_when_unsafe() {
    let doc = page(r#"<div id='he"llo'>x</div>"#);

    assert_eq!(
        build_full_path(&target(&doc, "div"), &options()),
        r#"body > div[id="he"llo"]"#,
        "Attribute form is deliberately unescaped; consumers may fail to parse it"
    );
}

#[test]
fn attributes_appear_when_enabled() {
    let doc = page(r#"<a href="/x" rel="nofollow">go</a>"#);
    let with_attributes = SelectorOptions {
        include_attributes: true,
        ..SelectorOptions::default()
    };

    let path = build_full_path(&target(&doc, "a"), &with_attributes);
    assert!(
        path.contains(r#"[href="/x"]"#) && path.contains(r#"[rel="nofollow"]"#),
        "Both attributes should be present: {}",
        path
    );
}

#[test]
fn generation_is_idempotent() {
    let doc = page(r#"<div class="outer"><p>x</p></div>"#);
    let element = target(&doc, "p");

    assert_eq!(
        build_full_path(&element, &options()),
        build_full_path(&element, &options()),
        "Same tree, same config, same string"
    );
}
