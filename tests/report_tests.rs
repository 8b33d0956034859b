use selector_forge::dom::node::ProbeAttempt;
use selector_forge::report::console::{
    format_check_report, format_console_report, format_inspect_report,
};
use selector_forge::report::json::generate_json_report;
use selector_forge::report::report_model::{SelectorReport, StrategyResult, TargetReport};
use selector_forge::selector::selector_model::Strategy;

use crate::common::fixtures::page;

mod common;

fn sample_report() -> SelectorReport {
    let doc = page(r#"<ul><li class="hit">a</li><li class="hit">b</li></ul>"#);

    SelectorReport {
        source: "page.html".to_string(),
        target: "li".to_string(),
        results: vec![
            TargetReport {
                index: 0,
                strategies: vec![StrategyResult::evaluated(
                    Strategy::Optimized,
                    "li.hit:nth-of-type(1)".to_string(),
                    &doc,
                )],
            },
            TargetReport {
                index: 1,
                strategies: vec![StrategyResult::evaluated(
                    Strategy::Optimized,
                    "li.hit".to_string(),
                    &doc,
                )],
            },
        ],
    }
}

// ============================================================================
// Report model scoring
// ============================================================================

#[test]
fn evaluated_results_carry_oracle_verdicts() {
    let report = sample_report();

    let unique = &report.results[0].strategies[0];
    assert_eq!(unique.matches, Some(1));
    assert_eq!(unique.unique, Some(true));

    let ambiguous = &report.results[1].strategies[0];
    assert_eq!(ambiguous.matches, Some(2));
    assert_eq!(ambiguous.unique, Some(false));
}

#[test]
fn empty_selector_gets_no_verdict() {
    let doc = page("<p>x</p>");
    let result = StrategyResult::evaluated(Strategy::FullPath, String::new(), &doc);

    assert_eq!(result.matches, None);
    assert_eq!(result.unique, None);
}

#[test]
fn invalid_selector_scores_as_not_unique() {
    let doc = page("<p>x</p>");
    let result = StrategyResult::evaluated(Strategy::FullPath, "p[".to_string(), &doc);

    assert_eq!(result.matches, None, "No match count for unparseable output");
    assert_eq!(result.unique, Some(false), "Fails closed");
}

#[test]
fn report_counts_generated_selectors() {
    let report = sample_report();
    assert_eq!(report.generated_count(), 2);
    assert!(report.all_generated());

    let doc = page("<p>x</p>");
    let empty = SelectorReport {
        source: "page.html".to_string(),
        target: "body".to_string(),
        results: vec![TargetReport {
            index: 0,
            strategies: vec![StrategyResult::evaluated(
                Strategy::FullPath,
                String::new(),
                &doc,
            )],
        }],
    };
    assert_eq!(empty.generated_count(), 0);
    assert!(!empty.all_generated());
}

// ============================================================================
// Console formatting
// ============================================================================

#[test]
fn console_report_shows_selectors_and_summary() {
    let out = format_console_report(&sample_report());

    assert!(out.contains("=== Selector generation: page.html ==="), "{}", out);
    assert!(out.contains("li.hit:nth-of-type(1)"), "{}", out);
    assert!(out.contains("matches: 1 (unique)"), "{}", out);
    assert!(out.contains("matches: 2"), "{}", out);
    assert!(out.contains("=== 2 selector(s) generated ==="), "{}", out);
}

#[test]
fn console_report_marks_missing_selectors() {
    let doc = page("<p>x</p>");
    let report = SelectorReport {
        source: "page.html".to_string(),
        target: "body".to_string(),
        results: vec![TargetReport {
            index: 0,
            strategies: vec![StrategyResult::evaluated(
                Strategy::FullPath,
                String::new(),
                &doc,
            )],
        }],
    };

    let out = format_console_report(&report);
    assert!(out.contains("(no selector available)"), "{}", out);
    assert!(out.contains("=== 0 selector(s) generated ==="), "{}", out);
}

#[test]
fn inspect_report_shows_markers_and_probes() {
    let doc = page(r#"<ul><li class="hit">a</li><li class="hit">b</li></ul>"#);
    let report = SelectorReport {
        source: "page.html".to_string(),
        target: "li".to_string(),
        results: vec![TargetReport {
            index: 0,
            strategies: vec![
                StrategyResult::evaluated(Strategy::NthChild, "li.hit".to_string(), &doc),
                StrategyResult::evaluated(
                    Strategy::Optimized,
                    "li.hit:nth-of-type(1)".to_string(),
                    &doc,
                )
                .with_probes(vec![
                    ProbeAttempt {
                        selector: "li.hit".to_string(),
                        matches: Some(2),
                    },
                    ProbeAttempt {
                        selector: "li.hit:nth-of-type(1)".to_string(),
                        matches: Some(1),
                    },
                ]),
            ],
        }],
    };

    let out = format_inspect_report(&report);
    assert!(out.contains("=== Strategy inspection: page.html ==="), "{}", out);
    assert!(out.contains('\u{2713}'), "Unique marker present: {}", out);
    assert!(out.contains('\u{2717}'), "Non-unique marker present: {}", out);
    assert!(out.contains("Candidates probed (optimized):"), "{}", out);
    assert!(out.contains("li.hit — 2 match(es)"), "{}", out);
}

#[test]
fn check_report_verdicts() {
    assert!(
        format_check_report("page.html", "span", Some(1)).contains("1 match — unique")
    );
    assert!(
        format_check_report("page.html", "p", Some(3)).contains("3 matches — not unique")
    );
    assert!(
        format_check_report("page.html", "div[", None)
            .contains("invalid selector — treated as not unique")
    );
}

// ============================================================================
// JSON formatting
// ============================================================================

#[test]
fn json_report_round_trips() {
    let report = sample_report();
    let json = generate_json_report(&report).expect("serializable report");

    let parsed: SelectorReport = serde_json::from_str(&json).expect("valid json");
    assert_eq!(parsed.source, "page.html");
    assert_eq!(parsed.results.len(), 2);
    assert_eq!(
        parsed.results[0].strategies[0].selector,
        "li.hit:nth-of-type(1)"
    );
    assert_eq!(parsed.results[0].strategies[0].unique, Some(true));
}

#[test]
fn json_report_omits_empty_probe_lists() {
    let report = sample_report();
    let json = generate_json_report(&report).expect("serializable report");

    assert!(
        !json.contains("probes"),
        "Empty probe lists are skipped: {}",
        json
    );
}
