use crate::report::report_model::{SelectorReport, StrategyResult};

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a generation report for terminal output.
///
/// Produces output like:
/// ```text
/// === Selector generation: page.html ===
///
/// Target: .toolbar button — 2 element(s)
///
/// [0] full: body > div[class="toolbar"] > button
///       matches: 2
///
/// === 2 selector(s) generated ===
/// ```
pub fn format_console_report(report: &SelectorReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Selector generation: {} ===\n\n", report.source));
    out.push_str(&format!(
        "Target: {} — {} element(s)\n\n",
        report.target,
        report.results.len()
    ));

    for target in &report.results {
        for result in &target.strategies {
            out.push_str(&format_result_line(target.index, result));
        }
    }

    out.push_str(&format!(
        "\n=== {} selector(s) generated ===\n",
        report.generated_count()
    ));

    out
}

/// Format an inspection report: every strategy's answer for one target,
/// with uniqueness markers, plus the candidates the optimized strategy
/// probed.
pub fn format_inspect_report(report: &SelectorReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Strategy inspection: {} ===\n\n", report.source));
    out.push_str(&format!("Target: {}\n\n", report.target));

    for target in &report.results {
        for result in &target.strategies {
            let marker = match result.unique {
                Some(true) => "\u{2713}",
                Some(false) => "\u{2717}",
                None => "-",
            };

            out.push_str(&format!(
                "{} {:<10} {}{}\n",
                marker,
                result.strategy.name(),
                selector_or_placeholder(result),
                format_match_note(result)
            ));
        }

        // Probe history, shown after the strategy lines
        for result in &target.strategies {
            if result.probes.is_empty() {
                continue;
            }

            out.push_str(&format!("\nCandidates probed ({}):\n", result.strategy.name()));
            for probe in &result.probes {
                let note = match probe.matches {
                    Some(n) => format!("{} match(es)", n),
                    None => "did not parse".to_string(),
                };
                out.push_str(&format!("  {} — {}\n", probe.selector, note));
            }
        }
    }

    out
}

/// Format a uniqueness check for one selector string.
pub fn format_check_report(source: &str, selector: &str, matches: Option<usize>) -> String {
    let verdict = match matches {
        Some(1) => "1 match — unique".to_string(),
        Some(n) => format!("{} matches — not unique", n),
        None => "invalid selector — treated as not unique".to_string(),
    };

    format!(
        "=== Selector check: {} ===\n\n{}\n  {}\n",
        source, selector, verdict
    )
}

fn format_result_line(index: usize, result: &StrategyResult) -> String {
    let mut line = format!(
        "[{}] {}: {}\n",
        index,
        result.strategy.name(),
        selector_or_placeholder(result)
    );

    if let Some(matches) = result.matches {
        line.push_str(&format!("      matches: {}", matches));
        if result.unique == Some(true) {
            line.push_str(" (unique)");
        }
        line.push('\n');
    }

    line
}

fn selector_or_placeholder(result: &StrategyResult) -> &str {
    if result.selector.is_empty() {
        "(no selector available)"
    } else {
        &result.selector
    }
}

fn format_match_note(result: &StrategyResult) -> String {
    match (result.matches, &result.unique) {
        (Some(1), _) => "  [1 match]".to_string(),
        (Some(n), _) => format!("  [{} matches]", n),
        (None, Some(false)) => "  [did not parse]".to_string(),
        _ => String::new(),
    }
}
