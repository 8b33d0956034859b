use crate::dom::document::{FetchOptions, HtmlDocument};
use crate::dom::node::{RecordingOracle, SelectorOracle};
use crate::report::console::{format_check_report, format_console_report, format_inspect_report};
use crate::report::json::generate_json_report;
use crate::report::report_model::{SelectorReport, StrategyResult, TargetReport};
use crate::selector::selector_model::{SelectorOptions, Strategy, generate_selector};

// ============================================================================
// Source loading
// ============================================================================

/// Load the document from --input or --url (exactly one required).
/// Returns the document and a display label for the source.
pub fn load_document(
    input: Option<&str>,
    url: Option<&str>,
    fetch: &FetchOptions,
    verbose: u8,
) -> Result<(HtmlDocument, String), Box<dyn std::error::Error>> {
    match (input, url) {
        (Some(path), None) => {
            if verbose > 0 {
                eprintln!("Reading {}...", path);
            }
            Ok((HtmlDocument::from_file(path)?, path.to_string()))
        }
        (None, Some(url)) => {
            if verbose > 0 {
                eprintln!("Fetching {}...", url);
            }
            Ok((HtmlDocument::from_url(url, fetch)?, url.to_string()))
        }
        _ => Err("Exactly one of --input or --url must be given".into()),
    }
}

// ============================================================================
// generate subcommand
// ============================================================================

/// Generate selectors with the configured strategy and return whether
/// every target produced one (an empty result means "nothing to copy").
pub fn cmd_generate(
    input: Option<&str>,
    url: Option<&str>,
    target: &str,
    all: bool,
    options: &SelectorOptions,
    fetch: &FetchOptions,
    format: &str,
    output: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let (document, source) = load_document(input, url, fetch, verbose)?;

    let mut targets = document.select_all(target)?;
    if targets.is_empty() {
        return Err(crate::dom::error::DomError::TargetNotFound {
            selector: target.to_string(),
        }
        .into());
    }
    if !all {
        targets.truncate(1);
    }

    if verbose > 0 {
        eprintln!(
            "Generating {} selector(s) with strategy '{}'...",
            targets.len(),
            options.strategy.name()
        );
    }

    let mut results = Vec::new();
    for (index, element) in targets.iter().enumerate() {
        let selector = generate_selector(element, &document, options);
        results.push(TargetReport {
            index,
            strategies: vec![StrategyResult::evaluated(
                options.strategy,
                selector,
                &document,
            )],
        });
    }

    let report = SelectorReport {
        source,
        target: target.to_string(),
        results,
    };
    let all_generated = report.all_generated();

    if !all_generated {
        eprintln!("Warning: no selector available for a body or document-root target");
    }

    let content = match format {
        "json" => generate_json_report(&report)?,
        _ => format_console_report(&report),
    };

    match output {
        Some(path) => std::fs::write(path, &content)?,
        None => print!("{}", content),
    }

    Ok(all_generated)
}

// ============================================================================
// inspect subcommand
// ============================================================================

/// Run every strategy against one target and report each result with its
/// match count, plus the candidates the optimized strategy probed.
pub fn cmd_inspect(
    input: Option<&str>,
    url: Option<&str>,
    target: &str,
    options: &SelectorOptions,
    fetch: &FetchOptions,
    format: &str,
    output: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let (document, source) = load_document(input, url, fetch, verbose)?;
    let element = document.select_first(target)?;

    let mut strategies = Vec::new();
    for strategy in Strategy::all() {
        let result = if strategy == Strategy::Optimized {
            let recorder = RecordingOracle::new(&document);
            let selector = strategy.build_path(&element, &recorder, options);
            StrategyResult::evaluated(strategy, selector, &document)
                .with_probes(recorder.into_attempts())
        } else {
            let selector = strategy.build_path(&element, &document, options);
            StrategyResult::evaluated(strategy, selector, &document)
        };
        strategies.push(result);
    }

    let report = SelectorReport {
        source,
        target: target.to_string(),
        results: vec![TargetReport {
            index: 0,
            strategies,
        }],
    };

    let content = match format {
        "json" => generate_json_report(&report)?,
        _ => format_inspect_report(&report),
    };

    match output {
        Some(path) => std::fs::write(path, &content)?,
        None => print!("{}", content),
    }

    Ok(())
}

// ============================================================================
// check subcommand
// ============================================================================

/// Report how many elements a selector matches and return whether it is
/// unique. An invalid selector reports as not unique, never as an error.
pub fn cmd_check(
    input: Option<&str>,
    url: Option<&str>,
    selector: &str,
    fetch: &FetchOptions,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let (document, source) = load_document(input, url, fetch, verbose)?;

    let matches = document.match_count(selector);
    print!("{}", format_check_report(&source, selector, matches));

    Ok(matches == Some(1))
}
