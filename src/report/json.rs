use crate::report::report_model::SelectorReport;

// ============================================================================
// JSON reporter — machine-readable output for piping into other tools
// ============================================================================

/// Serialize a report as pretty-printed JSON.
pub fn generate_json_report(report: &SelectorReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
