//! CSV export of analysis results.
//!
//! The document layout is fixed: a `text,label,score` header, then one row
//! per result with the text double-quoted (inner quotes doubled) and the
//! label and score unquoted. Every row ends with `\n`.

use crate::error::ExportError;
use crate::types::ReviewResult;

/// File name offered to the browser / written by the CLI.
pub const EXPORT_FILENAME: &str = "review_analysis_export.csv";

/// MIME type declared for the download.
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// Header row of the CSV document.
pub const CSV_HEADER: &str = "text,label,score";

/// Side-effecting download target (browser anchor, directory on disk, ...).
pub trait Download {
    /// Hand `bytes` to the user as a file called `filename`.
    fn save(&self, filename: &str, mime: &str, bytes: &[u8]) -> Result<(), ExportError>;
}

/// Render results as a CSV document.
pub fn to_csv(results: &[ReviewResult]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + results.len() * 48);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for result in results {
        out.push_str(&csv_row(result));
        out.push('\n');
    }
    out
}

fn csv_row(result: &ReviewResult) -> String {
    format!(
        "\"{}\",{},{}",
        result.text.replace('"', "\"\""),
        result.label.as_label(),
        result.score
    )
}

/// Export `results` through `target` under the default file name.
///
/// Returns `Ok(false)` without touching the target when there is nothing to
/// export.
pub fn export_results(results: &[ReviewResult], target: &dyn Download) -> Result<bool, ExportError> {
    export_results_as(results, EXPORT_FILENAME, target)
}

/// Like [`export_results`] with an explicit file name.
pub fn export_results_as(
    results: &[ReviewResult],
    filename: &str,
    target: &dyn Download,
) -> Result<bool, ExportError> {
    if results.is_empty() {
        tracing::debug!("export skipped: no results");
        return Ok(false);
    }
    let csv = to_csv(results);
    target.save(filename, CSV_MIME, csv.as_bytes())?;
    tracing::info!(rows = results.len(), filename, "exported results");
    Ok(true)
}
