//! CSS styles for the HTML report.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use review_report::styles::REPORT_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", REPORT_CSS, my_css);
//! ```

/// Complete CSS for the report.
///
/// Light card layout: overview (chart and summary) on top, the two review
/// lists side by side below, stacking on narrow screens.
pub const REPORT_CSS: &str = r#"
:root {
    --bg-page: #f8fafc;
    --bg-card: #ffffff;
    --text-main: #1f2937;
    --text-dim: #6b7280;
    --border-subtle: #e5e7eb;
    --positive: #22c55e;
    --positive-soft: #dcfce7;
    --positive-ink: #166534;
    --negative: #ef4444;
    --negative-soft: #fee2e2;
    --negative-ink: #991b1b;
    --font-sans: system-ui, -apple-system, 'Segoe UI', sans-serif;
    --container-max: 1100px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-sans);
    background: var(--bg-page);
    color: var(--text-main);
    line-height: 1.5;
    margin: 0;
}

.report {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 32px 24px;
}

.report-header h1 {
    font-size: 28px;
    margin: 0 0 24px;
}

h2, h3 {
    display: flex;
    align-items: center;
    gap: 8px;
    margin: 0 0 16px;
}

.icon-sm {
    width: 18px;
    height: 18px;
}

/* Overview */
.overview,
.review-list {
    background: var(--bg-card);
    border: 1px solid var(--border-subtle);
    border-radius: 12px;
    padding: 20px 24px;
    margin-bottom: 24px;
}

.overview-grid {
    display: flex;
    flex-wrap: wrap;
    gap: 32px;
    align-items: center;
}

.empty-state,
.review-empty {
    color: var(--text-dim);
    font-style: italic;
}

/* Pie chart */
.sentiment-pie {
    display: flex;
    flex-direction: column;
    align-items: center;
}

.pie-legend {
    list-style: none;
    display: flex;
    gap: 16px;
    padding: 0;
    margin: 12px 0 0;
    font-size: 14px;
}

.legend-item {
    display: flex;
    align-items: center;
    gap: 6px;
}

.legend-swatch {
    display: inline-block;
    width: 12px;
    height: 12px;
    border-radius: 2px;
}

/* Summary */
.analysis-summary {
    flex: 1;
    min-width: 260px;
}

.summary-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(120px, 1fr));
    gap: 12px;
}

.summary-stat {
    display: flex;
    flex-direction: column;
    padding: 12px;
    border: 1px solid var(--border-subtle);
    border-radius: 8px;
}

.stat-value {
    font-size: 22px;
    font-weight: 700;
}

.stat-positive { color: var(--positive-ink); }
.stat-negative { color: var(--negative-ink); }

.stat-label {
    font-size: 12px;
    color: var(--text-dim);
}

/* Review lists */
.review-columns {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: 24px;
}

.review-list-positive h3 { color: var(--positive-ink); }
.review-list-negative h3 { color: var(--negative-ink); }

.review-items {
    list-style: none;
    padding: 0;
    margin: 0;
    max-height: 480px;
    overflow-y: auto;
}

.review-item {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    gap: 12px;
    padding: 10px 0;
    border-bottom: 1px solid var(--border-subtle);
}

.review-item:last-child {
    border-bottom: none;
}

.review-text {
    margin: 0;
    white-space: pre-wrap;
    word-break: break-word;
}

.kw {
    font-weight: 600;
    border-radius: 3px;
    padding: 0 2px;
}

.kw-positive { background: var(--positive-soft); color: var(--positive-ink); }
.kw-negative { background: var(--negative-soft); color: var(--negative-ink); }

.score-badge {
    flex-shrink: 0;
    font-size: 12px;
    font-weight: 600;
    padding: 2px 8px;
    border-radius: 999px;
}

.score-positive { background: var(--positive-soft); color: var(--positive-ink); }
.score-negative { background: var(--negative-soft); color: var(--negative-ink); }

@media print {
    body { background: #ffffff; }
    .review-items { max-height: none; overflow: visible; }
}
"#;

/// Content Security Policy for the report: inline styles only, no scripts
/// and no network access.
pub const CSP: &str = "default-src 'none'; img-src data:; style-src 'unsafe-inline'; script-src 'none'; connect-src 'none';";
