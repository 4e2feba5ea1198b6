//! # review-report
//!
//! Leptos SSR renderer for standalone review sentiment reports.
//!
//! The report mirrors the browser app's results panel: an overview with the
//! sentiment pie chart and summary figures, then the positive and negative
//! review lists with keywords highlighted. The output is a single HTML file
//! with inline CSS and no scripts.
//!
//! ## Quick Start
//!
//! ```rust
//! use review_insight::{Highlighter, Polarity, ReviewResult};
//! use review_report::{render_report, ReportOptions};
//!
//! let results = vec![
//!     ReviewResult::new("I love this", Polarity::Positive, 0.99),
//!     ReviewResult::new("This is bad", Polarity::Negative, 0.85),
//! ];
//!
//! let html = render_report(&results, Highlighter::builtin(), &ReportOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Leptos 0.8 SSR
//!
//! Views are rendered with the `RenderHtml` trait; no reactive runtime or
//! hydration is involved.

#![warn(missing_docs)]

pub mod components;
pub mod styles;

use components::ReportDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use review_insight::session::summarize;
use review_insight::{ChartSummary, Highlighter, Polarity, ReviewListModel, ReviewResult};

/// Titles and sizing for a rendered report.
#[derive(Clone, Debug)]
pub struct ReportOptions {
    /// Document and header title
    pub title: String,
    /// Heading of the positive list
    pub positive_title: String,
    /// Heading of the negative list
    pub negative_title: String,
    /// Width and height of the pie chart in pixels
    pub chart_size: f64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "Review Insight Report".into(),
            positive_title: "Positive Reviews".into(),
            negative_title: "Negative Reviews".into(),
            chart_size: 240.0,
        }
    }
}

/// Render a complete HTML report for `results`.
///
/// Returns a complete document including `<!DOCTYPE html>`.
pub fn render_report(
    results: &[ReviewResult],
    highlighter: &Highlighter,
    options: &ReportOptions,
) -> String {
    let positive = ReviewListModel::build(
        options.positive_title.clone(),
        results,
        Polarity::Positive,
        highlighter,
    );
    let negative = ReviewListModel::build(
        options.negative_title.clone(),
        results,
        Polarity::Negative,
        highlighter,
    );

    let doc = view! {
        <ReportDocument
            title=options.title.clone()
            summary=summarize(results)
            chart=ChartSummary::from_items(results)
            chart_size=options.chart_size
            positive=positive
            negative=negative
        />
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}
