//! Leptos UI components for rendering HTML reports.
//!
//! Each component is a Leptos `#[component]` function rendered on the
//! server; the report carries no scripts.
//!
//! # Component Hierarchy
//!
//! ```text
//! ReportDocument
//! ├── AnalysisSummary
//! ├── SentimentPie
//! │   └── PieLegend
//! ├── ReviewListPanel (positive)
//! └── ReviewListPanel (negative)
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_report`], but
//! can be used directly for custom layouts:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use review_report::components::SentimentPie;
//!
//! view! { <SentimentPie chart=summary size=200.0 /> }
//! ```

mod document;
mod icons;
mod review_list;
mod sentiment_pie;
mod summary;

pub use document::ReportDocument;
pub use icons::*;
pub use review_list::ReviewListPanel;
pub use sentiment_pie::{PieLegend, SentimentPie};
pub use summary::AnalysisSummary;
