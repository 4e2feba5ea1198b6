//! # review-insight
//!
//! Sentiment analysis sessions for product reviews.
//!
//! The crate holds everything that is not tied to a particular front end:
//! splitting input into review lines, driving an external sentiment
//! classifier, and turning its verdicts into lists, a pie chart and a CSV
//! export. Side effects (the model, the clipboard, file downloads) sit behind
//! small traits so the browser app, the CLI and tests plug in their own.
//!
//! ## Quick Start
//!
//! ```rust
//! use review_insight::{Classification, Polarity, Session};
//!
//! let mut session = Session::new();
//! session.model_loaded();
//! session.set_input("I love this\nThis is bad");
//!
//! let batch = session.begin_analysis().unwrap().unwrap();
//! // ...hand batch.lines() to a classifier, then:
//! let verdicts = vec![
//!     Classification::new(Polarity::Positive, 0.99),
//!     Classification::new(Polarity::Negative, 0.85),
//! ];
//! session.complete_analysis(batch, Ok(verdicts)).unwrap();
//!
//! assert_eq!(session.chart().percentages(), Some((50, 50)));
//! ```
//!
//! ## Modules
//!
//! - [`session`] - session state machine and async controller
//! - [`classifier`] - classifier and model loader traits
//! - [`highlight`] - keyword highlighting
//! - [`export`] - CSV export and the download seam
//! - [`chart`] - pie chart counts and geometry
//! - [`review_list`] - list view model and the clipboard seam
//! - [`corpus`] - example reviews
//! - [`config`] - `.review-insight/config.toml`

pub mod chart;
pub mod classifier;
pub mod config;
pub mod corpus;
pub mod error;
pub mod export;
pub mod highlight;
pub mod review_list;
pub mod session;
pub mod types;

pub use chart::{ChartSummary, PieChart, PieSlice, SliceShape};
pub use classifier::{Classifier, ModelLoader, RawPrediction, decode_batch};
pub use config::InsightConfig;
pub use error::{ClassifierError, ClipboardError, ConfigError, ExportError, SessionError};
pub use export::{Download, export_results, to_csv};
pub use highlight::{Fragment, Highlighter, highlight};
pub use review_list::{Clipboard, ReviewListModel, copy_review};
pub use session::{ModelStatus, Phase, Session, SessionController, SessionSummary};
pub use types::{Classification, Labeled, Polarity, ReviewResult};
