//! View model for a titled, single-polarity review list, plus the clipboard
//! seam used by its "copy" action.

use serde::Serialize;

use crate::error::ClipboardError;
use crate::highlight::{Fragment, Highlighter};
use crate::types::{Polarity, ReviewResult};

/// System clipboard collaborator.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Copy a review's text. Failures are logged and swallowed; the return value
/// tells the view whether to show the confirmation.
pub fn copy_review(review: &ReviewResult, clipboard: &dyn Clipboard) -> bool {
    match clipboard.write_text(&review.text) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!("copy ignored: {err}");
            false
        }
    }
}

/// Renderable list: title with count and highlighted items.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReviewListModel {
    pub title: String,
    pub variant: Polarity,
    pub items: Vec<ReviewItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReviewItem {
    /// Original text, used by the copy action.
    pub text: String,
    pub fragments: Vec<Fragment>,
    /// Score with two decimals.
    pub score: String,
}

impl ReviewListModel {
    /// Build the list from results of any polarity; results whose label does
    /// not match `variant` are skipped.
    pub fn build(
        title: impl Into<String>,
        results: &[ReviewResult],
        variant: Polarity,
        highlighter: &Highlighter,
    ) -> Self {
        let items = results
            .iter()
            .filter(|r| r.label == variant)
            .map(|r| ReviewItem {
                text: r.text.clone(),
                fragments: highlighter.highlight(&r.text, variant),
                score: r.formatted_score(),
            })
            .collect();
        Self {
            title: title.into(),
            variant,
            items,
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Heading text, e.g. `Positive Reviews (3)`.
    pub fn heading(&self) -> String {
        format!("{} ({})", self.title, self.count())
    }
}
