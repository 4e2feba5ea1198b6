//! Classifier seam.
//!
//! The sentiment model is an opaque external collaborator. A [`ModelLoader`]
//! produces a [`Classifier`] once; the classifier then answers whole batches.
//! Backends decode their wire output into [`RawPrediction`]s and run them
//! through [`decode_batch`] so every backend enforces the same contract:
//! one verdict per input, known labels, scores in `[0, 1]`.

use serde::Deserialize;

use crate::error::ClassifierError;
use crate::types::{Classification, Polarity};

/// Batch sentiment classifier.
#[allow(async_fn_in_trait)]
pub trait Classifier {
    /// Classify `texts`, returning one verdict per input in input order.
    async fn classify_batch(&self, texts: &[String]) -> Result<Vec<Classification>, ClassifierError>;
}

/// One-shot model initialisation.
#[allow(async_fn_in_trait)]
pub trait ModelLoader {
    type Classifier: Classifier;

    async fn load(&self) -> Result<Self::Classifier, ClassifierError>;
}

/// Undecoded verdict as most pipelines emit it: `{"label": "...", "score": ...}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawPrediction {
    pub label: String,
    pub score: f64,
}

/// Validate raw predictions for a batch of `expected` inputs.
pub fn decode_batch(
    expected: usize,
    raw: Vec<RawPrediction>,
) -> Result<Vec<Classification>, ClassifierError> {
    if raw.len() != expected {
        return Err(ClassifierError::LengthMismatch {
            expected,
            got: raw.len(),
        });
    }
    raw.into_iter().map(decode).collect()
}

fn decode(raw: RawPrediction) -> Result<Classification, ClassifierError> {
    let label: Polarity = raw.label.parse()?;
    if !(0.0..=1.0).contains(&raw.score) {
        return Err(ClassifierError::ScoreOutOfRange(raw.score));
    }
    Ok(Classification::new(label, raw.score))
}
