//! Analysis session: state machine and controller.
//!
//! [`Session`] is plain state with synchronous transitions, so UI frameworks
//! can keep it in a signal and drive the single await point themselves:
//!
//! ```text
//! ModelLoading ──load ok──▶ ModelReady ──begin──▶ Analyzing ──complete──▶ ModelReady
//!      │                        ▲
//!      └──load err──▶ ModelFailed ──retry──▶ ModelLoading
//! ```
//!
//! [`SessionController`] owns a [`ModelLoader`] and its classifier and runs the
//! same transitions end to end for native callers and tests.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::chart::ChartSummary;
use crate::classifier::{Classifier, ModelLoader};
use crate::corpus::{self, ExampleRange};
use crate::error::{ClassifierError, SessionError};
use crate::types::{Classification, Polarity, ReviewResult};

/// Model availability, surfaced to the UI.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum ModelStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Coarse session state, as shown by the analyze control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    ModelLoading,
    ModelReady,
    Analyzing,
    ModelFailed,
}

impl Phase {
    /// Text of the analyze control in this phase.
    pub fn action_label(self) -> &'static str {
        match self {
            Phase::ModelLoading => "Model Loading...",
            Phase::ModelReady => "Analyze Reviews",
            Phase::Analyzing => "Analyzing...",
            Phase::ModelFailed => "Model failed: retry",
        }
    }

    /// Whether a spinner belongs next to the label.
    pub fn is_busy(self) -> bool {
        matches!(self, Phase::ModelLoading | Phase::Analyzing)
    }
}

/// Lines handed to the classifier by [`Session::begin_analysis`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisBatch {
    lines: Vec<String>,
    generation: u64,
}

impl AnalysisBatch {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split input into review lines: one per line, blank lines dropped, text
/// kept verbatim. `\r\n` endings are accepted.
pub fn split_reviews(input: &str) -> Vec<String> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Aggregate figures over the current results.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SessionSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub mean_positive_score: Option<f64>,
    pub mean_negative_score: Option<f64>,
}

/// Session state owned by one controlling view.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Session {
    input_text: String,
    results: Vec<ReviewResult>,
    is_analyzing: bool,
    model: ModelStatus,
    #[serde(skip)]
    examples: ExampleRange,
    /// Bumped on every begin and on clear; a batch only completes while it
    /// still matches.
    #[serde(skip)]
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_example_range(examples: ExampleRange) -> Self {
        Self {
            examples,
            ..Self::default()
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn results(&self) -> &[ReviewResult] {
        &self.results
    }

    pub fn is_analyzing(&self) -> bool {
        self.is_analyzing
    }

    pub fn model(&self) -> &ModelStatus {
        &self.model
    }

    pub fn phase(&self) -> Phase {
        match (&self.model, self.is_analyzing) {
            (ModelStatus::Loading, _) => Phase::ModelLoading,
            (ModelStatus::Failed(_), _) => Phase::ModelFailed,
            (ModelStatus::Ready, true) => Phase::Analyzing,
            (ModelStatus::Ready, false) => Phase::ModelReady,
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    /// Reset input and results, whatever the state.
    ///
    /// A pending analysis is discarded: its completion is rejected with
    /// [`SessionError::Superseded`].
    pub fn clear(&mut self) {
        self.input_text.clear();
        self.results.clear();
        if self.is_analyzing {
            debug!("pending analysis discarded");
            self.is_analyzing = false;
            self.generation = self.generation.wrapping_add(1);
        }
    }

    /// Replace the input with a random pick from the example corpus.
    pub fn load_example<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.input_text = corpus::example_text(self.examples, rng);
        debug!(lines = self.input_text.lines().count(), "loaded example reviews");
    }

    pub fn model_loaded(&mut self) {
        info!("sentiment model ready");
        self.model = ModelStatus::Ready;
    }

    pub fn model_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!("sentiment model failed to load: {reason}");
        self.model = ModelStatus::Failed(reason);
    }

    /// Move a failed model back to loading. Returns `false` when the model is
    /// not in the failed state.
    pub fn begin_model_retry(&mut self) -> bool {
        if matches!(self.model, ModelStatus::Failed(_)) {
            debug!("retrying model load");
            self.model = ModelStatus::Loading;
            true
        } else {
            false
        }
    }

    /// Whether the analyze control should be enabled.
    pub fn can_analyze(&self) -> bool {
        self.model == ModelStatus::Ready && !self.is_analyzing && !self.input_text.trim().is_empty()
    }

    /// Start an analysis: clears previous results and hands out the batch.
    ///
    /// `Ok(None)` means the input had no non-blank lines; no classifier call
    /// is needed and the session stays ready.
    pub fn begin_analysis(&mut self) -> Result<Option<AnalysisBatch>, SessionError> {
        if self.model != ModelStatus::Ready {
            return Err(SessionError::ModelNotReady);
        }
        if self.is_analyzing {
            return Err(SessionError::AlreadyAnalyzing);
        }
        self.results.clear();

        let lines = split_reviews(&self.input_text);
        if lines.is_empty() {
            debug!("nothing to analyze");
            return Ok(None);
        }
        debug!(batch = lines.len(), "analysis started");
        self.is_analyzing = true;
        self.generation = self.generation.wrapping_add(1);
        Ok(Some(AnalysisBatch {
            lines,
            generation: self.generation,
        }))
    }

    /// Finish an analysis with the classifier's outcome.
    ///
    /// On failure the session returns to ready with no results.
    pub fn complete_analysis(
        &mut self,
        batch: AnalysisBatch,
        outcome: Result<Vec<Classification>, ClassifierError>,
    ) -> Result<&[ReviewResult], SessionError> {
        if batch.generation != self.generation {
            debug!("ignoring completion of a discarded analysis");
            return Err(SessionError::Superseded);
        }
        if !self.is_analyzing {
            return Err(SessionError::NotAnalyzing);
        }
        self.is_analyzing = false;

        let verdicts = outcome?;
        if verdicts.len() != batch.len() {
            return Err(ClassifierError::LengthMismatch {
                expected: batch.len(),
                got: verdicts.len(),
            }
            .into());
        }

        self.results = batch
            .lines
            .into_iter()
            .zip(verdicts)
            .map(|(text, verdict)| ReviewResult::new(text, verdict.label, verdict.score))
            .collect();
        info!(reviews = self.results.len(), "analysis complete");
        Ok(&self.results)
    }

    pub fn positives(&self) -> Vec<ReviewResult> {
        self.filtered(Polarity::Positive)
    }

    pub fn negatives(&self) -> Vec<ReviewResult> {
        self.filtered(Polarity::Negative)
    }

    fn filtered(&self, polarity: Polarity) -> Vec<ReviewResult> {
        self.results
            .iter()
            .filter(|r| r.label == polarity)
            .cloned()
            .collect()
    }

    pub fn chart(&self) -> ChartSummary {
        ChartSummary::from_items(&self.results)
    }

    pub fn summary(&self) -> SessionSummary {
        summarize(&self.results)
    }
}

/// Counts and mean scores per polarity.
pub fn summarize(results: &[ReviewResult]) -> SessionSummary {
    let mean = |polarity: Polarity| {
        let scores: Vec<f64> = results
            .iter()
            .filter(|r| r.label == polarity)
            .map(|r| r.score)
            .collect();
        if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f64>() / scores.len() as f64)
        }
    };
    let chart = ChartSummary::from_items(results);
    SessionSummary {
        total: results.len(),
        positive: chart.positive,
        negative: chart.negative,
        mean_positive_score: mean(Polarity::Positive),
        mean_negative_score: mean(Polarity::Negative),
    }
}

/// Drives a [`Session`] against a loaded classifier.
pub struct SessionController<L: ModelLoader> {
    loader: L,
    classifier: Option<L::Classifier>,
    session: Session,
}

impl<L: ModelLoader> SessionController<L> {
    pub fn new(loader: L) -> Self {
        Self::with_session(loader, Session::new())
    }

    pub fn with_session(loader: L, session: Session) -> Self {
        Self {
            loader,
            classifier: None,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    /// Load the model. Called once at start; failures end in
    /// [`ModelStatus::Failed`].
    pub async fn start(&mut self) -> &ModelStatus {
        self.classifier = None;
        match self.loader.load().await {
            Ok(classifier) => {
                self.classifier = Some(classifier);
                self.session.model_loaded();
            }
            Err(err) => self.session.model_failed(err.to_string()),
        }
        self.session.model()
    }

    /// Reload after a failure. A no-op unless the model failed.
    pub async fn retry(&mut self) -> &ModelStatus {
        if self.session.begin_model_retry() {
            return self.start().await;
        }
        self.session.model()
    }

    /// Analyze the current input as one batch.
    pub async fn analyze(&mut self) -> Result<&[ReviewResult], SessionError> {
        let Some(classifier) = self.classifier.as_ref() else {
            return Err(SessionError::ModelNotReady);
        };
        let Some(batch) = self.session.begin_analysis()? else {
            return Ok(self.session.results());
        };
        let outcome = classifier.classify_batch(batch.lines()).await;
        if let Err(err) = &outcome {
            warn!("classification failed: {err}");
        }
        self.session.complete_analysis(batch, outcome)
    }
}
