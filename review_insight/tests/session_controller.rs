//! Controller behaviour against stub classifiers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use review_insight::corpus::EXAMPLE_REVIEWS;
use review_insight::{
    Classification, Classifier, ClassifierError, ModelLoader, ModelStatus, Phase, Polarity,
    ReviewResult, SessionController, SessionError,
};

/// Records every batch it receives and answers from a script.
struct StubClassifier {
    verdicts: Vec<Classification>,
    batches: Rc<RefCell<Vec<Vec<String>>>>,
    fail: bool,
}

impl Classifier for StubClassifier {
    async fn classify_batch(&self, texts: &[String]) -> Result<Vec<Classification>, ClassifierError> {
        self.batches.borrow_mut().push(texts.to_vec());
        if self.fail {
            return Err(ClassifierError::Inference("backend down".into()));
        }
        Ok(self.verdicts.iter().copied().take(texts.len()).collect())
    }
}

struct StubLoader {
    verdicts: Vec<Classification>,
    batches: Rc<RefCell<Vec<Vec<String>>>>,
    failures_left: Cell<usize>,
    loads: Cell<usize>,
    fail_inference: bool,
}

impl StubLoader {
    fn new(verdicts: Vec<Classification>) -> Self {
        Self {
            verdicts,
            batches: Rc::default(),
            failures_left: Cell::new(0),
            loads: Cell::new(0),
            fail_inference: false,
        }
    }

    fn failing_first(mut self, times: usize) -> Self {
        self.failures_left = Cell::new(times);
        self
    }

    fn failing_inference(mut self) -> Self {
        self.fail_inference = true;
        self
    }
}

impl ModelLoader for StubLoader {
    type Classifier = StubClassifier;

    async fn load(&self) -> Result<StubClassifier, ClassifierError> {
        self.loads.set(self.loads.get() + 1);
        if self.failures_left.get() > 0 {
            self.failures_left.set(self.failures_left.get() - 1);
            return Err(ClassifierError::Load("weights unavailable".into()));
        }
        Ok(StubClassifier {
            verdicts: self.verdicts.clone(),
            batches: Rc::clone(&self.batches),
            fail: self.fail_inference,
        })
    }
}

fn love_and_bad() -> Vec<Classification> {
    vec![
        Classification::new(Polarity::Positive, 0.99),
        Classification::new(Polarity::Negative, 0.85),
    ]
}

#[tokio::test]
async fn analyzes_lines_in_order_with_one_batch() {
    let loader = StubLoader::new(love_and_bad());
    let batches = Rc::clone(&loader.batches);
    let mut controller = SessionController::new(loader);

    assert_eq!(controller.session().phase(), Phase::ModelLoading);
    assert_eq!(controller.start().await, &ModelStatus::Ready);

    controller.session_mut().set_input("I love this\nThis is bad");
    let results = controller.analyze().await.unwrap().to_vec();

    assert_eq!(
        results,
        vec![
            ReviewResult::new("I love this", Polarity::Positive, 0.99),
            ReviewResult::new("This is bad", Polarity::Negative, 0.85),
        ]
    );
    assert_eq!(batches.borrow().len(), 1);
    assert_eq!(batches.borrow()[0], vec!["I love this", "This is bad"]);
    assert_eq!(controller.session().phase(), Phase::ModelReady);
}

#[tokio::test]
async fn blank_input_never_reaches_the_classifier() {
    let loader = StubLoader::new(love_and_bad());
    let batches = Rc::clone(&loader.batches);
    let mut controller = SessionController::new(loader);
    controller.start().await;

    controller.session_mut().set_input("\n\n  \n");
    let results = controller.analyze().await.unwrap();

    assert!(results.is_empty());
    assert!(batches.borrow().is_empty());
    assert_eq!(controller.session().phase(), Phase::ModelReady);
}

#[tokio::test]
async fn analyze_before_load_is_rejected() {
    let mut controller = SessionController::new(StubLoader::new(love_and_bad()));
    controller.session_mut().set_input("I love this");
    assert_eq!(controller.analyze().await.unwrap_err(), SessionError::ModelNotReady);
}

#[tokio::test]
async fn load_failure_is_surfaced_and_retry_recovers() {
    let loader = StubLoader::new(love_and_bad()).failing_first(1);
    let mut controller = SessionController::new(loader);

    let status = controller.start().await.clone();
    assert!(matches!(status, ModelStatus::Failed(ref reason) if reason.contains("weights unavailable")));
    assert_eq!(controller.session().phase(), Phase::ModelFailed);

    controller.session_mut().set_input("I love this");
    assert_eq!(controller.analyze().await.unwrap_err(), SessionError::ModelNotReady);

    assert_eq!(controller.retry().await, &ModelStatus::Ready);
    assert!(controller.analyze().await.is_ok());
}

#[tokio::test]
async fn retry_is_a_no_op_when_ready() {
    let loader = StubLoader::new(love_and_bad());
    let mut controller = SessionController::new(loader);
    controller.start().await;
    assert_eq!(controller.retry().await, &ModelStatus::Ready);
}

#[tokio::test]
async fn inference_failure_returns_to_ready_without_results() {
    let loader = StubLoader::new(love_and_bad()).failing_inference();
    let mut controller = SessionController::new(loader);
    controller.start().await;

    controller.session_mut().set_input("I love this\nThis is bad");
    let err = controller.analyze().await.unwrap_err();

    assert!(matches!(err, SessionError::Classifier(ClassifierError::Inference(_))));
    assert!(controller.session().results().is_empty());
    assert_eq!(controller.session().phase(), Phase::ModelReady);
}

#[tokio::test]
async fn reanalysis_replaces_previous_results() {
    let mut controller = SessionController::new(StubLoader::new(love_and_bad()));
    controller.start().await;

    controller.session_mut().set_input("I love this\nThis is bad");
    controller.analyze().await.unwrap();
    assert_eq!(controller.session().results().len(), 2);

    controller.session_mut().set_input("Only one line");
    controller.analyze().await.unwrap();
    assert_eq!(controller.session().results().len(), 1);
    assert_eq!(controller.session().results()[0].text, "Only one line");
}

#[tokio::test]
async fn example_then_clear() {
    let mut controller = SessionController::new(StubLoader::new(love_and_bad()));
    controller.start().await;
    let mut rng = StdRng::seed_from_u64(11);

    controller.session_mut().load_example(&mut rng);
    let input = controller.session().input_text().to_string();
    let lines: Vec<&str> = input.lines().collect();
    assert!(!lines.is_empty() && lines.len() <= EXAMPLE_REVIEWS.len());
    assert!(lines.iter().all(|line| EXAMPLE_REVIEWS.contains(line)));

    controller.session_mut().clear();
    assert_eq!(controller.session().input_text(), "");
    assert!(controller.session().results().is_empty());
}
