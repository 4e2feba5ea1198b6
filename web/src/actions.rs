//! Session transitions that cross an await point or touch the browser.
//!
//! The session lives in an `RwSignal`; each action takes the synchronous
//! half of a transition under `update`, awaits outside of it and finishes
//! with a second `update`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use review_insight::{Classifier, ModelLoader, Session, SessionError, export_results};

use crate::bridge::{BrowserClassifier, BrowserDownload, BrowserModelLoader, console_info, console_warn};

/// Loaded classifier, empty until the model is ready.
pub type ClassifierSlot = StoredValue<Option<BrowserClassifier>>;

pub fn load_model(session: RwSignal<Session>, slot: ClassifierSlot) {
    spawn_local(async move {
        console_info("loading sentiment model");
        match BrowserModelLoader::default().load().await {
            Ok(classifier) => {
                slot.set_value(Some(classifier));
                session.update(Session::model_loaded);
                console_info("sentiment model ready");
            }
            Err(err) => {
                slot.set_value(None);
                console_warn(&format!("failed to load sentiment model: {err}"));
                session.update(|s| s.model_failed(err.to_string()));
            }
        }
    });
}

/// Reload the model; ignored unless loading failed.
pub fn retry(session: RwSignal<Session>, slot: ClassifierSlot) {
    if session.try_update(Session::begin_model_retry).unwrap_or(false) {
        load_model(session, slot);
    }
}

/// Classify the current input as one batch.
pub fn analyze(session: RwSignal<Session>, slot: ClassifierSlot) {
    let Some(classifier) = slot.get_value() else {
        console_warn("analyze requested before the model is ready");
        return;
    };
    let batch = match session.try_update(|s| s.begin_analysis()) {
        Some(Ok(Some(batch))) => batch,
        Some(Ok(None)) | None => return,
        Some(Err(err)) => {
            console_warn(&err.to_string());
            return;
        }
    };

    spawn_local(async move {
        let outcome = classifier.classify_batch(batch.lines()).await;
        let completed =
            session.try_update(|s| s.complete_analysis(batch, outcome).map(|results| results.len()));
        match completed {
            Some(Ok(count)) => console_info(&format!("analyzed {count} reviews")),
            Some(Err(SessionError::Superseded)) => {
                console_info("discarded analysis of cleared input")
            }
            Some(Err(err)) => console_warn(&format!("analysis failed: {err}")),
            None => {}
        }
    });
}

pub fn load_example(session: RwSignal<Session>) {
    session.update(|s| s.load_example(&mut rand::thread_rng()));
}

/// Download the current results as CSV; nothing happens without results.
pub fn export(session: RwSignal<Session>) {
    match session.with_untracked(|s| export_results(s.results(), &BrowserDownload)) {
        Ok(true) => console_info("CSV export downloaded"),
        Ok(false) => {}
        Err(err) => console_warn(&format!("export failed: {err}")),
    }
}
