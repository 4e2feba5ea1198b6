use leptos::prelude::*;
use review_insight::{ModelStatus, Session};

/// Explains a failed model load; the analyze button doubles as retry.
#[component]
pub fn ModelNotice(session: RwSignal<Session>) -> impl IntoView {
    move || match session.with(|s| s.model().clone()) {
        ModelStatus::Failed(reason) => view! {
            <p class="model-notice" role="alert">
                {format!("The sentiment model could not be loaded ({reason}). Press the button above to retry.")}
            </p>
        }
        .into_any(),
        _ => ().into_any(),
    }
}
