use leptos::prelude::*;
use review_insight::{Phase, Session};

use crate::actions::{self, ClassifierSlot};

const PLACEHOLDER: &str = "e.g.\nI love this product! It's amazing.\nThis was a waste of money.";

/// Review input and the controls acting on it.
#[component]
pub fn InputPanel(session: RwSignal<Session>, classifier: ClassifierSlot) -> impl IntoView {
    let phase = move || session.with(Session::phase);
    let busy = move || session.with(Session::is_analyzing);
    let has_results = move || session.with(|s| !s.results().is_empty());
    let primary_disabled =
        move || phase() != Phase::ModelFailed && !session.with(Session::can_analyze);

    let on_input =
        move |ev: leptos::ev::Event| session.update(|s| s.set_input(event_target_value(&ev)));
    let on_primary = move |_| match session.with_untracked(Session::phase) {
        Phase::ModelFailed => actions::retry(session, classifier),
        _ => actions::analyze(session, classifier),
    };

    view! {
        <section class="card">
            <h2 class="card-title">"Enter Product Reviews"</h2>
            <p class="card-description">"Place each review on a new line for best results."</p>

            <textarea
                class="review-input"
                rows="8"
                placeholder=PLACEHOLDER
                prop:value=move || session.with(|s| s.input_text().to_string())
                on:input=on_input
            ></textarea>

            <div class="controls">
                <button
                    class=move || match phase() {
                        Phase::ModelFailed => "btn btn-primary btn-retry",
                        _ => "btn btn-primary",
                    }
                    disabled=primary_disabled
                    on:click=on_primary
                >
                    <Show when=move || phase().is_busy()>
                        <span class="spinner" aria-hidden="true"></span>
                    </Show>
                    {move || phase().action_label()}
                </button>
                <button class="btn" disabled=busy on:click=move |_| actions::load_example(session)>
                    "Load example"
                </button>
                <button class="btn" on:click=move |_| session.update(Session::clear)>
                    "Clear"
                </button>
                <button
                    class="btn"
                    disabled=move || !has_results()
                    on:click=move |_| actions::export(session)
                >
                    "Export CSV"
                </button>
            </div>
        </section>
    }
}
