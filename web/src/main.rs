// Review Insight Seeker: browser front end (Leptos 0.8, CSR)

mod actions;
mod bridge;
mod sections;
mod state;

use leptos::prelude::*;
use review_insight::{Polarity, Session};
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let session = RwSignal::new(Session::new());
    let classifier: actions::ClassifierSlot = StoredValue::new(None);

    // Load the model once on mount
    Effect::new(move || actions::load_model(session, classifier));

    let results = state::results_memo(session);
    let has_results = move || results.with(|r| !r.is_empty());

    view! {
        <div class="container">
            <Header />
            <main>
                <InputPanel session=session classifier=classifier />
                <ModelNotice session=session />

                <Show when=has_results>
                    <div class="results">
                        <section class="card">
                            <h2 class="card-title">"Sentiment Overview"</h2>
                            <SentimentChart results=results />
                        </section>

                        <div class="review-columns">
                            <ReviewList results=results title="Positive Reviews" variant=Polarity::Positive />
                            <ReviewList results=results title="Negative Reviews" variant=Polarity::Negative />
                        </div>
                    </div>
                </Show>
            </main>
        </div>
    }
}
