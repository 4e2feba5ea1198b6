use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1>"Review Insight Seeker"</h1>
            <p class="tagline">
                "Paste product reviews below to instantly analyze sentiment and summarize feedback."
            </p>
        </header>
    }
}
