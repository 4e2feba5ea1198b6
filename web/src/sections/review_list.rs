use std::time::Duration;

use leptos::prelude::*;
use review_insight::review_list::ReviewItem;
use review_insight::{Fragment, Highlighter, Polarity, ReviewListModel, ReviewResult, copy_review};

use crate::bridge::BrowserClipboard;

/// Reviews of one polarity, keywords highlighted, each copyable.
#[component]
pub fn ReviewList(
    results: Memo<Vec<ReviewResult>>,
    title: &'static str,
    variant: Polarity,
) -> impl IntoView {
    let highlighter = Highlighter::builtin();

    move || {
        let reviews: Vec<ReviewResult> = results.with(|all| {
            all.iter()
                .filter(|review| review.label == variant)
                .cloned()
                .collect()
        });
        let model = ReviewListModel::build(title, &reviews, variant, highlighter);
        let heading = model.heading();
        let rows = reviews
            .into_iter()
            .zip(model.items)
            .map(|(review, item)| view! { <ReviewRow review=review item=item variant=variant /> })
            .collect::<Vec<_>>();

        view! {
            <section class=format!("card review-list review-list-{}", variant.variant())>
                <h2 class="card-title">{heading}</h2>
                <ul class="review-items">{rows}</ul>
            </section>
        }
    }
}

#[component]
fn ReviewRow(review: ReviewResult, item: ReviewItem, variant: Polarity) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let copy = move |_| {
        if copy_review(&review, &BrowserClipboard) {
            set_copied.set(true);
            set_timeout(move || set_copied.set(false), Duration::from_millis(2000));
        }
    };

    let marks = item
        .fragments
        .into_iter()
        .map(|fragment| match fragment {
            Fragment::Plain(text) => text.into_any(),
            Fragment::Emphasized(text) => {
                view! { <mark class=format!("kw kw-{}", variant.variant())>{text}</mark> }.into_any()
            }
        })
        .collect::<Vec<_>>();

    view! {
        <li class="review-item">
            <p class="review-text">{marks}</p>
            <div class="review-meta">
                <span class=format!("score-badge score-{}", variant.variant())>
                    {format!("Score: {}", item.score)}
                </span>
                <button class="copy-btn" title="Copy review" on:click=copy>
                    {move || if copied.get() { "Copied!" } else { "Copy" }}
                </button>
            </div>
        </li>
    }
}
