//! Review list panel - one polarity, keywords highlighted

use leptos::prelude::*;
use review_insight::{Fragment, ReviewListModel};

use super::{ICON_CHECK_CIRCLE, ICON_WARNING_CIRCLE, Icon};

/// List of reviews for a single polarity with a count in the heading.
#[component]
pub fn ReviewListPanel(list: ReviewListModel) -> impl IntoView {
    let variant = list.variant.variant();
    let icon = match list.variant {
        review_insight::Polarity::Positive => ICON_CHECK_CIRCLE,
        review_insight::Polarity::Negative => ICON_WARNING_CIRCLE,
    };
    let heading = list.heading();
    let empty = list.items.is_empty();

    view! {
        <section class=format!("review-list review-list-{variant}")>
            <h3>
                <Icon path=icon class="icon-sm" />
                {heading}
            </h3>
            {if empty {
                view! { <p class="review-empty">"Nothing here yet."</p> }.into_any()
            } else {
                view! {
                    <ul class="review-items">
                        {list.items.into_iter().map(|item| view! {
                            <li class="review-item">
                                <p class="review-text">{render_fragments(item.fragments, variant)}</p>
                                <span class=format!("score-badge score-{variant}")>{item.score}</span>
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                }.into_any()
            }}
        </section>
    }
}

fn render_fragments(fragments: Vec<Fragment>, variant: &'static str) -> Vec<AnyView> {
    fragments
        .into_iter()
        .map(|fragment| match fragment {
            Fragment::Plain(text) => text.into_any(),
            Fragment::Emphasized(text) => {
                view! { <mark class=format!("kw kw-{variant}")>{text}</mark> }.into_any()
            }
        })
        .collect()
}
