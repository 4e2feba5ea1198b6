//! Derived reactive state shared by the result views.

use leptos::prelude::*;
use review_insight::{ReviewResult, Session};

/// Results of the session, changing only when the results do.
///
/// Views that read this instead of the whole session are not rebuilt while
/// the user types.
pub fn results_memo(session: RwSignal<Session>) -> Memo<Vec<ReviewResult>> {
    Memo::new(move |_| session.with(|s| s.results().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use review_insight::{Classification, Polarity};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn analyzed(session: RwSignal<Session>) {
        session.update(|s| {
            s.model_loaded();
            s.set_input("I love this");
            let batch = s.begin_analysis().unwrap().unwrap();
            s.complete_analysis(batch, Ok(vec![Classification::new(Polarity::Positive, 0.9)]))
                .unwrap();
        });
    }

    #[test]
    fn typing_does_not_rebuild_result_views() {
        let owner = Owner::new();
        owner.set();

        let session = RwSignal::new(Session::new());
        analyzed(session);
        let results = results_memo(session);

        let rebuilds = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&rebuilds);
        let view = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            results.with(Vec::len)
        });

        assert_eq!(view.get(), 1);
        session.update(|s| s.set_input("I love this\nand more"));
        session.update(|s| s.set_input("I love this\nand more text"));
        assert_eq!(view.get(), 1);
        assert_eq!(rebuilds.load(Ordering::SeqCst), 1);

        session.update(|s| s.clear());
        assert_eq!(view.get(), 0);
        assert_eq!(rebuilds.load(Ordering::SeqCst), 2);
    }
}
