//! Terminal and JSON rendering of analysis results.

use colored::Colorize;
use serde::Serialize;

use review_insight::{
    Fragment, Highlighter, Polarity, ReviewListModel, ReviewResult, SessionSummary,
    session::summarize,
};

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: SessionSummary,
    results: &'a [ReviewResult],
}

/// Machine-readable output: summary plus every result in input order.
pub fn render_json(results: &[ReviewResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        summary: summarize(results),
        results,
    })
}

/// Human-readable overview followed by the positive and negative lists.
pub fn render_text(results: &[ReviewResult], highlighter: &Highlighter) -> String {
    let summary = summarize(results);
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Sentiment Overview".bold()));
    match review_insight::ChartSummary::from_items(results).percentages() {
        Some((pos, neg)) => {
            out.push_str(&format!(
                "  {} {} ({pos}%)   {} {} ({neg}%)\n",
                "Positive".green(),
                summary.positive,
                "Negative".red(),
                summary.negative,
            ));
        }
        None => out.push_str("  No reviews analyzed.\n"),
    }

    for (title, polarity) in [
        ("Positive Reviews", Polarity::Positive),
        ("Negative Reviews", Polarity::Negative),
    ] {
        let list = ReviewListModel::build(title, results, polarity, highlighter);
        out.push('\n');
        out.push_str(&format!("{}\n", list.heading().bold()));
        for item in &list.items {
            out.push_str(&format!(
                "  [{}] {}\n",
                item.score,
                paint(&item.fragments, polarity)
            ));
        }
    }
    out
}

fn paint(fragments: &[Fragment], polarity: Polarity) -> String {
    fragments
        .iter()
        .map(|fragment| match fragment {
            Fragment::Plain(text) => text.clone(),
            Fragment::Emphasized(text) => match polarity {
                Polarity::Positive => text.green().bold().to_string(),
                Polarity::Negative => text.red().bold().to_string(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<ReviewResult> {
        vec![
            ReviewResult::new("I love this", Polarity::Positive, 0.99),
            ReviewResult::new("Great value", Polarity::Positive, 0.97),
            ReviewResult::new("Awful", Polarity::Negative, 0.9),
        ]
    }

    #[test]
    fn text_lists_both_polarities() {
        colored::control::set_override(false);
        let text = render_text(&results(), Highlighter::builtin());
        assert!(text.contains("Positive 2 (67%)"));
        assert!(text.contains("Negative 1 (33%)"));
        assert!(text.contains("Positive Reviews (2)"));
        assert!(text.contains("  [0.99] I love this"));
        assert!(text.contains("Negative Reviews (1)"));
        assert!(text.contains("  [0.90] Awful"));
    }

    #[test]
    fn empty_results_say_so() {
        colored::control::set_override(false);
        let text = render_text(&[], Highlighter::builtin());
        assert!(text.contains("No reviews analyzed."));
        assert!(text.contains("Positive Reviews (0)"));
    }

    #[test]
    fn json_keeps_input_order() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&results()).unwrap()).unwrap();
        assert_eq!(json["summary"]["total"], 3);
        assert_eq!(json["results"][0]["text"], "I love this");
        assert_eq!(json["results"][2]["label"], "NEGATIVE");
    }
}
