//! Summary statistics panel

use leptos::prelude::*;
use review_insight::SessionSummary;

use super::{ICON_SQUARES_FOUR, Icon};

/// Counts and mean confidence per polarity
#[component]
pub fn AnalysisSummary(summary: SessionSummary) -> impl IntoView {
    view! {
        <div class="analysis-summary">
            <h3>
                <Icon path=ICON_SQUARES_FOUR />
                "Analysis Summary"
            </h3>
            <div class="summary-grid">
                <div class="summary-stat">
                    <span class="stat-value">{summary.total.to_string()}</span>
                    <span class="stat-label">"Reviews analyzed"</span>
                </div>
                <div class="summary-stat">
                    <span class="stat-value stat-positive">{summary.positive.to_string()}</span>
                    <span class="stat-label">"Positive"</span>
                </div>
                <div class="summary-stat">
                    <span class="stat-value stat-negative">{summary.negative.to_string()}</span>
                    <span class="stat-label">"Negative"</span>
                </div>
                <div class="summary-stat">
                    <span class="stat-value">{format_mean(summary.mean_positive_score)}</span>
                    <span class="stat-label">"Mean positive score"</span>
                </div>
                <div class="summary-stat">
                    <span class="stat-value">{format_mean(summary.mean_negative_score)}</span>
                    <span class="stat-label">"Mean negative score"</span>
                </div>
            </div>
        </div>
    }
}

fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(mean) => format!("{mean:.2}"),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_mean_renders_dash() {
        assert_eq!(format_mean(None), "-");
        assert_eq!(format_mean(Some(0.9)), "0.90");
    }
}
