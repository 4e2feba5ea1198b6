//! Root document component - the complete HTML page

use super::{AnalysisSummary, ICON_CHART_PIE, Icon, ReviewListPanel, SentimentPie};
use crate::styles::{CSP, REPORT_CSS};
use leptos::prelude::*;
use review_insight::{ChartSummary, ReviewListModel, SessionSummary};

/// The complete HTML document for the report
#[component]
pub fn ReportDocument(
    title: String,
    summary: SessionSummary,
    chart: ChartSummary,
    #[prop(default = 240.0)] chart_size: f64,
    positive: ReviewListModel,
    negative: ReviewListModel,
) -> impl IntoView {
    let empty = chart.is_empty();

    view! {
        <html>
            <head>
                <meta charset="UTF-8" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title.clone()}</title>
                <style>{REPORT_CSS}</style>
            </head>
            <body>
                <main class="report">
                    <header class="report-header">
                        <h1>{title}</h1>
                    </header>

                    <section class="overview">
                        <h2>
                            <Icon path=ICON_CHART_PIE class="icon-sm" />
                            "Sentiment Overview"
                        </h2>
                        {if empty {
                            view! { <p class="empty-state">"No reviews analyzed."</p> }.into_any()
                        } else {
                            view! {
                                <div class="overview-grid">
                                    <SentimentPie chart=chart size=chart_size />
                                    <AnalysisSummary summary=summary />
                                </div>
                            }.into_any()
                        }}
                    </section>

                    <div class="review-columns">
                        <ReviewListPanel list=positive />
                        <ReviewListPanel list=negative />
                    </div>
                </main>
            </body>
        </html>
    }
}
