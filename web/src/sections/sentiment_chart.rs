use leptos::prelude::*;
use review_insight::{ChartSummary, ReviewResult, SliceShape};

/// Pie chart of the current results; renders nothing before an analysis.
#[component]
#[allow(clippy::unit_arg, clippy::unused_unit)]
pub fn SentimentChart(
    results: Memo<Vec<ReviewResult>>,
    #[prop(default = 260.0)] size: f64,
) -> impl IntoView {
    move || {
        let Some(pie) = results.with(|r| ChartSummary::from_items(r)).pie(size) else {
            return view! {}.into_any();
        };
        let center = pie.center.to_string();
        let radius = pie.radius.to_string();

        view! {
            <div class="chart">
                <svg
                    class="pie-chart"
                    viewBox=format!("0 0 {size} {size}")
                    width=size.to_string()
                    height=size.to_string()
                    role="img"
                    aria-label="Sentiment distribution"
                >
                    {pie.slices.into_iter().map(|slice| {
                        let label = slice.label();
                        let shape = match slice.shape {
                            SliceShape::Circle => view! {
                                <circle cx=center.clone() cy=center.clone() r=radius.clone() fill=slice.color />
                            }.into_any(),
                            SliceShape::Arc(d) => view! { <path d=d fill=slice.color></path> }.into_any(),
                        };
                        view! {
                            <g>
                                {shape}
                                <text
                                    x=format!("{:.2}", slice.label_x)
                                    y=format!("{:.2}", slice.label_y)
                                    text-anchor="middle"
                                    dominant-baseline="middle"
                                    class="slice-label"
                                >
                                    {label}
                                </text>
                            </g>
                        }
                    }).collect::<Vec<_>>()}
                </svg>

                <ul class="legend">
                    {pie.legend.into_iter().map(|entry| view! {
                        <li>
                            <span class="legend-swatch" style=format!("background: {}", entry.color)></span>
                            {format!("{} ({})", entry.name, entry.count)}
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>
            </div>
        }
        .into_any()
    }
}
