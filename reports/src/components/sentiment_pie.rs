//! Sentiment pie chart - SVG visualization of the positive/negative split

use leptos::prelude::*;
use review_insight::chart::LegendEntry;
use review_insight::{ChartSummary, SliceShape};

/// Pie chart of the positive/negative split with a legend.
///
/// Renders nothing when there are no results.
#[component]
#[allow(clippy::unit_arg, clippy::unused_unit)]
pub fn SentimentPie(chart: ChartSummary, #[prop(default = 240.0)] size: f64) -> impl IntoView {
    let Some(pie) = chart.pie(size) else {
        return view! {}.into_any();
    };

    let center = pie.center.to_string();
    let radius = pie.radius.to_string();
    let view_box = format!("0 0 {size} {size}");

    view! {
        <div class="sentiment-pie">
            <svg
                class="pie-chart"
                viewBox=view_box
                width=size.to_string()
                height=size.to_string()
                role="img"
                aria-label="Sentiment distribution"
            >
                {pie.slices.into_iter().map(|slice| {
                    let label = slice.label();
                    let shape = match slice.shape {
                        SliceShape::Circle => view! {
                            <circle
                                cx=center.clone()
                                cy=center.clone()
                                r=radius.clone()
                                fill=slice.color
                                stroke="#ffffff"
                                stroke-width="1"
                            />
                        }.into_any(),
                        SliceShape::Arc(d) => view! {
                            <path d=d fill=slice.color stroke="#ffffff" stroke-width="1"></path>
                        }.into_any(),
                    };
                    view! {
                        <g class="pie-slice">
                            {shape}
                            <text
                                x=format!("{:.2}", slice.label_x)
                                y=format!("{:.2}", slice.label_y)
                                text-anchor="middle"
                                dominant-baseline="middle"
                                fill="#ffffff"
                                font-size="14"
                                font-weight="700"
                                font-family="system-ui, -apple-system, sans-serif"
                            >
                                {label}
                            </text>
                        </g>
                    }
                }).collect::<Vec<_>>()}
            </svg>

            <PieLegend entries=pie.legend.to_vec() />
        </div>
    }
    .into_any()
}

/// Legend row for each polarity, zero counts included.
#[component]
pub fn PieLegend(entries: Vec<LegendEntry>) -> impl IntoView {
    view! {
        <ul class="pie-legend">
            {entries.into_iter().map(|entry| {
                let text = format!("{}: {} ({}%)", entry.name, entry.count, entry.percent);
                view! {
                    <li class="legend-item">
                        <span class="legend-swatch" style=format!("background: {}", entry.color)></span>
                        {text}
                    </li>
                }
            }).collect::<Vec<_>>()}
        </ul>
    }
}
