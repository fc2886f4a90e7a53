//! Inline SVG line chart for small weekly series.

use leptos::prelude::*;

use crate::util::chart::{ChartFrame, Point};

#[component]
pub fn LineChart(
    series: &'static [Point],
    #[prop(optional)] frame: Option<ChartFrame>,
    #[prop(default = 4.0)] dot_radius: f64,
) -> impl IntoView {
    let frame = frame.unwrap_or_default();
    let points = frame.project(series);
    let polyline = frame.polyline(series);
    let grid = frame.grid_lines(2.0);
    let view_box = format!("0 0 {} {}", frame.width, frame.height);
    let label_y = frame.height - 2.0;

    view! {
        <svg class="line-chart" viewBox=view_box preserveAspectRatio="none" role="img">
            {grid
                .into_iter()
                .map(|y| {
                    view! {
                        <line
                            class="line-chart__grid"
                            x1=frame.padding
                            x2=frame.width - frame.padding
                            y1=y
                            y2=y
                        />
                    }
                })
                .collect_view()}
            <polyline class="line-chart__line" points=polyline fill="none"/>
            {points
                .into_iter()
                .zip(series.iter())
                .map(|((x, y), (label, value))| {
                    view! {
                        <g class="line-chart__point">
                            <circle cx=x cy=y r=dot_radius aria-label=format!("{label}: {value}")></circle>
                            <text class="line-chart__label" x=x y=label_y text-anchor="middle">{*label}</text>
                        </g>
                    }
                })
                .collect_view()}
        </svg>
    }
}
