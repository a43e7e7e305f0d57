//! Dual-axis market analysis chart rendered as inline SVG.
//!
//! Datasets whose label contains "price" (any case) are drawn against the
//! left price axis; everything else is treated as a 0-100 score series on
//! the right axis. Colors and tooltip formats follow the same split.

#[cfg(test)]
#[path = "analysis_chart_test.rs"]
mod analysis_chart_test;

use leptos::prelude::*;

use crate::net::types::{ChartData, Dataset};
use crate::util::format::format_inr;

const PLOT_WIDTH: f64 = 640.0;
const PLOT_HEIGHT: f64 = 280.0;
const PAD: f64 = 48.0;

const PRICE_COLOR: &str = "#4361ee";
const SCORE_COLOR: &str = "#e63946";

/// Fixed bounds of the right-hand score axis.
const SCORE_BOUNDS: (f64, f64) = (0.0, 100.0);

fn series_color(is_price: bool) -> &'static str {
    if is_price { PRICE_COLOR } else { SCORE_COLOR }
}

/// Price-axis bounds across all price datasets. A flat or empty series is
/// padded so the scale still spans a visible range.
fn price_bounds(datasets: &[Dataset]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for dataset in datasets.iter().filter(|d| d.is_price_series()) {
        for &value in &dataset.data {
            lo = lo.min(value);
            hi = hi.max(value);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if (hi - lo).abs() < f64::EPSILON {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    }
}

/// Horizontal position of point `index` out of `count` evenly spaced
/// points; a single point sits in the middle of the plot.
fn x_position(index: usize, count: usize) -> f64 {
    let inner = PLOT_WIDTH - 2.0 * PAD;
    if count <= 1 {
        return PAD + inner / 2.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let frac = index as f64 / (count - 1) as f64;
    PAD + inner * frac
}

/// Vertical position of `value` on an axis spanning `lo..hi` (inverted,
/// SVG y grows downward).
fn y_position(value: f64, lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    let frac = if span <= 0.0 { 0.5 } else { (value - lo) / span };
    PLOT_HEIGHT - PAD - (PLOT_HEIGHT - 2.0 * PAD) * frac
}

/// `points` attribute for one series polyline, clamped to the label count.
fn polyline_points(data: &[f64], point_count: usize, lo: f64, hi: f64) -> String {
    data.iter()
        .take(point_count)
        .enumerate()
        .map(|(i, &value)| {
            format!(
                "{:.1},{:.1}",
                x_position(i, point_count),
                y_position(value, lo, hi)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tooltip text for one point: currency for the price series,
/// `value/100` for the score series.
fn tooltip_label(series: &str, value: f64, is_price: bool) -> String {
    if is_price {
        format!("{series}: {}", format_inr(value))
    } else {
        format!("{series}: {value:.1}/100")
    }
}

/// Dual-axis line chart, or a placeholder when there is nothing to plot.
#[component]
pub fn AnalysisChart(chart_data: ChartData) -> impl IntoView {
    if chart_data.labels.is_empty() {
        return view! {
            <div class="chart-placeholder">
                "No chart data available for the selected filters."
            </div>
        }
        .into_any();
    }

    let label_count = chart_data.labels.len();
    let price_range = price_bounds(&chart_data.datasets);

    let legend = chart_data
        .datasets
        .iter()
        .map(|dataset| {
            let color = series_color(dataset.is_price_series());
            view! {
                <span class="chart-legend__item">
                    <span class="chart-legend__swatch" style:background-color=color></span>
                    {dataset.label.clone()}
                </span>
            }
        })
        .collect::<Vec<_>>();

    let series = chart_data
        .datasets
        .iter()
        .map(|dataset| {
            let is_price = dataset.is_price_series();
            let (lo, hi) = if is_price { price_range } else { SCORE_BOUNDS };
            let color = series_color(is_price);
            let points = polyline_points(&dataset.data, label_count, lo, hi);
            let markers = dataset
                .data
                .iter()
                .take(label_count)
                .enumerate()
                .map(|(i, &value)| {
                    let title = tooltip_label(&dataset.label, value, is_price);
                    view! {
                        <circle
                            cx=format!("{:.1}", x_position(i, label_count))
                            cy=format!("{:.1}", y_position(value, lo, hi))
                            r="4"
                            fill=color
                        >
                            <title>{title}</title>
                        </circle>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <g>
                    <polyline points=points fill="none" stroke=color stroke-width="2"/>
                    {markers}
                </g>
            }
        })
        .collect::<Vec<_>>();

    let tick_y = format!("{:.1}", PLOT_HEIGHT - PAD / 2.0);
    let x_labels = chart_data
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            view! {
                <text
                    class="chart-axis__tick"
                    x=format!("{:.1}", x_position(i, label_count))
                    y=tick_y.clone()
                    text-anchor="middle"
                >
                    {label.clone()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="analysis-chart">
            <div class="chart-legend">{legend}</div>
            <svg
                class="analysis-chart__svg"
                viewBox=format!("0 0 {PLOT_WIDTH} {PLOT_HEIGHT}")
                role="img"
            >
                // Axis frame.
                <line
                    x1=PAD
                    y1=PAD
                    x2=PAD
                    y2=PLOT_HEIGHT - PAD
                    stroke=PRICE_COLOR
                    stroke-width="1"
                />
                <line
                    x1=PLOT_WIDTH - PAD
                    y1=PAD
                    x2=PLOT_WIDTH - PAD
                    y2=PLOT_HEIGHT - PAD
                    stroke=SCORE_COLOR
                    stroke-width="1"
                />
                <line
                    x1=PAD
                    y1=PLOT_HEIGHT - PAD
                    x2=PLOT_WIDTH - PAD
                    y2=PLOT_HEIGHT - PAD
                    stroke="#999"
                    stroke-width="1"
                />
                <text class="chart-axis__caption" x="8" y="16">
                    "Price per sq.ft (₹)"
                </text>
                <text
                    class="chart-axis__caption"
                    x=PLOT_WIDTH - 8.0
                    y="16"
                    text-anchor="end"
                >
                    "Demand Score"
                </text>
                {x_labels}
                {series}
            </svg>
        </div>
    }
    .into_any()
}
