//! Prediction Chart Component
//!
//! Actual-vs-predicted line chart drawn on HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::api;
use crate::components::ChartSkeleton;
use crate::state::global::{FetchStatus, ModelSeries};

/// Series colors: actual in blue, predicted in red
const ACTUAL_COLOR: &str = "#3498db";
const PREDICTED_COLOR: &str = "#e74c3c";

const POINT_RADIUS: f64 = 3.0;
const POINT_HOVER_RADIUS: f64 = 6.0;

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 48.0;

/// Horizontal tolerance for hover hit-testing, in canvas pixels
const HOVER_SLOP: f64 = 8.0;

/// Actual-vs-predicted chart.
///
/// Each mounted instance fetches the model data itself and keeps the derived
/// series in its own local signals, so two instances never share state.
#[component]
pub fn PredictionChart() -> impl IntoView {
    let series = create_rw_signal(ModelSeries::default());
    let status = create_rw_signal(FetchStatus::Idle);
    let hovered = create_rw_signal(None::<usize>);
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Fetch once on mount
    create_effect(move |_| {
        spawn_local(async move {
            status.set(FetchStatus::Loading);
            match api::fetch_model_data().await {
                Ok(data) => {
                    // try_set: the instance may have unmounted while the
                    // request was in flight
                    let _ = series.try_set(ModelSeries::from_rows(&data.y_test, &data.test_predict));
                    let _ = status.try_set(FetchStatus::Ready);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch model data: {}", e).into(),
                    );
                    let _ = status.try_set(FetchStatus::Errored(e.to_string()));
                }
            }
        });
    });

    // Redraw whenever the series or the hovered point changes
    create_effect(move |_| {
        let data = series.get();
        let hover = hovered.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &data, hover);
        }
    });

    let on_mousemove = move |ev: MouseEvent| {
        let count = series.with(|s| s.len());
        if let Some(canvas) = canvas_ref.get() {
            let rect = canvas.get_bounding_client_rect();
            let scale = if rect.width() > 0.0 {
                canvas.width() as f64 / rect.width()
            } else {
                1.0
            };
            let x = (ev.client_x() as f64 - rect.left()) * scale;
            hovered.set(nearest_index(x, count, canvas.width() as f64));
        }
    };

    view! {
        <div class="relative">
            {move || match status.get() {
                FetchStatus::Idle | FetchStatus::Loading => view! {
                    <ChartSkeleton />
                }.into_view(),
                FetchStatus::Errored(_) => view! {
                    <div class="h-64 md:h-96 flex flex-col items-center justify-center space-y-2 rounded-lg bg-gray-800">
                        <span class="text-3xl">"📉"</span>
                        <p class="text-gray-400">"Model data unavailable"</p>
                        <p class="text-sm text-gray-500">"The chart will return once the backend is reachable."</p>
                    </div>
                }.into_view(),
                FetchStatus::Ready => view! {
                    <canvas
                        node_ref=canvas_ref
                        width="800"
                        height="400"
                        class="w-full h-64 md:h-96 rounded-lg"
                        on:mousemove=on_mousemove
                        on:mouseleave=move |_| hovered.set(None)
                    />
                    <ChartLegend />
                }.into_view(),
            }}
        </div>
    }
}

/// Chart legend showing series colors
#[component]
fn ChartLegend() -> impl IntoView {
    let entries = [
        ("Original Price", ACTUAL_COLOR),
        ("Predicted Price", PREDICTED_COLOR),
    ];

    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {entries.into_iter().map(|(name, color)| view! {
                <div class="flex items-center space-x-2">
                    <div
                        class="w-3 h-3 rounded-full"
                        style=format!("background-color: {}", color)
                    />
                    <span class="text-sm text-gray-300">{name}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, series: &ModelSeries, hovered: Option<usize>) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let (min, max) = value_bounds(series);

    // Horizontal grid lines with y-axis tick labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * (max - min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 8.0, y + 4.0);
    }

    // X-axis tick labels: integer indices
    let count = series.len();
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    if count > 1 {
        let num_labels = (count - 1).min(6);
        for i in 0..=num_labels {
            let index = i * (count - 1) / num_labels;
            let x = x_position(index, count, MARGIN_LEFT, chart_width);
            let _ = ctx.fill_text(&index.to_string(), x - 8.0, height - MARGIN_BOTTOM + 18.0);
        }
    } else if count == 1 {
        let x = x_position(0, 1, MARGIN_LEFT, chart_width);
        let _ = ctx.fill_text("0", x - 4.0, height - MARGIN_BOTTOM + 18.0);
    }

    // Axis titles
    ctx.set_fill_style(&"#d1d5db".into()); // gray-300
    ctx.set_font("13px sans-serif");
    let _ = ctx.fill_text("Time", MARGIN_LEFT + chart_width / 2.0 - 14.0, height - 8.0);

    ctx.save();
    let _ = ctx.translate(14.0, MARGIN_TOP + chart_height / 2.0);
    let _ = ctx.rotate(-std::f64::consts::FRAC_PI_2);
    let _ = ctx.fill_text("Price", -16.0, 0.0);
    ctx.restore();

    draw_series(&ctx, &series.actual, min, max, chart_width, chart_height, ACTUAL_COLOR, hovered);
    draw_series(&ctx, &series.predicted, min, max, chart_width, chart_height, PREDICTED_COLOR, hovered);

    // Zero data points renders the frame plus a message, never a crash
    if series.is_empty() {
        ctx.set_fill_style(&"#6b7280".into()); // gray-500
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No model data", width / 2.0 - 52.0, height / 2.0);
    }
}

/// Draw one series as a polyline with point markers
#[allow(clippy::too_many_arguments)]
fn draw_series(
    ctx: &CanvasRenderingContext2d,
    values: &[f64],
    min: f64,
    max: f64,
    chart_width: f64,
    chart_height: f64,
    color: &str,
    hovered: Option<usize>,
) {
    if values.is_empty() {
        return;
    }
    let count = values.len();

    // Connecting line, no area fill
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, value) in values.iter().enumerate() {
        let x = x_position(i, count, MARGIN_LEFT, chart_width);
        let y = y_position(*value, min, max, MARGIN_TOP, chart_height);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Point markers; the hovered point grows
    ctx.set_fill_style(&color.into());
    for (i, value) in values.iter().enumerate() {
        let x = x_position(i, count, MARGIN_LEFT, chart_width);
        let y = y_position(*value, min, max, MARGIN_TOP, chart_height);
        let radius = if hovered == Some(i) {
            POINT_HOVER_RADIUS
        } else {
            POINT_RADIUS
        };

        ctx.begin_path();
        let _ = ctx.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}

/// Padded y-axis bounds over both series; safe for empty and constant data
fn value_bounds(series: &ModelSeries) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for value in series.actual.iter().chain(series.predicted.iter()) {
        min = min.min(*value);
        max = max.max(*value);
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

/// X coordinate of point `index` out of `count`, spread across the plot area
fn x_position(index: usize, count: usize, left: f64, width: f64) -> f64 {
    if count <= 1 {
        return left + width / 2.0;
    }
    left + (index as f64 / (count - 1) as f64) * width
}

/// Y coordinate for `value`; canvas y grows downward
fn y_position(value: f64, min: f64, max: f64, top: f64, height: f64) -> f64 {
    top + ((max - value) / (max - min)) * height
}

/// Index of the point column nearest to canvas x, if inside the plot area
fn nearest_index(x: f64, count: usize, canvas_width: f64) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let chart_width = canvas_width - MARGIN_LEFT - MARGIN_RIGHT;
    if chart_width <= 0.0 {
        return None;
    }
    if x < MARGIN_LEFT - HOVER_SLOP || x > canvas_width - MARGIN_RIGHT + HOVER_SLOP {
        return None;
    }
    if count == 1 {
        return Some(0);
    }

    let fraction = ((x - MARGIN_LEFT) / chart_width).clamp(0.0, 1.0);
    Some((fraction * (count - 1) as f64).round() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_series() -> ModelSeries {
        ModelSeries {
            actual: vec![10.0, 20.0, 30.0],
            predicted: vec![11.0, 19.0, 31.0],
        }
    }

    #[test]
    fn test_value_bounds_spans_both_series() {
        let (min, max) = value_bounds(&sample_series());
        assert!(min < 10.0);
        assert!(max > 31.0);
    }

    #[test]
    fn test_value_bounds_empty_series() {
        let (min, max) = value_bounds(&ModelSeries::default());
        assert_eq!((min, max), (0.0, 1.0));
    }

    #[test]
    fn test_value_bounds_constant_series() {
        let series = ModelSeries {
            actual: vec![5.0, 5.0],
            predicted: vec![5.0, 5.0],
        };
        let (min, max) = value_bounds(&series);
        assert!(min < max);
    }

    #[test]
    fn test_x_position_endpoints() {
        assert_eq!(x_position(0, 3, 60.0, 720.0), 60.0);
        assert_eq!(x_position(2, 3, 60.0, 720.0), 780.0);
        // A lone point sits in the middle
        assert_eq!(x_position(0, 1, 60.0, 720.0), 420.0);
    }

    #[test]
    fn test_y_position_maps_bounds_to_plot_edges() {
        assert_eq!(y_position(10.0, 0.0, 10.0, 20.0, 330.0), 20.0);
        assert_eq!(y_position(0.0, 0.0, 10.0, 20.0, 330.0), 350.0);
    }

    #[test]
    fn test_nearest_index_inside_plot() {
        assert_eq!(nearest_index(MARGIN_LEFT, 3, 800.0), Some(0));
        assert_eq!(nearest_index(800.0 - MARGIN_RIGHT, 3, 800.0), Some(2));
        assert_eq!(nearest_index(400.0, 3, 800.0), Some(1));
    }

    #[test]
    fn test_nearest_index_outside_plot() {
        assert_eq!(nearest_index(10.0, 3, 800.0), None);
        assert_eq!(nearest_index(799.0, 3, 800.0), None);
        assert_eq!(nearest_index(400.0, 0, 800.0), None);
    }
}
