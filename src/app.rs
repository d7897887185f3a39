use leptos::*;

use crate::domain::{
    chart::{AxisWindow, PlotArea, Viewport, YDomain},
    config::ZoomOptions,
    logging::LogComponent,
};
use crate::log_info;
use crate::presentation::use_chart_zoom;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 300.0;
const POINTS: usize = 240;

/// Deterministic demo series: slow trend, two waves, always positive.
pub fn synthetic_series(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            60.0 + t * 0.08 + (t / 9.0).sin() * 12.0 + (t / 2.3).cos() * 3.0
        })
        .collect()
}

/// SVG `points` attribute for the part of `series` inside the window.
pub fn polyline_points(series: &[f64], x: AxisWindow, y: YDomain) -> String {
    let top = y.max.unwrap_or_else(|| series.iter().copied().fold(f64::MIN, f64::max));
    let y_span = if top - y.min > 0.0 { top - y.min } else { 1.0 };
    let area = PlotArea { left: 0.0, top: 0.0, width: WIDTH, height: HEIGHT };
    let window = Viewport::new(x.min, x.max, None);
    let first = x.min.floor().max(0.0) as usize;
    let last = x.max.ceil().max(0.0) as usize;

    series
        .iter()
        .enumerate()
        .skip(first)
        .take(last.saturating_sub(first) + 1)
        .map(|(i, v)| {
            let px = area.index_to_x(i as f64, &window);
            let py = HEIGHT - (v - y.min) / y_span * HEIGHT;
            format!("{:.1},{:.1}", px, py)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 📈 Demo host: a line chart driven by `use_chart_zoom`
#[component]
pub fn ZoomDemo() -> impl IntoView {
    let series = store_value(synthetic_series(POINTS));
    let zoom = use_chart_zoom(POINTS, ZoomOptions::default().with_min_window(5.0));
    let container = zoom.container;
    let surface_ref = container.node_ref;

    zoom.set_y_sources
        .call(vec![series.with_value(|s| s.iter().copied().map(Some).collect())]);
    log_info!(LogComponent::Presentation("ZoomDemo"), "Mounted with {} points", POINTS);

    let points = move || series.with_value(|s| polyline_points(s, zoom.x_axis.get(), zoom.y_domain.get()));
    let window_label = move || {
        let x = zoom.x_axis.get();
        format!("{:.1} .. {:.1}", x.min, x.max)
    };

    view! {
        <style>
            {r#"
            .zoom-demo {
                font-family: -apple-system, BlinkMacSystemFont, sans-serif;
                padding: 20px;
            }

            .zoom-surface {
                width: 800px;
                height: 300px;
                border: 1px solid #4a5d73;
                border-radius: 6px;
                cursor: grab;
                touch-action: none;
                user-select: none;
            }

            .zoom-toolbar {
                display: flex;
                gap: 12px;
                align-items: center;
                margin-top: 10px;
            }
            "#}
        </style>
        <div class="zoom-demo">
            <div
                class="zoom-surface"
                node_ref=surface_ref
                on:mousedown=move |ev| container.on_mouse_down.call(ev)
                on:mousemove=move |ev| container.on_mouse_move.call(ev)
                on:mouseup=move |ev| container.on_mouse_up.call(ev)
                on:mouseleave=move |ev| container.on_mouse_leave.call(ev)
                on:touchstart=move |ev| container.on_touch_start.call(ev)
            >
                <svg width="800" height="300" viewBox="0 0 800 300">
                    <polyline points=points fill="none" stroke="#2a5298" stroke-width="2" />
                </svg>
            </div>
            <div class="zoom-toolbar">
                <button
                    disabled=move || !zoom.is_zoomed.get()
                    on:click=move |_| zoom.reset_zoom.call(())
                >
                    "Reset zoom"
                </button>
                <span>{window_label}</span>
            </div>
        </div>
    }
}
