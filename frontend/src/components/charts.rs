use leptos::*;
use std::f64::consts::PI;

const CHART_WIDTH: f64 = 560.0;
const CHART_HEIGHT: f64 = 220.0;

const ATTENDANCE_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const ATTENDANCE_SAMPLE: [f64; 7] = [65.0, 59.0, 80.0, 81.0, 56.0, 55.0, 40.0];
const ATTENDANCE_MAX: f64 = 100.0;
const ATTENDANCE_STROKE: &str = "rgba(52, 152, 219, 1)";
const ATTENDANCE_FILL: &str = "rgba(52, 152, 219, 0.2)";

const LEAVE_TYPE_LABELS: [&str; 4] = ["Annual", "Sick", "Casual", "Emergency"];
const LEAVE_TYPE_SAMPLE: [f64; 4] = [30.0, 20.0, 15.0, 5.0];
const LEAVE_TYPE_COLORS: [&str; 4] = [
    "rgba(41, 128, 185, 0.8)",
    "rgba(39, 174, 96, 0.8)",
    "rgba(243, 156, 18, 0.8)",
    "rgba(231, 76, 60, 0.8)",
];

/// SVG polyline points for a series scaled to `width` x `height`, with the
/// y-axis fixed at `0..=max_value`.
pub fn polyline_points(values: &[f64], width: f64, height: f64, max_value: f64) -> String {
    if values.is_empty() || max_value <= 0.0 {
        return String::new();
    }
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = step * i as f64;
            let y = height - (value / max_value).clamp(0.0, 1.0) * height;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq)]
pub struct RingSegment {
    pub color: &'static str,
    pub dash_array: String,
    pub dash_offset: f64,
}

/// Doughnut segments as stroke-dasharray runs around a circle of `radius`.
/// Empty when the series sums to zero.
pub fn ring_segments(values: &[f64], colors: &[&'static str], radius: f64) -> Vec<RingSegment> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let circumference = 2.0 * PI * radius;
    let mut offset = 0.0;
    values
        .iter()
        .zip(colors.iter().cycle())
        .map(|(value, color)| {
            let length = value / total * circumference;
            let segment = RingSegment {
                color,
                dash_array: format!("{:.2} {:.2}", length, circumference - length),
                dash_offset: -offset,
            };
            offset += length;
            segment
        })
        .collect()
}

#[component]
pub fn AttendanceTrendChart() -> impl IntoView {
    let points = polyline_points(&ATTENDANCE_SAMPLE, CHART_WIDTH, CHART_HEIGHT, ATTENDANCE_MAX);
    let fill_points = format!(
        "{} {:.1},{:.1} 0.0,{:.1}",
        points, CHART_WIDTH, CHART_HEIGHT, CHART_HEIGHT
    );

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
            // Legend at the top
            <div class="flex items-center justify-center gap-2">
                <span
                    class="inline-block w-3 h-3 rounded-sm"
                    style=format!("background-color: {}", ATTENDANCE_STROKE)
                ></span>
                <span class="text-sm font-medium">"Present"</span>
            </div>
            <svg
                viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                class="w-full"
                preserveAspectRatio="none"
            >
                <polygon points=fill_points fill=ATTENDANCE_FILL stroke="none"></polygon>
                <polyline
                    points=points
                    fill="none"
                    stroke=ATTENDANCE_STROKE
                    stroke-width="2"
                    stroke-linejoin="round"
                ></polyline>
            </svg>
            <div class="flex justify-between text-xs text-fg-muted px-1">
                {ATTENDANCE_LABELS
                    .iter()
                    .map(|label| view! { <span>{*label}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn LeaveTypeChart() -> impl IntoView {
    let radius = 70.0;
    let segments = ring_segments(&LEAVE_TYPE_SAMPLE, &LEAVE_TYPE_COLORS, radius);

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
            <div class="flex items-center justify-center">
                <svg viewBox="0 0 200 200" class="w-48 h-48 transform -rotate-90">
                    {segments
                        .into_iter()
                        .map(|segment| {
                            view! {
                                <circle
                                    cx="100"
                                    cy="100"
                                    r=radius
                                    fill="transparent"
                                    stroke=segment.color
                                    stroke-width="28"
                                    stroke-dasharray=segment.dash_array
                                    stroke-dashoffset=segment.dash_offset
                                ></circle>
                            }
                        })
                        .collect_view()}
                </svg>
            </div>
            // Legend at the bottom
            <div class="flex flex-wrap items-center justify-center gap-x-4 gap-y-1">
                {LEAVE_TYPE_LABELS
                    .iter()
                    .zip(LEAVE_TYPE_COLORS.iter())
                    .map(|(label, color)| {
                        view! {
                            <span class="flex items-center gap-1.5 text-xs">
                                <span
                                    class="inline-block w-3 h-3 rounded-sm"
                                    style=format!("background-color: {}", color)
                                ></span>
                                {*label}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn attendance_chart_renders_series_legend_and_labels() {
        let html = render_to_string(|| view! { <AttendanceTrendChart/> });
        assert!(html.contains("Present"));
        assert!(html.contains("Mon"));
        assert!(html.contains("Sun"));
    }

    #[test]
    fn leave_type_chart_renders_all_categories() {
        let html = render_to_string(|| view! { <LeaveTypeChart/> });
        for label in LEAVE_TYPE_LABELS {
            assert!(html.contains(label), "missing label {label}");
        }
    }
}
