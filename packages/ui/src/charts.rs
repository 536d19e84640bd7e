//! # SVG charts
//!
//! Small, dependency-free charts drawn as inline SVG. The geometry helpers are
//! pure functions so they can be tested without a renderer; the components only
//! turn their output into elements.
//!
//! | Component | Used by |
//! |-----------|---------|
//! | [`LineChart`] | crop health history, monthly income/expenses, cash flow |
//! | [`BarChart`] | expense breakdown |
//! | [`DoughnutChart`] | season summary, income by source |
//! | [`ScoreRing`] | crop health score |

use std::f64::consts::PI;

use dioxus::prelude::*;

/// Colours assigned to series and slices in order.
pub const PALETTE: [&str; 6] = ["#2e7d32", "#f44336", "#1976d2", "#ff9800", "#9c27b0", "#607d8b"];

const WIDTH: f64 = 300.0;
const HEIGHT: f64 = 150.0;
const PAD_X: f64 = 24.0;
const PAD_Y: f64 = 12.0;
const PLOT_W: f64 = WIDTH - 2.0 * PAD_X;
const PLOT_H: f64 = HEIGHT - 2.0 * PAD_Y - 12.0;

/// Largest value, or 1.0 when nothing is positive.
pub fn chart_max<'a>(values: impl IntoIterator<Item = &'a f64>) -> f64 {
    let max = values.into_iter().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// SVG `points` for a polyline through `values`, spread across `width` and
/// scaled so `max` touches the top.
pub fn polyline_points(values: &[f64], max: f64, width: f64, height: f64) -> String {
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = i as f64 * step;
            let y = height - (v / max) * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One bar per value, each taking `1 - gap` of its slot.
pub fn bar_rects(values: &[f64], max: f64, width: f64, height: f64, gap: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let slot = width / values.len() as f64;
    let bar_w = slot * (1.0 - gap);
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let h = (v / max) * height;
            BarRect {
                x: i as f64 * slot + (slot - bar_w) / 2.0,
                y: height - h,
                width: bar_w,
                height: h,
            }
        })
        .collect()
}

/// A doughnut segment drawn as a dashed circle stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub length: f64,
    pub offset: f64,
}

pub fn doughnut_arcs(values: &[f64], circumference: f64) -> Vec<Arc> {
    let total: f64 = values.iter().sum();
    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            let length = if total > 0.0 { v / total * circumference } else { 0.0 };
            let arc = Arc {
                length,
                offset: -start,
            };
            start += length;
            arc
        })
        .collect()
}

/// Dash length of a score ring filled to `score` percent.
pub fn ring_fill(score: f64, radius: f64) -> f64 {
    2.0 * PI * radius * score.clamp(0.0, 100.0) / 100.0
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    pub color: &'static str,
}

impl Series {
    pub fn new(label: &str, values: &[f64], color: &'static str) -> Self {
        Self {
            label: label.to_string(),
            values: values.to_vec(),
            color,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

impl Slice {
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Vec<Slice> {
        pairs
            .iter()
            .map(|(label, value)| Slice {
                label: label.to_string(),
                value: *value,
            })
            .collect()
    }
}

fn x_label_positions(count: usize) -> Vec<f64> {
    let step = if count > 1 {
        PLOT_W / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(|i| PAD_X + i as f64 * step).collect()
}

#[component]
pub fn LineChart(
    labels: Vec<&'static str>,
    series: Vec<Series>,
    /// Fixed top of the y axis; defaults to the largest value.
    max: Option<f64>,
) -> Element {
    let max = max.unwrap_or_else(|| chart_max(series.iter().flat_map(|s| s.values.iter())));
    let label_y = format!("{:.1}", HEIGHT - 4.0);
    let xs = x_label_positions(labels.len());
    let show_legend = series.len() > 1;

    rsx! {
        div {
            class: "chart line-chart",
            svg {
                view_box: "0 0 {WIDTH} {HEIGHT}",
                g {
                    transform: "translate({PAD_X} {PAD_Y})",
                    line { x1: "0", y1: "{PLOT_H}", x2: "{PLOT_W}", y2: "{PLOT_H}", stroke: "#e0e0e0" }
                    for s in series.iter() {
                        polyline {
                            key: "{s.label}",
                            points: polyline_points(&s.values, max, PLOT_W, PLOT_H),
                            fill: "none",
                            stroke: s.color,
                            stroke_width: "2",
                        }
                    }
                }
                for (label, x) in labels.iter().zip(xs) {
                    text {
                        key: "{label}",
                        x: "{x:.1}",
                        y: "{label_y}",
                        text_anchor: "middle",
                        font_size: "9",
                        fill: "#757575",
                        "{label}"
                    }
                }
            }
            if show_legend {
                Legend { entries: series.iter().map(|s| (s.label.clone(), s.color)).collect::<Vec<_>>() }
            }
        }
    }
}

#[component]
pub fn BarChart(slices: Vec<Slice>, #[props(default = PALETTE[2])] color: &'static str) -> Element {
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let bars = bar_rects(&values, chart_max(&values), PLOT_W, PLOT_H, 0.3);
    let label_y = format!("{:.1}", HEIGHT - 4.0);

    rsx! {
        div {
            class: "chart bar-chart",
            svg {
                view_box: "0 0 {WIDTH} {HEIGHT}",
                g {
                    transform: "translate({PAD_X} {PAD_Y})",
                    for (slice, bar) in slices.iter().zip(bars.iter()) {
                        rect {
                            key: "{slice.label}",
                            x: "{bar.x:.1}",
                            y: "{bar.y:.1}",
                            width: "{bar.width:.1}",
                            height: "{bar.height:.1}",
                            rx: "2",
                            fill: color,
                        }
                    }
                }
                for (slice, bar) in slices.iter().zip(bars.iter()) {
                    text {
                        key: "{slice.label}",
                        x: format!("{:.1}", PAD_X + bar.x + bar.width / 2.0),
                        y: "{label_y}",
                        text_anchor: "middle",
                        font_size: "9",
                        fill: "#757575",
                        "{slice.label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn DoughnutChart(slices: Vec<Slice>) -> Element {
    const R: f64 = 40.0;
    let circumference = 2.0 * PI * R;
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let arcs = doughnut_arcs(&values, circumference);
    let entries: Vec<(String, &'static str)> = slices
        .iter()
        .zip(PALETTE.iter().cycle())
        .map(|(s, c)| (s.label.clone(), *c))
        .collect();

    rsx! {
        div {
            class: "chart doughnut-chart",
            svg {
                view_box: "0 0 100 100",
                for ((arc, color), slice) in arcs.iter().zip(PALETTE.iter().cycle()).zip(slices.iter()) {
                    circle {
                        key: "{slice.label}",
                        cx: "50",
                        cy: "50",
                        r: "{R}",
                        fill: "none",
                        stroke: *color,
                        stroke_width: "14",
                        stroke_dasharray: format!("{:.2} {:.2}", arc.length, circumference),
                        stroke_dashoffset: format!("{:.2}", arc.offset),
                        transform: "rotate(-90 50 50)",
                    }
                }
            }
            Legend { entries }
        }
    }
}

#[component]
fn Legend(entries: Vec<(String, &'static str)>) -> Element {
    rsx! {
        ul {
            class: "chart-legend",
            for (label, color) in entries {
                li {
                    key: "{label}",
                    span { class: "legend-swatch", style: "background: {color}" }
                    "{label}"
                }
            }
        }
    }
}

/// Circular percentage gauge.
#[component]
pub fn ScoreRing(score: u32, color: &'static str) -> Element {
    const R: f64 = 35.0;
    let circumference = 2.0 * PI * R;
    let fill = ring_fill(score as f64, R);
    let dash = format!("{:.2} {:.2}", fill, circumference - fill);

    rsx! {
        div {
            class: "circular-progress",
            svg {
                width: "80",
                height: "80",
                circle { cx: "40", cy: "40", r: "{R}", fill: "none", stroke: "#e0e0e0", stroke_width: "5" }
                circle {
                    cx: "40",
                    cy: "40",
                    r: "{R}",
                    fill: "none",
                    stroke: color,
                    stroke_width: "5",
                    stroke_dasharray: dash,
                    transform: "rotate(-90 40 40)",
                }
                text {
                    x: "40",
                    y: "45",
                    text_anchor: "middle",
                    font_size: "16",
                    font_weight: "bold",
                    fill: "var(--color-gray-800)",
                    "{score}%"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_max() {
        assert_eq!(chart_max(&[65.0, 85.0, 72.0]), 85.0);
        assert_eq!(chart_max(Vec::<f64>::new().iter()), 1.0);
        assert_eq!(chart_max(&[0.0, -3.0]), 1.0);
    }

    #[test]
    fn test_polyline_endpoints() {
        assert_eq!(polyline_points(&[0.0, 10.0], 10.0, 100.0, 50.0), "0.0,50.0 100.0,0.0");
        assert_eq!(polyline_points(&[5.0, 5.0, 5.0], 10.0, 100.0, 50.0), "0.0,25.0 50.0,25.0 100.0,25.0");
        assert_eq!(polyline_points(&[], 10.0, 100.0, 50.0), "");
    }

    #[test]
    fn test_bar_rects() {
        let bars = bar_rects(&[10.0, 5.0], 10.0, 100.0, 40.0, 0.5);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0], BarRect { x: 12.5, y: 0.0, width: 25.0, height: 40.0 });
        assert_eq!(bars[1], BarRect { x: 62.5, y: 20.0, width: 25.0, height: 20.0 });
        assert!(bar_rects(&[], 1.0, 100.0, 40.0, 0.5).is_empty());
    }

    #[test]
    fn test_doughnut_arcs_cover_circle() {
        let arcs = doughnut_arcs(&[1.0, 1.0, 2.0], 100.0);
        assert_eq!(arcs[0], Arc { length: 25.0, offset: 0.0 });
        assert_eq!(arcs[1], Arc { length: 25.0, offset: -25.0 });
        assert_eq!(arcs[2], Arc { length: 50.0, offset: -50.0 });

        let empty = doughnut_arcs(&[0.0, 0.0], 100.0);
        assert!(empty.iter().all(|a| a.length == 0.0));
    }

    #[test]
    fn test_ring_fill() {
        let full = 2.0 * PI * 35.0;
        assert!((ring_fill(85.0, 35.0) - full * 0.85).abs() < 1e-9);
        assert_eq!(ring_fill(0.0, 35.0), 0.0);
        assert!((ring_fill(150.0, 35.0) - full).abs() < 1e-9);
    }
}
