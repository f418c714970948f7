//! Inline SVG charts: TVL trend line and asset distribution pie.

use std::f64::consts::PI;

use crate::models::chart::{DistributionSlice, TrendPoint};

use super::format::{escape_html, format_percent};

const LINE_COLOR: &str = "rgb(59, 130, 246)";
const LINE_FILL: &str = "rgba(59, 130, 246, 0.1)";

// Trend plot geometry (viewBox units)
const TREND_WIDTH: f64 = 480.0;
const TREND_HEIGHT: f64 = 260.0;
const PLOT_LEFT: f64 = 56.0;
const PLOT_RIGHT: f64 = 460.0;
const PLOT_TOP: f64 = 24.0;
const PLOT_BOTTOM: f64 = 210.0;
const GRID_LINES: usize = 4;

// Pie geometry
const PIE_SIZE: f64 = 260.0;
const PIE_RADIUS: f64 = 110.0;
/// Fraction of a turn below which a gap is invisible at the rendered precision.
const FULL_TURN_EPSILON: f64 = 1e-4;

/// Both chart cards side by side.
pub fn render_charts(trend: &[TrendPoint], distribution: &[DistributionSlice]) -> String {
    format!(
        r#"
    <div class="charts">
        <div class="card chart">
            <h3>TVL Trend</h3>{trend}
        </div>
        <div class="card chart">
            <h3>Asset Distribution</h3>{pie}
        </div>
    </div>"#,
        trend = render_trend_chart(trend),
        pie = render_distribution_chart(distribution),
    )
}

/// Map trend values to (x, y) positions inside the plot area.
///
/// The y axis starts at zero and tops out 10% above the largest value.
pub fn trend_coordinates(points: &[TrendPoint]) -> Vec<(f64, f64)> {
    let max = axis_max(points);
    let n = points.len();
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if n > 1 {
                PLOT_LEFT + (PLOT_RIGHT - PLOT_LEFT) * i as f64 / (n - 1) as f64
            } else {
                (PLOT_LEFT + PLOT_RIGHT) / 2.0
            };
            let clamped = p.value_millions.max(0.0);
            let y = PLOT_BOTTOM - (PLOT_BOTTOM - PLOT_TOP) * clamped / max;
            (x, y)
        })
        .collect()
}

fn axis_max(points: &[TrendPoint]) -> f64 {
    let largest = points
        .iter()
        .map(|p| p.value_millions)
        .fold(0.0_f64, f64::max);
    if largest > 0.0 {
        largest * 1.1
    } else {
        1.0
    }
}

pub fn render_trend_chart(points: &[TrendPoint]) -> String {
    let max = axis_max(points);
    let coords = trend_coordinates(points);

    let mut svg = format!(
        r#"
            <svg viewBox="0 0 {TREND_WIDTH} {TREND_HEIGHT}" role="img" aria-label="TVL trend">"#
    );

    for i in 0..=GRID_LINES {
        let value = max * i as f64 / GRID_LINES as f64;
        let y = PLOT_BOTTOM - (PLOT_BOTTOM - PLOT_TOP) * i as f64 / GRID_LINES as f64;
        svg.push_str(&format!(
            r##"
                <line x1="{PLOT_LEFT}" y1="{y:.1}" x2="{PLOT_RIGHT}" y2="{y:.1}" stroke="#374151" stroke-width="1"/>
                <text x="{:.1}" y="{:.1}" fill="#9ca3af" font-size="11" text-anchor="end">{value:.0}</text>"##,
            PLOT_LEFT - 8.0,
            y + 4.0,
        ));
    }

    if !coords.is_empty() {
        let line: Vec<String> = coords.iter().map(|(x, y)| format!("{x:.1},{y:.1}")).collect();
        let line = line.join(" ");
        let (first_x, _) = coords[0];
        let (last_x, _) = coords[coords.len() - 1];
        svg.push_str(&format!(
            r#"
                <polygon points="{first_x:.1},{PLOT_BOTTOM} {line} {last_x:.1},{PLOT_BOTTOM}" fill="{LINE_FILL}"/>
                <polyline points="{line}" fill="none" stroke="{LINE_COLOR}" stroke-width="2"/>"#
        ));
    }

    for (point, (x, y)) in points.iter().zip(&coords) {
        svg.push_str(&format!(
            r##"
                <circle cx="{x:.1}" cy="{y:.1}" r="4" fill="{LINE_COLOR}"/>
                <text x="{x:.1}" y="{:.1}" fill="#ffffff" font-size="11" text-anchor="middle">{:.2}</text>
                <text x="{x:.1}" y="{:.1}" fill="#9ca3af" font-size="11" text-anchor="middle">{}</text>"##,
            y - 10.0,
            point.value_millions,
            PLOT_BOTTOM + 20.0,
            escape_html(&point.label),
        ));
    }

    svg.push_str(&format!(
        r##"
                <text x="{PLOT_LEFT}" y="{:.1}" fill="#d1d5db" font-size="12">Flare TVL ($M)</text>
            </svg>"##,
        TREND_HEIGHT - 8.0
    ));
    svg
}

/// SVG path for one pie slice between two fractions of the full turn.
fn slice_path(start_fraction: f64, end_fraction: f64) -> String {
    let c = PIE_SIZE / 2.0;
    let point = |fraction: f64| {
        // Start at 12 o'clock, go clockwise
        let angle = 2.0 * PI * fraction - PI / 2.0;
        (c + PIE_RADIUS * angle.cos(), c + PIE_RADIUS * angle.sin())
    };
    let (x1, y1) = point(start_fraction);
    let (x2, y2) = point(end_fraction);
    let large_arc = u8::from(end_fraction - start_fraction > 0.5);
    format!(
        "M {c:.1} {c:.1} L {x1:.2} {y1:.2} A {PIE_RADIUS} {PIE_RADIUS} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
    )
}

pub fn render_distribution_chart(slices: &[DistributionSlice]) -> String {
    let visible: Vec<&DistributionSlice> = slices.iter().filter(|s| s.share_pct > 0.0).collect();
    let c = PIE_SIZE / 2.0;

    let mut svg = format!(
        r#"
            <svg viewBox="0 0 {PIE_SIZE} {PIE_SIZE}" role="img" aria-label="Asset distribution">"#
    );

    if visible.is_empty() {
        svg.push_str(&format!(
            r##"
                <text x="{c}" y="{c}" fill="#9ca3af" font-size="14" text-anchor="middle">No data</text>"##
        ));
    }

    // A slice covering (almost) the whole turn has coincident arc endpoints
    // and would not be drawn as a path; it becomes a circle under the rest.
    let mut paths = String::new();
    let mut start = 0.0;
    for slice in &visible {
        let end = (start + slice.share_pct / 100.0).min(1.0);
        if end - start >= 1.0 - FULL_TURN_EPSILON {
            svg.push_str(&format!(
                r#"
                <circle cx="{c}" cy="{c}" r="{PIE_RADIUS}" fill="{}"/>"#,
                escape_html(&slice.color)
            ));
        } else {
            paths.push_str(&format!(
                r##"
                <path d="{}" fill="{}" stroke="#1f2937" stroke-width="1"/>"##,
                slice_path(start, end),
                escape_html(&slice.color),
            ));
        }
        start = end;
    }
    svg.push_str(&paths);

    svg.push_str(
        r#"
            </svg>"#,
    );

    let legend: String = slices
        .iter()
        .map(|s| {
            format!(
                r#"
                <span><span class="swatch" style="background: {}"></span>{} {}</span>"#,
                escape_html(&s.color),
                escape_html(&s.symbol),
                format_percent(s.share_pct),
            )
        })
        .collect();

    format!(
        r#"{svg}
            <div class="legend">{legend}
            </div>"#
    )
}
