//! Hand-drawn SVG line chart of a flight's price over time.

use super::{FlightGroup, escape};
use chrono::NaiveDateTime;
use std::fmt::Write;

const WIDTH: f64 = 1200.0;
const HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 80.0;
const MARGIN_BOTTOM: f64 = 100.0;

const X_TICKS: usize = 6;
const Y_TICKS: usize = 5;
/// Headroom above the highest price, leaves room for the annotations.
const Y_HEADROOM: f64 = 20.0;
const ANNOTATION_OFFSET: f64 = 10.0;

const LINE_COLOR: &str = "#4c72b0";
const MIN_COLOR: &str = "green";
const MAX_COLOR: &str = "red";

struct Scale {
    t0: i64,
    t1: i64,
    p0: f64,
    p1: f64,
}

impl Scale {
    fn new(group: &FlightGroup) -> Self {
        let times = group.points.iter().map(|(t, _)| t.and_utc().timestamp());
        let (mut t0, mut t1) = times.fold((i64::MAX, i64::MIN), |(lo, hi), t| (lo.min(t), hi.max(t)));
        if t0 > t1 {
            (t0, t1) = (0, 1);
        }
        if t0 == t1 {
            t0 -= 3600;
            t1 += 3600;
        }

        let prices = group.points.iter().map(|(_, p)| *p as f64);
        let (mut p0, mut p1) = prices.fold((f64::MAX, f64::MIN), |(lo, hi), p| (lo.min(p), hi.max(p)));
        if p0 > p1 {
            (p0, p1) = (0.0, 1.0);
        }
        let pad = ((p1 - p0) * 0.05).max(5.0);
        Self {
            t0,
            t1,
            p0: p0 - pad,
            p1: p1 + pad + Y_HEADROOM,
        }
    }

    fn x(&self, t: NaiveDateTime) -> f64 {
        let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let frac = (t.and_utc().timestamp() - self.t0) as f64 / (self.t1 - self.t0) as f64;
        MARGIN_LEFT + frac * plot_w
    }

    fn y(&self, price: f64) -> f64 {
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let frac = (price - self.p0) / (self.p1 - self.p0);
        HEIGHT - MARGIN_BOTTOM - frac * plot_h
    }
}

/// Render the chart for one flight as a standalone SVG document.
pub fn render_svg(group: &FlightGroup) -> String {
    let scale = Scale::new(group);
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);

    let _ = writeln!(
        svg,
        r#"<text x="{}" y="32" font-size="20" text-anchor="middle">Price Trend for Flight on {}</text>"#,
        WIDTH / 2.0,
        group.flight_at.format("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(
        svg,
        r##"<text x="{}" y="56" font-size="13" fill="#555" text-anchor="middle">{} → {}</text>"##,
        WIDTH / 2.0,
        escape(&group.departure),
        escape(&group.destination)
    );

    draw_grid(&mut svg, &scale);
    draw_series(&mut svg, &scale, group);
    draw_annotations(&mut svg, &scale, group);

    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" font-size="16" text-anchor="middle">Time of Check</text>"#,
        MARGIN_LEFT + (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / 2.0,
        HEIGHT - 20.0
    );
    let mid_y = MARGIN_TOP + (HEIGHT - MARGIN_TOP - MARGIN_BOTTOM) / 2.0;
    let _ = writeln!(
        svg,
        r#"<text x="24" y="{mid_y}" font-size="16" text-anchor="middle" transform="rotate(-90 24 {mid_y})">Price (€)</text>"#
    );

    svg.push_str("</svg>\n");
    svg
}

fn draw_grid(svg: &mut String, scale: &Scale) {
    let left = MARGIN_LEFT;
    let right = WIDTH - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = HEIGHT - MARGIN_BOTTOM;

    for i in 0..=Y_TICKS {
        let price = scale.p0 + (scale.p1 - scale.p0) * i as f64 / Y_TICKS as f64;
        let y = scale.y(price);
        let _ = writeln!(
            svg,
            r##"<line x1="{left}" y1="{y:.1}" x2="{right}" y2="{y:.1}" stroke="#ccc" stroke-dasharray="4 4" stroke-opacity="0.7"/>"##
        );
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{:.1}" font-size="12" text-anchor="end">{:.0}</text>"#,
            left - 8.0,
            y + 4.0,
            price
        );
    }

    for i in 0..=X_TICKS {
        let t = scale.t0 + (scale.t1 - scale.t0) * i as i64 / X_TICKS as i64;
        let Some(at) = chrono::DateTime::from_timestamp(t, 0).map(|d| d.naive_utc()) else {
            continue;
        };
        let x = scale.x(at);
        let _ = writeln!(
            svg,
            r##"<line x1="{x:.1}" y1="{top}" x2="{x:.1}" y2="{bottom}" stroke="#ccc" stroke-dasharray="4 4" stroke-opacity="0.7"/>"##
        );
        let _ = writeln!(
            svg,
            r#"<text x="{x:.1}" y="{}" font-size="12" text-anchor="middle"><tspan x="{x:.1}">{}</tspan><tspan x="{x:.1}" dy="14">{}</tspan></text>"#,
            bottom + 18.0,
            at.format("%Y-%m-%d"),
            at.format("%H:%M")
        );
    }

    let _ = writeln!(
        svg,
        r##"<rect x="{left}" y="{top}" width="{}" height="{}" fill="none" stroke="#333"/>"##,
        right - left,
        bottom - top
    );
}

fn draw_series(svg: &mut String, scale: &Scale, group: &FlightGroup) {
    let coords: Vec<String> = group
        .points
        .iter()
        .map(|(t, p)| format!("{:.1},{:.1}", scale.x(*t), scale.y(*p as f64)))
        .collect();

    let _ = writeln!(
        svg,
        r#"<polyline points="{}" fill="none" stroke="{LINE_COLOR}" stroke-width="2"/>"#,
        coords.join(" ")
    );
    for (t, p) in &group.points {
        let _ = writeln!(
            svg,
            r#"<circle cx="{:.1}" cy="{:.1}" r="4" fill="{LINE_COLOR}"/>"#,
            scale.x(*t),
            scale.y(*p as f64)
        );
    }
}

fn draw_annotations(svg: &mut String, scale: &Scale, group: &FlightGroup) {
    let marks = [
        (group.min_point(), "Min", MIN_COLOR),
        (group.max_point(), "Max", MAX_COLOR),
    ];
    for (point, label, color) in marks {
        let Some((t, price)) = point else { continue };
        let x = scale.x(t);
        let y = scale.y(price as f64);
        let text_y = scale.y(price as f64 + ANNOTATION_OFFSET);
        let _ = writeln!(
            svg,
            r#"<line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}" stroke="{color}" stroke-width="1.5"/>"#,
            text_y + 4.0,
            y - 5.0
        );
        let _ = writeln!(
            svg,
            r#"<text x="{x:.1}" y="{text_y:.1}" font-size="14" fill="{color}">{label} Price: {price}€</text>"#
        );
    }
}
