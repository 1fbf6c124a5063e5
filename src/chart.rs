use crate::models::ChartPoint;
use std::fmt::Write;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const PADDING_X: f64 = 44.0;
const PADDING_Y: f64 = 34.0;
const TOP: f64 = 24.0;
const TICKS: usize = 4;

/// Vertical range and pixel mapping for a series of values.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Scale {
    min: f64,
    max: f64,
    x_step: f64,
}

impl Scale {
    fn fit(values: &[f64]) -> Self {
        let mut min = values.iter().copied().fold(0.0_f64, f64::min);
        let mut max = values.iter().copied().fold(0.0_f64, f64::max);
        if min == max {
            min -= 1.0;
            max += 1.0;
        }
        let x_step = if values.len() > 1 {
            (WIDTH - PADDING_X * 2.0) / (values.len() - 1) as f64
        } else {
            0.0
        };
        Self { min, max, x_step }
    }

    fn x(&self, index: usize) -> f64 {
        PADDING_X + index as f64 * self.x_step
    }

    fn y(&self, value: f64) -> f64 {
        let scale_y = (HEIGHT - TOP - PADDING_Y) / (self.max - self.min);
        HEIGHT - PADDING_Y - (value - self.min) * scale_y
    }
}

/// Renders the engagement-rate trend as an inline SVG element.
pub fn render_svg(points: &[ChartPoint]) -> String {
    let mut svg = format!(
        r#"<svg id="chart" viewBox="0 0 {WIDTH} {HEIGHT}" aria-label="Engagement rate trend" role="img">"#
    );

    if points.is_empty() {
        svg.push_str(
            r#"<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text></svg>"#,
        );
        return svg;
    }

    let values: Vec<f64> = points.iter().map(|point| point.engagement_rate).collect();
    let scale = Scale::fit(&values);
    let range = scale.max - scale.min;

    for tick in 0..=TICKS {
        let value = scale.min + range * tick as f64 / TICKS as f64;
        let y = scale.y(value);
        let _ = write!(
            svg,
            r#"<line class="chart-grid" x1="{PADDING_X}" y1="{y:.2}" x2="{x2}" y2="{y:.2}" /><text class="chart-label" x="{lx}" y="{ly:.2}" text-anchor="end">{label}</text>"#,
            x2 = WIDTH - PADDING_X,
            lx = PADDING_X - 10.0,
            ly = y + 4.0,
            label = format_axis_value(value),
        );
    }

    let zero = scale.y(0.0);
    let _ = write!(
        svg,
        r#"<line class="chart-axis" x1="{PADDING_X}" y1="{zero:.2}" x2="{x2}" y2="{zero:.2}" />"#,
        x2 = WIDTH - PADDING_X,
    );

    let _ = write!(svg, r#"<path class="chart-line" d="{}" />"#, line_path(&scale, &values));

    for (index, value) in values.iter().enumerate() {
        let _ = write!(
            svg,
            r#"<circle class="chart-point" cx="{:.2}" cy="{:.2}" r="4"><title>{:.2}%</title></circle>"#,
            scale.x(index),
            scale.y(*value),
            value,
        );
    }

    let label_every = if points.len() > 8 { 2 } else { 1 };
    for (index, point) in points.iter().enumerate().step_by(label_every) {
        let _ = write!(
            svg,
            r#"<text class="chart-label" x="{:.2}" y="{}" text-anchor="middle">{}</text>"#,
            scale.x(index),
            HEIGHT - PADDING_Y + 18.0,
            point.date.format("%m-%d"),
        );
    }

    svg.push_str("</svg>");
    svg
}

fn line_path(scale: &Scale, values: &[f64]) -> String {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let command = if index == 0 { 'M' } else { 'L' };
            format!("{command} {:.2} {:.2}", scale.x(index), scale.y(*value))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_axis_value(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn points(rates: &[f64]) -> Vec<ChartPoint> {
        rates
            .iter()
            .enumerate()
            .map(|(offset, rate)| ChartPoint {
                date: NaiveDate::from_ymd_opt(2026, 1, 1 + offset as u32).unwrap(),
                engagement_rate: *rate,
            })
            .collect()
    }

    #[test]
    fn empty_series_shows_placeholder() {
        let svg = render_svg(&[]);
        assert!(svg.contains("No data yet"));
        assert!(!svg.contains("chart-line"));
    }

    #[test]
    fn flat_zero_series_gets_a_range() {
        let scale = Scale::fit(&[0.0, 0.0]);
        assert_eq!(scale.min, -1.0);
        assert_eq!(scale.max, 1.0);
    }

    #[test]
    fn range_always_includes_zero() {
        let scale = Scale::fit(&[15.0, 7.5]);
        assert_eq!(scale.min, 0.0);
        assert_eq!(scale.max, 15.0);
        assert_eq!(scale.y(0.0), HEIGHT - PADDING_Y);
        assert!((scale.y(15.0) - TOP).abs() < 1e-9);
    }

    #[test]
    fn one_marker_per_point_in_order() {
        let svg = render_svg(&points(&[15.0, 0.0]));
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains(r#"d="M 44.00 24.00 L 556.00 226.00""#));
        let first = svg.find("01-01").unwrap();
        let second = svg.find("01-02").unwrap();
        assert!(first < second);
    }

    #[test]
    fn long_series_labels_every_other_date() {
        let svg = render_svg(&points(&[1.0; 10]));
        assert!(svg.contains(">01-01<"));
        assert!(!svg.contains(">01-02<"));
        assert!(svg.contains(">01-03<"));
    }

    #[test]
    fn axis_labels_drop_trailing_zero() {
        assert_eq!(format_axis_value(15.0), "15");
        assert_eq!(format_axis_value(3.75), "3.8");
    }
}
