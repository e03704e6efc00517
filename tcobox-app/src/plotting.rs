//! Renders the TCO comparison chart into an in-memory PNG.

use anyhow::{Context, Result};
use image::{codecs::png::PngEncoder, ColorType, ImageEncoder};
use plotters::coord::{ranged1d::SegmentedCoord, types::RangedCoordu32, Shift};
use plotters::prelude::*;
use plotters::style::{
    text_anchor::{HPos, Pos, VPos},
    FontStyle,
};
use std::ops::Range;
use tracing::warn;
use tcobox_schemas::{
    breakdown::{ComparisonResult, CostBreakdown},
    technology::Technology,
};

use crate::format::millions;

pub const CHART_SIZE: (u32, u32) = (1000, 500);

const MILLION: f64 = 1e6;
const SAVINGS_GREEN: RGBColor = RGBColor(0, 150, 0);

type Component = (&'static str, RGBColor, fn(&CostBreakdown) -> f64);

/// Stacked bar components, bottom to top.
const COMPONENTS: [Component; 3] = [
    ("Investment", RGBColor(31, 119, 180), |b| b.capex_with_tax),
    ("Energy", RGBColor(255, 127, 14), |b| b.energy_cost),
    ("Maintenance", RGBColor(44, 160, 44), |b| b.maintenance_cost),
];

/// Whether the chart carries text (caption, axis labels, legend, savings label).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Labels {
    Shown,
    Omitted,
}

/// Draws stacked cost bars with the net TCO line and returns the PNG bytes.
///
/// Text needs a system `sans-serif` font. When none can be loaded the chart is
/// drawn again without any text, so a run always gets its bars and TCO line.
pub fn render_tco_chart(result: &ComparisonResult, project_years: u32) -> Result<Vec<u8>> {
    match render_png(result, project_years, Labels::Shown) {
        Ok(png) => Ok(png),
        Err(e) => {
            warn!(error = %e, "Chart text could not be drawn, rendering without labels");
            render_png(result, project_years, Labels::Omitted)
        }
    }
}

fn render_png(result: &ComparisonResult, project_years: u32, labels: Labels) -> Result<Vec<u8>> {
    let (width, height) = CHART_SIZE;
    let mut pixels = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        draw_tco_chart(&root, result, project_years, labels)?;
        root.present()?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&pixels, width, height, ColorType::Rgb8)
        .context("Failed to encode the chart as PNG")?;
    Ok(png)
}

fn draw_tco_chart(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    result: &ComparisonResult,
    project_years: u32,
    labels: Labels,
) -> Result<()> {
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(root);
    if labels == Labels::Shown {
        builder.caption(
            format!("Total cost of ownership over {} years", project_years),
            ("sans-serif", 28).into_font(),
        );
    }
    let mut chart = builder
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(technology_axis(), value_range(result))?;

    if labels == Labels::Shown {
        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Millions of COP")
            .y_label_formatter(&|v: &f64| format!("{:.0}M", v))
            .x_label_formatter(&|v: &SegmentValue<u32>| match v {
                SegmentValue::CenterOf(i) => Technology::ALL
                    .get(*i as usize)
                    .map_or_else(String::new, |t| t.label().to_string()),
                _ => String::new(),
            })
            .draw()?;
    }

    for (k, (name, color, _)) in COMPONENTS.iter().enumerate() {
        let color = *color;
        let bars = result.iter().enumerate().map(move |(i, (_, b))| {
            let (bottom, top) = stacked_segments(b)[k];
            let (left, right) = bar_span(i as u32);
            let mut bar = Rectangle::new([(left, bottom), (right, top)], color.filled());
            bar.set_margin(0, 0, 30, 30);
            bar
        });
        chart
            .draw_series(bars)?
            .label(*name)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
    }

    let net_points: Vec<(SegmentValue<u32>, f64)> = result
        .iter()
        .enumerate()
        .map(|(i, (_, b))| (SegmentValue::CenterOf(i as u32), b.net_tco / MILLION))
        .collect();
    chart
        .draw_series(DashedLineSeries::new(
            net_points.clone(),
            10,
            6,
            BLACK.stroke_width(2),
        ))?
        .label("Net TCO")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(2)));
    chart.draw_series(
        net_points
            .iter()
            .map(|(x, y)| Circle::new((x.clone(), *y), 5, BLACK.filled())),
    )?;

    if result.is_viable() {
        let diesel = result.baseline();
        let anchor = (
            SegmentValue::CenterOf(Technology::Diesel as u32),
            diesel.gross_cost().max(diesel.net_tco) / MILLION,
        );
        let arrow = EmptyElement::at(anchor)
            + PathElement::new(vec![(0, -24), (0, -4)], SAVINGS_GREEN.stroke_width(2));
        if labels == Labels::Shown {
            let label_style = ("sans-serif", 18)
                .into_font()
                .style(FontStyle::Bold)
                .color(&SAVINGS_GREEN)
                .pos(Pos::new(HPos::Center, VPos::Bottom));
            let text = format!("Savings: {}", millions(result.savings));
            chart.draw_series(std::iter::once(arrow + Text::new(text, (0, -28), label_style)))?;
        } else {
            chart.draw_series(std::iter::once(arrow))?;
        }
    }

    if labels == Labels::Shown {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }
    Ok(())
}

/// One segment per technology; the last one closes at `SegmentValue::Last`.
fn technology_axis() -> SegmentedCoord<RangedCoordu32> {
    (0u32..Technology::ALL.len() as u32 - 1).into_segmented()
}

fn bar_span(index: u32) -> (SegmentValue<u32>, SegmentValue<u32>) {
    let right = if index + 1 < Technology::ALL.len() as u32 {
        SegmentValue::Exact(index + 1)
    } else {
        SegmentValue::Last
    };
    (SegmentValue::Exact(index), right)
}

/// `(bottom, top)` of each stacked component, in millions.
fn stacked_segments(b: &CostBreakdown) -> [(f64, f64); 3] {
    let mut bottom = 0.0;
    COMPONENTS.map(|(_, _, value)| {
        let top = bottom + value(b) / MILLION;
        let segment = (bottom, top);
        bottom = top;
        segment
    })
}

/// Y range covering every bar, the net TCO line and headroom for the annotation.
fn value_range(result: &ComparisonResult) -> Range<f64> {
    let (low, high) = result
        .iter()
        .flat_map(|(_, b)| {
            stacked_segments(b)
                .into_iter()
                .flat_map(|(bottom, top)| [bottom, top])
                .chain(std::iter::once(b.net_tco / MILLION))
        })
        .fold((0.0f64, 0.0f64), |(low, high), v| (low.min(v), high.max(v)));
    let span = (high - low).max(1.0);
    let start = if low < 0.0 { low - span * 0.05 } else { 0.0 };
    start..high + span * 0.2
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tcobox_core::{builder::SnapshotBuilder, engine::compare_all};

    fn reference() -> ComparisonResult {
        let snapshot = SnapshotBuilder::new().build().unwrap();
        compare_all(&snapshot.profiles(), &snapshot.project)
    }

    #[test]
    fn segments_stack_in_millions() {
        let segments = stacked_segments(reference().electric());
        assert_relative_eq!(segments[0].0, 0.0);
        assert_relative_eq!(segments[0].1, 160.65, max_relative = 1e-12);
        assert_relative_eq!(segments[1].1, 160.65 + 84.456, max_relative = 1e-12);
        assert_relative_eq!(segments[2].1, 264.106, max_relative = 1e-12);
        assert_eq!(segments[1].0, segments[0].1);
    }

    #[test]
    fn range_leaves_headroom_above_tallest_bar() {
        let result = reference();
        let range = value_range(&result);
        let tallest = result.baseline().gross_cost() / MILLION;
        assert_eq!(range.start, 0.0);
        assert!(range.end > tallest);
    }

    #[test]
    fn range_extends_below_zero_for_negative_tco() {
        let mut result = reference();
        result.breakdowns[2].net_tco = -50_000_000.0;
        assert!(value_range(&result).start < -50.0);
    }

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn renders_png_in_memory() {
        let png = render_tco_chart(&reference(), 5).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn renders_without_fonts_when_labels_are_omitted() {
        let png = render_png(&reference(), 5, Labels::Omitted).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn axis_has_one_slot_per_technology() {
        // Exact(0..=3) plus the closing `Last` edge.
        assert_eq!(technology_axis().size(), Technology::ALL.len() + 1);
        assert!(matches!(bar_span(0), (SegmentValue::Exact(0), SegmentValue::Exact(1))));
        assert!(matches!(bar_span(3), (SegmentValue::Exact(3), SegmentValue::Last)));
    }
}
