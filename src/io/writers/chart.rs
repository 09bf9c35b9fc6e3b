use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::core::model::Comparison;
use crate::error::{Error, Result};
use crate::types::Metric;

const MARKER_SIZE: i32 = 4;
const LINE_WIDTH: u32 = 2;
const AXIS_MARGIN: f64 = 0.05;

/// Padded `(min, max)` over the finite values, for an axis range.
/// Degenerate inputs still yield a non-empty range.
pub fn axis_bounds<I: IntoIterator<Item = f64>>(values: I) -> (f64, f64) {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if lo > hi {
        return (0.0, 1.0);
    }
    if lo == hi {
        let half = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
        return (lo - half, hi + half);
    }
    let pad = (hi - lo) * AXIS_MARGIN;
    (lo - pad, hi + pad)
}

fn finite_points<'a>(
    xs: impl Iterator<Item = &'a f64>,
    ys: impl Iterator<Item = &'a f64>,
) -> Vec<(f64, f64)> {
    xs.copied()
        .zip(ys.copied())
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect()
}

fn draw_metric_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    metric: Metric,
    comparisons: &[Comparison],
) -> Result<()> {
    let (x_lo, x_hi) = axis_bounds(comparisons.iter().flat_map(|c| c.density.iter().copied()));
    let (y_lo, y_hi) = axis_bounds(comparisons.iter().flat_map(|c| {
        c.observed(metric)
            .iter()
            .chain(c.predicted(metric).iter())
            .copied()
    }));

    let mut chart = ChartBuilder::on(area)
        .caption(metric.to_string(), ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(Error::render)?;

    chart
        .configure_mesh()
        .x_desc("Density")
        .y_desc(metric.to_string())
        .draw()
        .map_err(Error::render)?;

    for (idx, cmp) in comparisons.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let observed = finite_points(cmp.density.iter(), cmp.observed(metric).iter());
        let predicted = finite_points(cmp.density.iter(), cmp.predicted(metric).iter());

        chart
            .draw_series(
                observed
                    .into_iter()
                    .map(|p| Circle::new(p, MARKER_SIZE, color.filled())),
            )
            .map_err(Error::render)?
            .label(format!("{}: Observed", cmp.label))
            .legend(move |(x, y)| Circle::new((x + 10, y), MARKER_SIZE, color.filled()));

        chart
            .draw_series(LineSeries::new(predicted, color.stroke_width(LINE_WIDTH)))
            .map_err(Error::render)?
            .label(format!("{}: Formula", cmp.label))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(Error::render)?;

    Ok(())
}

/// Render the flops and memops charts side by side into `output` (PNG),
/// replacing any existing file.
pub fn write_comparison_chart(
    comparisons: &[Comparison],
    output: &Path,
    width: u32,
    height: u32,
) -> Result<()> {
    let root = BitMapBackend::new(output, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(Error::render)?;

    let panels = root.split_evenly((1, 2));
    for (panel, metric) in panels.iter().zip(Metric::ALL) {
        draw_metric_panel(panel, metric, comparisons)?;
    }

    root.present().map_err(Error::render)?;
    info!(
        "Wrote {}x{} figure with {} series to {:?}",
        width,
        height,
        comparisons.len(),
        output
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LayoutPair;
    use ndarray::array;

    fn sample(label: &str, layout: LayoutPair) -> Comparison {
        Comparison {
            label: label.to_string(),
            layout,
            density: array![0.1, 0.2, 0.4],
            observed_flops: array![190.0, 410.0, 800.0],
            observed_memops: array![300.0, 610.0, 1190.0],
            predicted_flops: array![200.0, 400.0, 800.0],
            predicted_memops: array![302.0, 602.0, 1202.0],
        }
    }

    #[test]
    fn test_write_comparison_chart_produces_png() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("chart.png");
        let comparisons = [
            sample("csr_X_dense.csv", LayoutPair::CsrDense),
            sample("csc_X_dense.csv", LayoutPair::CscDense),
        ];

        write_comparison_chart(&comparisons, &output, 600, 250).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
    }

    #[test]
    fn test_axis_bounds_pads_range() {
        let (lo, hi) = axis_bounds([0.0, 10.0]);
        assert!((lo + 0.5).abs() < 1e-12);
        assert!((hi - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_axis_bounds_single_value() {
        assert_eq!(axis_bounds([5.0, 5.0]), (4.5, 5.5));
        assert_eq!(axis_bounds([0.0]), (-1.0, 1.0));
    }

    #[test]
    fn test_axis_bounds_ignores_non_finite() {
        let (lo, hi) = axis_bounds([f64::NAN, 1.0, f64::INFINITY, 3.0]);
        assert!(lo < 1.0 && lo > 0.8);
        assert!(hi > 3.0 && hi < 3.2);
    }

    #[test]
    fn test_axis_bounds_empty() {
        assert_eq!(axis_bounds(std::iter::empty()), (0.0, 1.0));
    }

    #[test]
    fn test_finite_points_drops_nan_pairs() {
        let xs = [0.1, 0.2, 0.3];
        let ys = [1.0, f64::NAN, 3.0];
        assert_eq!(
            finite_points(xs.iter(), ys.iter()),
            vec![(0.1, 1.0), (0.3, 3.0)]
        );
    }
}
