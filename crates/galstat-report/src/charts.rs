//! PNG chart rendering
//!
//! One bar chart with error bars per type comparison, one two-panel scatter
//! for the redshift correlation. Styling is fixed; the charts are batch
//! artifacts, not an interactive surface.

use galstat_data::{PopulationTrend, RedshiftCorrelation, TypeComparison};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

const BAR_HALF_WIDTH: f64 = 0.3;
const ERROR_CAP_HALF_WIDTH: f64 = 0.08;

/// Padded y-range covering every mean +/- standard error
///
/// Falls back to a unit range when the inputs collapse to a point, so the
/// chart builder never sees an empty axis.
pub(crate) fn error_bar_range(summaries: &[(f64, f64)]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &(mean, se) in summaries {
        lo = lo.min(mean - se);
        hi = hi.max(mean + se);
    }
    if !lo.is_finite() || !hi.is_finite() || (hi - lo).abs() < f64::EPSILON {
        return (lo.min(0.0) - 0.5, hi.max(0.0) + 0.5);
    }
    let pad = 0.15 * (hi - lo);
    ((lo - pad).min(0.0), hi + pad)
}

/// Padded range covering a data vector
pub(crate) fn data_range(values: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() || (hi - lo).abs() < f64::EPSILON {
        return (lo.min(0.0) - 0.5, hi.max(0.0) + 0.5);
    }
    let pad = 0.05 * (hi - lo);
    (lo - pad, hi + pad)
}

fn draw_error_bar<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    x: f64,
    mean: f64,
    se: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let y0 = mean - se;
    let y1 = mean + se;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(x, y0), (x, y1)],
        BLACK,
    )))?;
    for y in [y0, y1] {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![
                (x - ERROR_CAP_HALF_WIDTH, y),
                (x + ERROR_CAP_HALF_WIDTH, y),
            ],
            BLACK,
        )))?;
    }
    Ok(())
}

/// Bar chart of one metric per population, with standard-error bars
pub fn render_type_comparison(
    out_path: &Path,
    comparison: &TypeComparison,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, (900, 620)).into_drawing_area();
    root.fill(&WHITE)?;

    let bars = [
        (1.0, comparison.spiral, BLUE),
        (2.0, comparison.elliptical, RED),
    ];
    let (y_min, y_max) = error_bar_range(&[
        (comparison.spiral.mean, comparison.spiral.standard_error),
        (comparison.elliptical.mean, comparison.elliptical.standard_error),
    ]);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Mean {} by galaxy type", comparison.metric),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0f64..3.0f64, y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(4)
        .x_label_formatter(&|x| {
            if (x - 1.0).abs() < 0.25 {
                "spiral".to_string()
            } else if (x - 2.0).abs() < 0.25 {
                "elliptical".to_string()
            } else {
                String::new()
            }
        })
        .y_desc(format!("{} ({})", comparison.metric, comparison.unit))
        .draw()?;

    for (x, summary, color) in bars {
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, summary.mean)],
            color.mix(0.6).filled(),
        )))?;
        draw_error_bar(&mut chart, x, summary.mean, summary.standard_error)?;
    }

    root.present()?;
    tracing::info!("Wrote {}", out_path.display());
    Ok(())
}

fn scatter_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    title: &str,
    unit: &str,
    trend: &PopulationTrend,
    color: RGBColor,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let (x_min, x_max) = data_range(&trend.redshifts);
    let (y_min, y_max) = data_range(&trend.densities);

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("{title} (rho = {:.3})", trend.correlation.coefficient),
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("redshift")
        .y_desc(format!("surface density ({unit})"))
        .draw()?;

    chart.draw_series(
        trend
            .redshifts
            .iter()
            .zip(&trend.densities)
            .map(|(&z, &d)| Circle::new((z, d), 2, color.mix(0.5).filled())),
    )?;

    Ok(())
}

/// Two-panel scatter of surface density against redshift
pub fn render_redshift_scatter(
    out_path: &Path,
    correlation: &RedshiftCorrelation,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, (1400, 620)).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((1, 2));
    scatter_panel(
        &panels[0],
        "Spiral surface density vs redshift",
        correlation.unit,
        &correlation.spiral,
        BLUE,
    )?;
    scatter_panel(
        &panels[1],
        "Elliptical surface density vs redshift",
        correlation.unit,
        &correlation.elliptical,
        RED,
    )?;

    root.present()?;
    tracing::info!("Wrote {}", out_path.display());
    Ok(())
}
