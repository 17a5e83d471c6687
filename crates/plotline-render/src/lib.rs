use std::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;

use plotline::request::PlotRequest;
use plotline::series::NumericSeries;

pub mod error;
pub mod format;

use crate::error::{RenderError, RenderResult};
use crate::format::ImageFormat;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

/// Renders the request's series as a line chart and writes it to the
/// request's output path, in the format implied by the path's extension.
///
/// An empty series is rejected before any backend is constructed, so a
/// failed render never leaves an output file behind.
pub fn render(request: &PlotRequest, options: &RenderOptions) -> RenderResult<()> {
    let format = ImageFormat::from_path(&request.output)?;
    if request.series.is_empty() {
        return Err(RenderError::EmptySeries);
    }

    let size = (options.width, options.height);
    match format {
        ImageFormat::Svg => {
            let root = SVGBackend::new(request.output.as_path(), size).into_drawing_area();
            draw_chart(&root, request)
        }
        _ => {
            let root = BitMapBackend::new(request.output.as_path(), size).into_drawing_area();
            draw_chart(&root, request)
        }
    }
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    request: &PlotRequest,
) -> RenderResult<()> {
    root.fill(&WHITE).map_err(RenderError::backend)?;

    let (x_range, y_range) = axis_ranges(&request.series);

    let mut chart = ChartBuilder::on(root)
        .caption(&request.title, ("sans-serif", 40).into_font())
        .margin(5)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)
        .map_err(RenderError::backend)?;

    chart
        .configure_mesh()
        .x_desc(request.x_label.as_str())
        .y_desc(request.y_label.as_str())
        .draw()
        .map_err(RenderError::backend)?;

    chart
        .draw_series(LineSeries::new(request.series.points(), &RED))
        .map_err(RenderError::backend)?;

    root.present().map_err(RenderError::backend)?;
    Ok(())
}

// The y range is padded so a flat series still draws away from the frame,
// and the x range never collapses for a single-point series.
fn axis_ranges(series: &NumericSeries) -> (Range<i64>, Range<i64>) {
    let x_max = (series.len() as i64 - 1).max(1);
    let (y_min, y_max) = series.bounds().unwrap_or((0, 0));
    let span = y_max as f64 - y_min as f64;
    let pad = ((span * 0.05).ceil() as i64).max(1);
    (
        0..x_max,
        y_min.saturating_sub(pad)..y_max.saturating_add(pad),
    )
}
