use std::ops::Range;
use std::path::Path;

use log::info;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::color::PlotColor;
use crate::dataset::{x_bounds, y_bounds, MinMax, Point};
use crate::error::Result;
use crate::error::Error;
use crate::fit::{self, FittedLine, LinearFit, MeanDivisor};
use crate::storage::read_data_csv;

/// Marker radius in pixels.
pub const MARKER_SIZE: u32 = 3;

pub const DEFAULT_PLOT_SIZE: (u32, u32) = (800, 600);

/// Caption used by the least-squares plot when no title is set.
pub const LEAST_SQUARES_TITLE: &str = "Least squares method";

/// Margin around the data on the least-squares plot, in data units.
const FIT_MARGIN: f64 = 1.;

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotLabels {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
}

impl Default for PlotLabels {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_axis: "x".to_owned(),
            y_axis: "y".to_owned(),
        }
    }
}

/// Something that can draw itself on any plotters backend.
pub trait Plot {
    fn draw<DB: DrawingBackend>(&self, drawing_area: &DrawingArea<DB, Shift>) -> Result<()>;
}

/// Renders `plot` into an `.svg` file. Other extensions are rejected before
/// the file is created.
pub fn render_to_file(plot: &impl Plot, path: impl AsRef<Path>, size: (u32, u32)) -> Result<()> {
    let path = path.as_ref();

    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if !is_svg {
        return Err(Error::UnsupportedFormat(path.display().to_string()));
    }

    let drawing_area = SVGBackend::new(path, size).into_drawing_area();
    plot.draw(&drawing_area)?;
    drawing_area.present()?;

    info!("plot written to {}", path.display());

    Ok(())
}

/// Default axis range for scatter plots: data bounds plus 5% on each side.
fn scatter_range(bounds: Option<MinMax<f64>>) -> Range<f64> {
    match bounds {
        Some(b) => b.padded((b.max - b.min) * 0.05),
        None => 0f64..1f64,
    }
}

fn build_chart<'a, DB>(
    caption: &str,
    labels: &PlotLabels,
    x_range: Range<f64>,
    y_range: Range<f64>,
    drawing_area: &'a DrawingArea<DB, Shift>,
) -> Result<Chart<'a, DB>>
where
    DB: DrawingBackend,
{
    drawing_area.fill(&WHITE)?;

    let mut chart_builder = ChartBuilder::on(drawing_area);
    chart_builder.set_all_label_area_size(50).margin(20);

    if !caption.is_empty() {
        chart_builder.caption(caption, ("sans-serif", 20));
    }

    let mut chart_context = chart_builder.build_cartesian_2d(x_range, y_range)?;

    chart_context
        .configure_mesh()
        .x_labels(10)
        .x_desc(labels.x_axis.as_str())
        .y_labels(10)
        .y_desc(labels.y_axis.as_str())
        .draw()?;

    Ok(chart_context)
}

fn draw_markers<DB: DrawingBackend>(
    chart_context: &mut Chart<'_, DB>,
    data: &[Point],
    dot_color: PlotColor,
) -> Result<()> {
    let style = dot_color.rgb().filled();

    chart_context.draw_series(
        data.iter()
            .map(|p| Circle::new((p.x, p.y), MARKER_SIZE, style)),
    )?;

    Ok(())
}

fn draw_line<DB: DrawingBackend>(
    chart_context: &mut Chart<'_, DB>,
    line: impl IntoIterator<Item = Point>,
    line_color: PlotColor,
) -> Result<()> {
    chart_context.draw_series(LineSeries::new(
        line.into_iter().map(<(f64, f64)>::from),
        line_color.rgb().stroke_width(2),
    ))?;

    Ok(())
}

pub fn plot_scatter<DB: DrawingBackend>(
    data: &[Point],
    labels: &PlotLabels,
    dot_color: PlotColor,
    drawing_area: &DrawingArea<DB, Shift>,
) -> Result<()> {
    let mut chart_context = build_chart(
        &labels.title,
        labels,
        scatter_range(x_bounds(data)),
        scatter_range(y_bounds(data)),
        drawing_area,
    )?;

    draw_markers(&mut chart_context, data, dot_color)
}

/// Like [`plot_scatter`], with a line through the points in their given order.
pub fn plot_scatter_with_line<DB: DrawingBackend>(
    data: &[Point],
    labels: &PlotLabels,
    dot_color: PlotColor,
    line_color: PlotColor,
    drawing_area: &DrawingArea<DB, Shift>,
) -> Result<()> {
    let mut chart_context = build_chart(
        &labels.title,
        labels,
        scatter_range(x_bounds(data)),
        scatter_range(y_bounds(data)),
        drawing_area,
    )?;

    draw_line(&mut chart_context, data.iter().copied(), line_color)?;
    draw_markers(&mut chart_context, data, dot_color)
}

pub fn fit_caption(title: &str, fit: &LinearFit) -> String {
    let title = if title.is_empty() {
        LEAST_SQUARES_TITLE
    } else {
        title
    };

    format!("{title}: k = {:.3}, b = {:.3}", fit.slope, fit.intercept)
}

/// Axes of the least-squares plot: x zoomed to the points, y covering the
/// points and the whole fitted line, both with a one unit margin.
pub fn fit_ranges(data: &[Point], line: &FittedLine) -> (Range<f64>, Range<f64>) {
    let x_range = x_bounds(data).map_or_else(|| scatter_range(None), |b| b.padded(FIT_MARGIN));

    let y = y_bounds(data).map_or(line.y_bounds(), |b| b.union(line.y_bounds()));

    (x_range, y.padded(FIT_MARGIN))
}

/// Draws the fitted line, the points on top, and zooms per [`fit_ranges`].
/// The line is cut at the edges of the x axis.
pub fn plot_least_squares<DB: DrawingBackend>(
    data: &[Point],
    line: &FittedLine,
    labels: &PlotLabels,
    dot_color: PlotColor,
    line_color: PlotColor,
    drawing_area: &DrawingArea<DB, Shift>,
) -> Result<()> {
    let (x_range, y_range) = fit_ranges(data, line);

    let mut chart_context = build_chart(
        &fit_caption(&labels.title, &line.fit),
        labels,
        x_range.clone(),
        y_range,
        drawing_area,
    )?;

    if let Some(segment) = line.clipped(&x_range) {
        draw_line(&mut chart_context, segment, line_color)?;
    }

    draw_markers(&mut chart_context, data, dot_color)
}

#[derive(Debug, Clone)]
pub struct ScatterPlot<'a> {
    pub data: &'a [Point],
    pub labels: &'a PlotLabels,
    pub dot_color: PlotColor,
    /// Connects the points in order when set.
    pub line_color: Option<PlotColor>,
}

impl Plot for ScatterPlot<'_> {
    fn draw<DB: DrawingBackend>(&self, drawing_area: &DrawingArea<DB, Shift>) -> Result<()> {
        match self.line_color {
            Some(line_color) => plot_scatter_with_line(
                self.data,
                self.labels,
                self.dot_color,
                line_color,
                drawing_area,
            ),
            None => plot_scatter(self.data, self.labels, self.dot_color, drawing_area),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeastSquaresPlot<'a> {
    pub data: &'a [Point],
    pub line: FittedLine,
    pub labels: &'a PlotLabels,
    pub dot_color: PlotColor,
    pub line_color: PlotColor,
}

impl<'a> LeastSquaresPlot<'a> {
    /// Fits `data` up front so degenerate input fails before any file is created.
    pub fn new(
        data: &'a [Point],
        divisor: MeanDivisor,
        labels: &'a PlotLabels,
        dot_color: PlotColor,
        line_color: PlotColor,
    ) -> Result<Self> {
        let fit = fit::least_squares(data, divisor)?;

        Ok(Self {
            data,
            line: FittedLine::new(fit, data)?,
            labels,
            dot_color,
            line_color,
        })
    }
}

impl Plot for LeastSquaresPlot<'_> {
    fn draw<DB: DrawingBackend>(&self, drawing_area: &DrawingArea<DB, Shift>) -> Result<()> {
        plot_least_squares(
            self.data,
            &self.line,
            self.labels,
            self.dot_color,
            self.line_color,
            drawing_area,
        )
    }
}

/// Loads `csv_path` and renders its points as a scatter plot into `output`.
pub fn plot_csv_data(
    csv_path: impl AsRef<Path>,
    labels: &PlotLabels,
    dot_color: PlotColor,
    output: impl AsRef<Path>,
) -> Result<()> {
    let data = read_data_csv(csv_path)?;

    let plot = ScatterPlot {
        data: &data,
        labels,
        dot_color,
        line_color: None,
    };

    render_to_file(&plot, output, DEFAULT_PLOT_SIZE)
}

pub fn plot_csv_data_with_line(
    csv_path: impl AsRef<Path>,
    labels: &PlotLabels,
    dot_color: PlotColor,
    line_color: PlotColor,
    output: impl AsRef<Path>,
) -> Result<()> {
    let data = read_data_csv(csv_path)?;

    let plot = ScatterPlot {
        data: &data,
        labels,
        dot_color,
        line_color: Some(line_color),
    };

    render_to_file(&plot, output, DEFAULT_PLOT_SIZE)
}

/// Loads `csv_path`, fits a line and renders both. Returns the fit.
pub fn plot_csv_data_least_squares(
    csv_path: impl AsRef<Path>,
    divisor: MeanDivisor,
    labels: &PlotLabels,
    dot_color: PlotColor,
    line_color: PlotColor,
    output: impl AsRef<Path>,
) -> Result<LinearFit> {
    let data = read_data_csv(csv_path)?;

    let plot = LeastSquaresPlot::new(&data, divisor, labels, dot_color, line_color)?;

    render_to_file(&plot, output, DEFAULT_PLOT_SIZE)?;

    Ok(plot.line.fit)
}
