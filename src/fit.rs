use log::debug;

use std::ops::Range;

use crate::dataset::{x_bounds, MinMax, Point};
use crate::error::{Error, Result};

/// Points the fitted line is extended by past the last fitted index.
pub const EXTRAPOLATED_POINTS: usize = 10;

/// What the sums of x, y, x² and xy are divided by to form the means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MeanDivisor {
    /// Number of points, giving the ordinary least-squares line
    #[default]
    SampleCount,
    /// `floor(max x)`, matching fits plotted by earlier releases. Differs
    /// from `SampleCount` whenever the point count is not `floor(max x)`.
    MaxX,
}

/// Line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Number of integer positions the fit covers before extrapolation:
/// `floor(max x)`, zero for empty data or a negative maximum.
pub fn line_point_count(data: &[Point]) -> Result<usize> {
    let Some(bounds) = x_bounds(data) else {
        return Ok(0);
    };

    let n = bounds.max.floor().max(0.);

    // usize::MAX rounds up to 2^64 as f64, so anything below it converts exactly
    if n < usize::MAX as f64 {
        Ok(n as usize)
    } else {
        Err(Error::DegenerateFit("max x is out of range"))
    }
}

pub fn least_squares(data: &[Point], divisor: MeanDivisor) -> Result<LinearFit> {
    let max_x = x_bounds(data)
        .ok_or(Error::DegenerateFit("dataset is empty"))?
        .max;

    if data.iter().all(|p| p.x == data[0].x) {
        return Err(Error::DegenerateFit("x values do not vary"));
    }

    let n = match divisor {
        MeanDivisor::SampleCount => data.len() as f64,
        MeanDivisor::MaxX => max_x.floor(),
    };

    if n == 0. || !n.is_finite() {
        return Err(Error::DegenerateFit("mean divisor is zero"));
    }

    let (sum_x, sum_y, sum_xx, sum_xy) = data.iter().fold(
        (0f64, 0f64, 0f64, 0f64),
        |(sx, sy, sxx, sxy), p| (sx + p.x, sy + p.y, sxx + p.x * p.x, sxy + p.x * p.y),
    );

    let (mean_x, mean_y) = (sum_x / n, sum_y / n);
    let (mean_xx, mean_xy) = (sum_xx / n, sum_xy / n);

    let denominator = mean_xx - mean_x * mean_x;

    if denominator == 0. || !denominator.is_finite() {
        return Err(Error::DegenerateFit("zero variance in x"));
    }

    let slope = (mean_xy - mean_x * mean_y) / denominator;
    let intercept = mean_y - slope * mean_x;

    debug!("least squares over {} points: k = {slope}, b = {intercept}", data.len());

    Ok(LinearFit { slope, intercept })
}

/// The fit drawn over x = 0 ..= N - 1 and [`EXTRAPOLATED_POINTS`] positions
/// past it, where N is [`line_point_count`]. Kept as a segment since the
/// points in between lie on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedLine {
    pub fit: LinearFit,
    pub span: MinMax<f64>,
}

impl FittedLine {
    pub fn new(fit: LinearFit, data: &[Point]) -> Result<Self> {
        let last = line_point_count(data)?
            .checked_add(EXTRAPOLATED_POINTS - 1)
            .ok_or(Error::DegenerateFit("max x is out of range"))?;

        Ok(Self {
            fit,
            span: MinMax {
                min: 0.,
                max: last as f64,
            },
        })
    }

    /// y extent of the whole line, reached at its ends.
    pub fn y_bounds(&self) -> MinMax<f64> {
        let (a, b) = (self.fit.predict(self.span.min), self.fit.predict(self.span.max));

        MinMax {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// End points of the part of the line inside the `x` window, if any.
    pub fn clipped(&self, x: &Range<f64>) -> Option<[Point; 2]> {
        let start = self.span.min.max(x.start);
        let end = self.span.max.min(x.end);

        (start <= end).then(|| {
            [
                Point::new(start, self.fit.predict(start)),
                Point::new(end, self.fit.predict(end)),
            ]
        })
    }
}
