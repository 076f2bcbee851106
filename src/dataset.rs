use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A single (x, y) sample. Serialized as one two-field CSV row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

/// Sorts the points ascending by x in place and hands the same slice back.
///
/// The sort is stable, so points sharing an x keep their relative order.
pub fn sort_data_by_x(data: &mut [Point]) -> &mut [Point] {
    data.sort_by(|a, b| a.x.total_cmp(&b.x));
    data
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax<T> {
    pub min: T,
    pub max: T,
}

pub fn find_max_min<T: PartialOrd + Copy>(
    mut data: impl Iterator<Item = T>,
) -> Option<MinMax<T>> {
    let init = data.next()?;

    let min_max = data.fold(MinMax { min: init, max: init }, |acc, x| MinMax {
        min: if x < acc.min { x } else { acc.min },
        max: if x > acc.max { x } else { acc.max },
    });

    Some(min_max)
}

pub fn x_bounds(data: &[Point]) -> Option<MinMax<f64>> {
    find_max_min(data.iter().map(|p| p.x))
}

pub fn y_bounds(data: &[Point]) -> Option<MinMax<f64>> {
    find_max_min(data.iter().map(|p| p.y))
}

impl MinMax<f64> {
    pub fn union(self, other: MinMax<f64>) -> MinMax<f64> {
        MinMax {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Axis range widened by `margin` on both sides. A zero-width result is
    /// widened by one unit so plotters always gets a non-empty range.
    pub fn padded(self, margin: f64) -> Range<f64> {
        let (min, max) = (self.min - margin, self.max + margin);
        if max > min {
            min..max
        } else {
            min - 1.0..max + 1.0
        }
    }
}
