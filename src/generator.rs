use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::dataset::Point;
use crate::error::{Error, Result};

/// Ratio between consecutive y values of rising data.
pub const GROWTH_FACTOR: f64 = 1.1;

/// Closed interval the uniform generator samples both coordinates from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRange {
    pub min: f64,
    pub max: f64,
}

impl Default for DataRange {
    fn default() -> Self {
        Self {
            min: 0.,
            max: 1000.,
        }
    }
}

impl DataRange {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        Self { min, max }.validated()
    }

    #[cfg(test)]
    fn contains(&self, v: f64) -> bool {
        (self.min..=self.max).contains(&v)
    }

    fn validated(self) -> Result<Self> {
        if self.min <= self.max && (self.max - self.min).is_finite() {
            Ok(self)
        } else {
            Err(Error::InvalidRange {
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Draws `n` points with x and y independently uniform over `range`.
pub fn generate_data<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: DataRange,
) -> Result<Vec<Point>> {
    let DataRange { min, max } = range.validated()?;
    let uniform = Uniform::new_inclusive(min, max);

    let data: Vec<Point> = (0..n)
        .map(|_| {
            let x = uniform.sample(&mut *rng);
            let y = uniform.sample(&mut *rng);
            Point::new(x, y)
        })
        .collect();

    debug!("generated {} uniform points in [{min}, {max}]", data.len());

    Ok(data)
}

/// [`generate_data`] over [`DataRange::default`] with the thread-local RNG.
pub fn generate_data_default(n: usize) -> Result<Vec<Point>> {
    generate_data(&mut rand::thread_rng(), n, DataRange::default())
}

/// Points with x = 0, 1, .. and y growing geometrically from 1 by [`GROWTH_FACTOR`].
pub fn generate_rising_data(n: usize) -> Vec<Point> {
    let data: Vec<Point> = std::iter::successors(Some(1f64), |y| Some(y * GROWTH_FACTOR))
        .take(n)
        .enumerate()
        .map(|(i, y)| Point::new(i as f64, y))
        .collect();

    debug!("generated {} rising points", data.len());

    data
}
