pub mod color;
pub mod dataset;
pub mod error;
pub mod fit;
pub mod generator;
pub mod plots;
pub mod storage;

pub use color::PlotColor;
pub use dataset::{sort_data_by_x, Point};
pub use error::{Error, Result};
pub use fit::{least_squares, LinearFit, MeanDivisor};
pub use generator::{generate_data, generate_rising_data, DataRange};
pub use plots::PlotLabels;
pub use storage::{read_data_csv, write_data_csv, DEFAULT_DATA_PATH};
