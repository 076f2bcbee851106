use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::{debug, info};

use crate::dataset::Point;
use crate::error::Result;

/// File name used when the caller does not pick one.
pub const DEFAULT_DATA_PATH: &str = "data.csv";

/// Writes one headerless `x,y` row per point.
pub fn write_data<W: Write>(data: &[Point], writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    for point in data {
        writer.serialize(point)?;
    }

    writer.flush()?;

    Ok(())
}

/// Reads every row as a point. Rows with fewer than two fields or non-numeric
/// fields are errors.
pub fn read_data<R: Read>(reader: R) -> Result<Vec<Point>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(reader);

    let data = reader
        .deserialize()
        .collect::<std::result::Result<Vec<Point>, _>>()?;

    Ok(data)
}

/// Creates (or truncates) `path` and stores the dataset in it.
pub fn write_data_csv(data: &[Point], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    write_data(data, File::create(path)?)?;

    info!("wrote {} points to {}", data.len(), path.display());

    Ok(())
}

/// [`write_data_csv`] into [`DEFAULT_DATA_PATH`].
pub fn write_data_default(data: &[Point]) -> Result<()> {
    write_data_csv(data, DEFAULT_DATA_PATH)
}

pub fn read_data_csv(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let path = path.as_ref();

    let data = read_data(File::open(path)?)?;

    debug!("read {} points from {}", data.len(), path.display());

    Ok(data)
}
