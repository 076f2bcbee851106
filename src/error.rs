use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors that can occur while generating, storing or plotting datasets
#[derive(Debug, Error)]
pub enum Error {
    /// Opening, creating or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be written or parsed as two numbers
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The drawing backend rejected an operation
    #[error("Plotting error: {0}")]
    Plot(String),

    #[error("Invalid range: [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    /// Least-squares fit has no unique solution (empty data, equal x values)
    #[error("Cannot fit a line: {0}")]
    DegenerateFit(&'static str),

    #[error("Unknown color: {0}")]
    UnknownColor(String),

    /// Only SVG output can render text without a font backend
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Error::Plot(err.to_string())
    }
}

/// Type alias for Results using the crate Error
pub type Result<T> = std::result::Result<T, Error>;
