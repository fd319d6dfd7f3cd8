use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A date or page index outside the built grid. Recoverable.
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// The grid cannot be built as configured. Fatal at construction.
    #[error("Misconfigured grid: {0}")]
    MisconfiguredGrid(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
