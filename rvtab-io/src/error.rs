use std::io;
use thiserror::Error;

use rvtab_core::ShapeError;

/// Error type for rvtab-io operations.
#[derive(Error, Debug)]
pub enum TableError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Labels and matrix disagree on the number of rows or columns.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// The output matrix handed to a reader has zero rows or columns.
    #[error("Output matrix must be dimensioned before reading, got {rows}x{cols}")]
    UnsizedMatrix { rows: usize, cols: usize },

    /// A plink table header needs at least the FID and IID columns.
    #[error("Plink table header has {0} column(s), expected at least FID and IID")]
    PlinkHeaderTooShort(usize),
}

/// Result type alias for rvtab-io operations.
pub type Result<T> = std::result::Result<T, TableError>;
