//! # Core models for labeled numeric tables.
//!
//! A labeled table is a dense matrix of `f64` values paired with two ordered label maps: one for
//! the rows (people or sample IDs) and one for the columns (markers, collapsed sets, covariates or
//! phenotypes). The io crate reads and writes these in an R-readable, tab-delimited layout.
//!
pub mod errors;
pub mod models;

// re-export for cleaner imports
pub use errors::{LabelError, ShapeError};
pub use models::{DuplicatePolicy, LabelMap, LabeledTable, Matrix};
