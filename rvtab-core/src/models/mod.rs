pub mod label_map;
pub mod labeled_table;
pub mod matrix;

// re-export for cleaner imports
pub use self::label_map::{DuplicatePolicy, LabelMap};
pub use self::labeled_table::LabeledTable;
pub use self::matrix::Matrix;
