use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LabelError {
    #[error("Duplicate label '{label}' (already mapped to index {existing})")]
    Duplicate { label: String, existing: usize },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Row labels ({labels}) do not match matrix rows ({rows})")]
    RowCountMismatch { labels: usize, rows: usize },

    #[error("Column labels ({labels}) do not match matrix columns ({cols})")]
    ColCountMismatch { labels: usize, cols: usize },
}
