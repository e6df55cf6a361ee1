use crate::errors::ShapeError;
use crate::models::{LabelMap, Matrix};

///
/// A matrix together with the labels of its rows and columns, and the name written in the
/// upper-left cell of the header. Borrows everything; nothing is copied to write a table.
///
#[derive(Clone, Copy, Debug)]
pub struct LabeledTable<'a> {
    pub matrix: &'a Matrix,
    pub row_labels: &'a LabelMap,
    pub col_labels: &'a LabelMap,
    pub upper_left_name: &'a str,
}

impl<'a> LabeledTable<'a> {
    pub fn new(
        matrix: &'a Matrix,
        row_labels: &'a LabelMap,
        col_labels: &'a LabelMap,
        upper_left_name: &'a str,
    ) -> Self {
        LabeledTable {
            matrix,
            row_labels,
            col_labels,
            upper_left_name,
        }
    }

    ///
    /// Check that there is exactly one row label per matrix row and one column label per
    /// matrix column. Rows are checked first.
    ///
    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.row_labels.len() != self.matrix.rows() {
            return Err(ShapeError::RowCountMismatch {
                labels: self.row_labels.len(),
                rows: self.matrix.rows(),
            });
        }
        if self.col_labels.len() != self.matrix.cols() {
            return Err(ShapeError::ColCountMismatch {
                labels: self.col_labels.len(),
                cols: self.matrix.cols(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(&["S1", "S2"], &["M1", "M2"], Ok(()))]
    #[case(&["S1"], &["M1", "M2"], Err(ShapeError::RowCountMismatch { labels: 1, rows: 2 }))]
    #[case(
        &["S1", "S2"],
        &["M1", "M2", "M3"],
        Err(ShapeError::ColCountMismatch { labels: 3, cols: 2 })
    )]
    fn test_validate(
        #[case] rows: &[&str],
        #[case] cols: &[&str],
        #[case] expected: Result<(), ShapeError>,
    ) {
        let matrix = Matrix::new(2, 2);
        let row_labels: LabelMap = rows.iter().collect();
        let col_labels: LabelMap = cols.iter().collect();

        let table = LabeledTable::new(&matrix, &row_labels, &col_labels, "PeopleID");
        assert_eq!(table.validate(), expected);
    }
}
