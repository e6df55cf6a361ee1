use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// Dense, row-major matrix of `f64` values. Unlike a fixed-shape array it can be re-dimensioned
/// after creation, which is how the table readers grow it one accepted line at a time.
///
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    ///
    /// Create a zero-filled matrix of the given shape.
    ///
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    ///
    /// Build a matrix from row vectors. Every row must have the length of the first one.
    ///
    /// Returns `None` when the rows are ragged.
    ///
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Option<Self> {
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * n_cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n_cols {
                return None;
            }
            data.extend_from_slice(row);
        }
        Some(Matrix {
            rows: rows.len(),
            cols: n_cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    ///
    /// Resize to exactly `rows` x `cols`. Cells that stay in range keep their value, new cells are
    /// zero.
    ///
    pub fn dimension(&mut self, rows: usize, cols: usize) {
        if rows == self.rows && cols == self.cols {
            return;
        }

        let mut data = vec![0.0; rows * cols];
        let keep_rows = rows.min(self.rows);
        let keep_cols = cols.min(self.cols);
        for r in 0..keep_rows {
            let src = r * self.cols;
            let dst = r * cols;
            data[dst..dst + keep_cols].copy_from_slice(&self.data[src..src + keep_cols]);
        }

        self.rows = rows;
        self.cols = cols;
        self.data = data;
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Option<()> {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col] = value;
            Some(())
        } else {
            None
        }
    }

    ///
    /// View a single row as a slice.
    ///
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on a zero chunk size; data is empty in that case anyway
        self.data.chunks_exact(self.cols.max(1))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix({}x{})", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn small() -> Matrix {
        Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap()
    }

    #[rstest]
    fn test_new_is_zero_filled() {
        let m = Matrix::new(2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert!(m.iter_rows().all(|r| r.iter().all(|v| *v == 0.0)));
    }

    #[rstest]
    fn test_from_rows_rejects_ragged() {
        let rows: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(Matrix::from_rows(&rows).is_none());
    }

    #[rstest]
    fn test_dimension_grows_and_preserves(small: Matrix) {
        let mut m = small;
        m.dimension(3, 3);

        assert_eq!(m.row(0), &[1.0, 2.0, 0.0]);
        assert_eq!(m.row(1), &[3.0, 4.0, 0.0]);
        assert_eq!(m.row(2), &[0.0, 0.0, 0.0]);
    }

    #[rstest]
    fn test_dimension_shrinks(small: Matrix) {
        let mut m = small;
        m.dimension(1, 1);

        assert_eq!(m.rows(), 1);
        assert_eq!(m.cols(), 1);
        assert_eq!(m[(0, 0)], 1.0);
    }

    #[rstest]
    fn test_get_and_set(small: Matrix) {
        let mut m = small;
        assert_eq!(m.get(1, 0), Some(3.0));
        assert_eq!(m.get(2, 0), None);

        m.set(1, 1, -9.0).unwrap();
        assert_eq!(m[(1, 1)], -9.0);
        assert!(m.set(0, 5, 1.0).is_none());
    }

    #[rstest]
    #[should_panic]
    fn test_index_out_of_bounds(small: Matrix) {
        let _ = small[(2, 0)];
    }

    #[rstest]
    fn test_empty_matrix() {
        let m = Matrix::new(3, 0);
        assert!(m.is_empty());
        assert_eq!(m.iter_rows().count(), 0);
    }
}
