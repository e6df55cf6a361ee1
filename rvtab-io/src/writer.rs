use std::io::Write;
use std::path::Path;

use rvtab_core::{LabelMap, LabeledTable, Matrix};

use crate::consts::PLACEHOLDER_LABEL;
use crate::error::Result;
use crate::utils::get_dynamic_writer;

///
/// Outcome of a path-level table write.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    /// The matrix had no rows or no columns; no file was created.
    SkippedEmpty,
}

pub trait TableWrite {
    ///
    /// Write the table to disk in R-readable format (`.gz` paths are compressed).
    ///
    /// An empty matrix is a no-op. Label counts that disagree with the matrix are reported and
    /// nothing is written; the file is never opened in either case.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_table<T: AsRef<Path>>(&self, path: T) -> Result<WriteStatus>;

    ///
    /// Write the table to any writer. Only the label counts are checked, so a table without
    /// columns still gets a header (with a single `"."` placeholder label).
    ///
    fn write_table_to<W: Write>(&self, writer: &mut W) -> Result<()>;
}

impl TableWrite for LabeledTable<'_> {
    fn write_table<T: AsRef<Path>>(&self, path: T) -> Result<WriteStatus> {
        let path = path.as_ref();

        if self.matrix.is_empty() {
            return Ok(WriteStatus::SkippedEmpty);
        }

        if let Err(e) = self.validate() {
            log::error!("{}: {}, table not written", path.display(), e);
            return Err(e.into());
        }

        let mut sink = get_dynamic_writer(path)?;
        self.write_table_to(&mut sink)?;
        sink.finish()?;

        Ok(WriteStatus::Written)
    }

    fn write_table_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.validate()?;

        write_header(writer, self.upper_left_name, self.col_labels)?;

        for (r, values) in self.matrix.iter_rows().enumerate() {
            // validate() guarantees one label per row
            let label = self.row_labels.label_at(r).unwrap_or_default();
            writer.write_all(label.as_bytes())?;
            for value in values {
                write!(writer, "\t{}", truncate(*value))?;
            }
            writer.write_all(b"\n")?;
        }

        // rows are still written for a matrix with no columns
        if self.matrix.cols() == 0 {
            for (label, _) in self.row_labels.iter() {
                writeln!(writer, "{}", label)?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}

///
/// Write `upper_left_name` followed by each column label in double quotes, tab separated.
/// An empty label map still produces one `"."` column.
///
pub fn write_header<W: Write>(
    writer: &mut W,
    upper_left_name: &str,
    col_labels: &LabelMap,
) -> std::io::Result<()> {
    writer.write_all(upper_left_name.as_bytes())?;
    if col_labels.is_empty() {
        write!(writer, "\t\"{}\"", PLACEHOLDER_LABEL)?;
    } else {
        for (label, _) in col_labels.iter() {
            write!(writer, "\t\"{}\"", label)?;
        }
    }
    writer.write_all(b"\n")
}

/// Values are written as integers; the fraction is dropped, not rounded.
fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}

///
/// Write a matrix and its labels to `path`. See [TableWrite::write_table].
///
pub fn write_table<T: AsRef<Path>>(
    path: T,
    matrix: &Matrix,
    row_labels: &LabelMap,
    col_labels: &LabelMap,
    upper_left_name: &str,
) -> Result<WriteStatus> {
    LabeledTable::new(matrix, row_labels, col_labels, upper_left_name).write_table(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use rvtab_core::ShapeError;

    use crate::error::TableError;

    #[fixture]
    fn matrix() -> Matrix {
        Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap()
    }

    #[fixture]
    fn people() -> LabelMap {
        ["S1", "S2"].into_iter().collect()
    }

    #[fixture]
    fn markers() -> LabelMap {
        ["M1", "M2"].into_iter().collect()
    }

    fn render(table: &LabeledTable) -> String {
        let mut out = Vec::new();
        table.write_table_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[rstest]
    fn test_write_table_format(matrix: Matrix, people: LabelMap, markers: LabelMap) {
        let table = LabeledTable::new(&matrix, &people, &markers, "MarkerName");
        assert_eq!(
            render(&table),
            "MarkerName\t\"M1\"\t\"M2\"\nS1\t1\t2\nS2\t3\t4\n"
        );
    }

    #[rstest]
    fn test_values_are_truncated_not_rounded(people: LabelMap, markers: LabelMap) {
        let matrix = Matrix::from_rows(&[[1.9, -1.9], [2.5, 0.49]]).unwrap();
        let table = LabeledTable::new(&matrix, &people, &markers, "PeopleID");
        assert_eq!(
            render(&table),
            "PeopleID\t\"M1\"\t\"M2\"\nS1\t1\t-1\nS2\t2\t0\n"
        );
    }

    #[rstest]
    fn test_no_column_labels_writes_placeholder(people: LabelMap) {
        let matrix = Matrix::new(2, 0);
        let cols = LabelMap::new();
        let table = LabeledTable::new(&matrix, &people, &cols, "PeopleID");

        let out = render(&table);
        let header = out.lines().next().unwrap();
        assert_eq!(header, "PeopleID\t\".\"");
        assert_eq!(out, "PeopleID\t\".\"\nS1\nS2\n");
    }

    #[rstest]
    fn test_write_to_file(matrix: Matrix, people: LabelMap, markers: LabelMap) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("out.geno");

        let status = write_table(&path, &matrix, &people, &markers, "MarkerName").unwrap();

        assert_eq!(status, WriteStatus::Written);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "MarkerName\t\"M1\"\t\"M2\"\nS1\t1\t2\nS2\t3\t4\n"
        );
    }

    #[rstest]
    fn test_write_overwrites_existing(matrix: Matrix, people: LabelMap, markers: LabelMap) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("out.cov");
        std::fs::write(&path, "stale content that is much longer than the table\n").unwrap();

        write_table(&path, &matrix, &people, &markers, "PeopleID").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("PeopleID\t"));
        assert!(!content.contains("stale"));
    }

    #[rstest]
    #[case(Matrix::new(0, 2))]
    #[case(Matrix::new(2, 0))]
    fn test_empty_matrix_is_noop(#[case] matrix: Matrix, people: LabelMap, markers: LabelMap) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("empty.pheno");

        let status = write_table(&path, &matrix, &people, &markers, "PeopleID").unwrap();

        assert_eq!(status, WriteStatus::SkippedEmpty);
        assert!(!path.exists());
    }

    #[rstest]
    fn test_row_mismatch_writes_nothing(matrix: Matrix, markers: LabelMap) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("bad.geno");
        let people: LabelMap = ["S1"].into_iter().collect();

        let err = write_table(&path, &matrix, &people, &markers, "MarkerName").unwrap_err();

        assert!(matches!(
            err,
            TableError::Shape(ShapeError::RowCountMismatch { labels: 1, rows: 2 })
        ));
        assert!(!path.exists());
    }

    #[rstest]
    fn test_col_mismatch_writes_nothing(matrix: Matrix, people: LabelMap) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("bad.geno");
        let markers: LabelMap = ["M1", "M2", "M3"].into_iter().collect();

        let err = write_table(&path, &matrix, &people, &markers, "MarkerName").unwrap_err();

        assert!(matches!(
            err,
            TableError::Shape(ShapeError::ColCountMismatch { labels: 3, cols: 2 })
        ));
        assert!(!path.exists());
    }
}
