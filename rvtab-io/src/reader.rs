use std::io::BufRead;
use std::path::Path;

use rvtab_core::{LabelMap, Matrix};

use crate::consts::{DEFAULT_MISSING_VALUE, DEFAULT_SEPARATORS};
use crate::error::{Result, TableError};
use crate::tokenizer::LineTokenizer;
use crate::utils::get_dynamic_reader;

///
/// Settings shared by both table readers.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOptions {
    /// Stored in place of any value that is not a number.
    pub default_value: f64,
    /// Characters that separate fields.
    pub separators: String,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            default_value: DEFAULT_MISSING_VALUE,
            separators: DEFAULT_SEPARATORS.to_string(),
        }
    }
}

impl ReadOptions {
    pub fn with_default_value(mut self, default_value: f64) -> Self {
        self.default_value = default_value;
        self
    }

    pub fn with_separators(mut self, separators: &str) -> Self {
        self.separators = separators.to_string();
        self
    }
}

///
/// What a reader did with its input. Per-line problems never abort a read; they end up here.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadSummary {
    /// Data lines stored in the matrix.
    pub rows: usize,
    /// Value columns per data line.
    pub cols: usize,
    /// Values replaced by the default because they did not parse.
    pub invalid_conversions: usize,
    /// Line numbers of data lines dropped for having the wrong number of fields.
    pub skipped_lines: Vec<usize>,
    /// Row labels seen more than once.
    pub duplicate_labels: Vec<String>,
}

pub(crate) fn check_output_matrix(matrix: &Matrix) -> Result<()> {
    if matrix.is_empty() {
        return Err(TableError::UnsizedMatrix {
            rows: matrix.rows(),
            cols: matrix.cols(),
        });
    }
    Ok(())
}

/// Strip one pair of surrounding double quotes, as written by the table writer.
pub(crate) fn unquote(token: &str) -> &str {
    token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token)
}

/// Assign `labels[i]` to index `i`. A label the map refuses is reported and left out.
pub(crate) fn assign_column_labels(col_labels: &mut LabelMap, labels: &[String]) {
    for (i, label) in labels.iter().enumerate() {
        if let Err(e) = col_labels.assign(unquote(label), i) {
            log::warn!("Column label ignored: {}", e);
        }
    }
}

///
/// Parse `tokens` into `row` of `matrix`, starting at column 0. Returns the number of tokens
/// that were replaced with `default_value`.
///
pub(crate) fn fill_row(
    matrix: &mut Matrix,
    row: usize,
    tokens: &[String],
    default_value: f64,
) -> usize {
    let mut invalid = 0;
    for (col, token) in tokens.iter().enumerate() {
        matrix[(row, col)] = match token.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                invalid += 1;
                default_value
            }
        };
    }
    invalid
}

///
/// Read an R-style table from `path` (gzip'd or not).
///
/// The header may or may not name the row-label column. That is decided from the first data
/// line: if it has as many fields as the header, the first header field is taken as the corner
/// label and stored in `upper_left_name`, and the remaining fields become the column labels.
/// Otherwise every header field is a column label. Either way the first data line fixes the
/// number of fields for the rest of the file, and the first field of every data line is the row
/// label.
///
/// `matrix` must already have at least one row and column; it is resized as lines are read.
///
pub fn read_table<T: AsRef<Path>>(
    path: T,
    matrix: &mut Matrix,
    row_labels: &mut LabelMap,
    col_labels: &mut LabelMap,
    upper_left_name: &mut String,
    options: &ReadOptions,
) -> Result<ReadSummary> {
    check_output_matrix(matrix)?;
    let reader = get_dynamic_reader(path.as_ref())?;
    read_table_from(reader, matrix, row_labels, col_labels, upper_left_name, options)
}

///
/// Same as [read_table], from any buffered reader.
///
pub fn read_table_from<R: BufRead>(
    reader: R,
    matrix: &mut Matrix,
    row_labels: &mut LabelMap,
    col_labels: &mut LabelMap,
    upper_left_name: &mut String,
    options: &ReadOptions,
) -> Result<ReadSummary> {
    check_output_matrix(matrix)?;

    let mut summary = ReadSummary::default();
    let mut lines = LineTokenizer::with_separators(reader, &options.separators);

    let header = match lines.next() {
        Some(line) => line?,
        None => return Ok(summary),
    };

    // fields per data line, row label included
    let mut n_fields: Option<usize> = None;

    for line in lines {
        let line = line?;

        let width = match n_fields {
            Some(width) => width,
            None => {
                let width = line.len();
                if width == header.len() {
                    // first header field names the row-label column
                    upper_left_name.clone_from(&header.tokens[0]);
                    assign_column_labels(col_labels, &header.tokens[1..]);
                } else {
                    assign_column_labels(col_labels, &header.tokens);
                }
                summary.cols = width - 1;
                n_fields = Some(width);
                width
            }
        };

        if line.len() != width {
            log::warn!(
                "Inconsistent column number at line {} ({} instead of {}), skipping...",
                line.number,
                line.len(),
                width
            );
            summary.skipped_lines.push(line.number);
            continue;
        }

        let Some((label, values)) = line.tokens.split_first() else {
            continue;
        };
        let row = summary.rows;

        if let Err(e) = row_labels.assign(label, row) {
            log::warn!("{} at line {}, skipping...", e, line.number);
            summary.duplicate_labels.push(label.clone());
            continue;
        }

        matrix.dimension(row + 1, width - 1);
        summary.invalid_conversions += fill_row(matrix, row, values, options.default_value);
        summary.rows += 1;
    }

    Ok(summary)
}
