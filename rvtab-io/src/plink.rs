use std::io::BufRead;
use std::path::Path;

use rvtab_core::{LabelMap, Matrix};

use crate::consts::PLINK_LEADING_COLUMNS;
use crate::error::{Result, TableError};
use crate::reader::{
    ReadOptions, ReadSummary, assign_column_labels, check_output_matrix, fill_row,
};
use crate::tokenizer::LineTokenizer;
use crate::utils::get_dynamic_reader;

///
/// Read a plink style table (`FID IID value...`) from `path` (gzip'd or not).
///
/// The first line is always the header. Its fields after FID and IID are the column labels, the
/// IID of every data line is its row label. A repeated IID is reported; under the default
/// duplicate policy it then takes over the label, under the strict one the line is skipped.
///
/// `matrix` must already have at least one row and column; it is resized as lines are read.
///
pub fn read_plink_table<T: AsRef<Path>>(
    path: T,
    matrix: &mut Matrix,
    row_labels: &mut LabelMap,
    col_labels: &mut LabelMap,
    options: &ReadOptions,
) -> Result<ReadSummary> {
    check_output_matrix(matrix)?;
    let reader = get_dynamic_reader(path.as_ref())?;
    read_plink_table_from(reader, matrix, row_labels, col_labels, options)
}

///
/// Same as [read_plink_table], from any buffered reader.
///
pub fn read_plink_table_from<R: BufRead>(
    reader: R,
    matrix: &mut Matrix,
    row_labels: &mut LabelMap,
    col_labels: &mut LabelMap,
    options: &ReadOptions,
) -> Result<ReadSummary> {
    check_output_matrix(matrix)?;

    let mut summary = ReadSummary::default();
    let mut lines = LineTokenizer::with_separators(reader, &options.separators);

    let header = match lines.next() {
        Some(line) => line?,
        None => return Ok(summary),
    };
    if header.len() < PLINK_LEADING_COLUMNS {
        return Err(TableError::PlinkHeaderTooShort(header.len()));
    }

    let width = header.len();
    assign_column_labels(col_labels, &header.tokens[PLINK_LEADING_COLUMNS..]);
    summary.cols = width - PLINK_LEADING_COLUMNS;

    for line in lines {
        let line = line?;

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

        let iid = &line.tokens[1];
        let row = summary.rows;

        match row_labels.assign(iid, row) {
            Ok(None) => {}
            Ok(Some(_)) => {
                log::warn!("Duplicate sample: {} (line {})", iid, line.number);
                summary.duplicate_labels.push(iid.clone());
            }
            Err(e) => {
                log::warn!("{} at line {}, skipping...", e, line.number);
                summary.duplicate_labels.push(iid.clone());
                continue;
            }
        }

        matrix.dimension(row + 1, summary.cols);
        summary.invalid_conversions += fill_row(
            matrix,
            row,
            &line.tokens[PLINK_LEADING_COLUMNS..],
            options.default_value,
        );
        summary.rows += 1;
    }

    Ok(summary)
}
