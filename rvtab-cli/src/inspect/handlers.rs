use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use crate::table::{LoadArgs, LoadedTable, load_table};

pub fn run_inspect(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to an input table is required.");

    let args = LoadArgs::from_matches(matches);
    let table = load_table(Path::new(input), &args)?;

    print!("{}", render_report(input, &table));
    Ok(())
}

fn preview(labels: impl Iterator<Item = String>, n: usize) -> String {
    let labels: Vec<String> = labels.collect();
    let mut shown = labels.iter().take(n).cloned().collect::<Vec<_>>().join(", ");
    if labels.len() > n {
        shown.push_str(&format!(", ... ({} more)", labels.len() - n));
    }
    shown
}

fn render_report(input: &str, table: &LoadedTable) -> String {
    let summary = &table.summary;
    let mut out = String::new();

    out.push_str(&format!("file:\t{}\n", input));
    out.push_str(&format!(
        "shape:\t{} rows x {} columns\n",
        table.matrix.rows(),
        table.matrix.cols()
    ));
    if let Some(corner) = &table.corner {
        out.push_str(&format!("corner:\t{}\n", corner));
    }
    out.push_str(&format!(
        "columns:\t{}\n",
        preview(table.col_labels.iter().map(|(l, _)| l.to_string()), 5)
    ));
    out.push_str(&format!(
        "rows:\t{}\n",
        preview(table.row_labels.iter().map(|(l, _)| l.to_string()), 5)
    ));
    out.push_str(&format!("invalid values:\t{}\n", summary.invalid_conversions));
    out.push_str(&format!(
        "skipped lines:\t{}\n",
        preview(summary.skipped_lines.iter().map(|n| n.to_string()), 10)
    ));
    out.push_str(&format!(
        "duplicate rows:\t{}\n",
        preview(summary.duplicate_labels.iter().cloned(), 10)
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use rvtab_core::{LabelMap, Matrix};
    use rvtab_io::ReadSummary;

    #[test]
    fn test_preview_truncates() {
        let labels = (1..=7).map(|i| format!("M{}", i));
        assert_eq!(preview(labels, 3), "M1, M2, M3, ... (4 more)");
        assert_eq!(preview(std::iter::empty(), 3), "");
    }

    #[test]
    fn test_render_report() {
        let table = LoadedTable {
            matrix: Matrix::new(2, 1),
            row_labels: ["P1", "P3"].into_iter().collect(),
            col_labels: LabelMap::from_iter(["BMI"]),
            corner: Some("PeopleID".to_string()),
            summary: ReadSummary {
                rows: 2,
                cols: 1,
                invalid_conversions: 1,
                skipped_lines: vec![3],
                duplicate_labels: vec![],
            },
        };

        let report = render_report("x.pheno", &table);
        assert!(report.contains("shape:\t2 rows x 1 columns\n"));
        assert!(report.contains("corner:\tPeopleID\n"));
        assert!(report.contains("rows:\tP1, P3\n"));
        assert!(report.contains("skipped lines:\t3\n"));
        assert!(report.contains("duplicate rows:\t\n"));
    }
}
