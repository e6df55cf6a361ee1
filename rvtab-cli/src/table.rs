use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use rvtab_core::{DuplicatePolicy, LabelMap, Matrix};
use rvtab_io::{DEFAULT_MISSING_VALUE, ReadOptions, ReadSummary, read_plink_table, read_table};

///
/// A table read from disk, with what the reader reported about it.
///
pub struct LoadedTable {
    pub matrix: Matrix,
    pub row_labels: LabelMap,
    pub col_labels: LabelMap,
    /// Corner label found in the header, if the reader found one.
    pub corner: Option<String>,
    pub summary: ReadSummary,
}

///
/// Read settings shared by the subcommands that load a table.
///
pub struct LoadArgs {
    pub plink: bool,
    pub policy: DuplicatePolicy,
    pub options: ReadOptions,
}

impl LoadArgs {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let default_value = matches
            .get_one::<f64>("default")
            .copied()
            .unwrap_or(DEFAULT_MISSING_VALUE);
        let policy = match matches.get_flag("strict") {
            true => DuplicatePolicy::Strict,
            false => DuplicatePolicy::LastWriterWins,
        };
        LoadArgs {
            plink: matches.get_flag("plink"),
            policy,
            options: ReadOptions::default().with_default_value(default_value),
        }
    }
}

pub fn load_table(path: &Path, args: &LoadArgs) -> Result<LoadedTable> {
    // readers grow the matrix from here
    let mut matrix = Matrix::new(1, 1);
    let mut row_labels = LabelMap::with_policy(args.policy);
    let mut col_labels = LabelMap::new();
    let mut corner = String::new();

    let summary = match args.plink {
        true => read_plink_table(
            path,
            &mut matrix,
            &mut row_labels,
            &mut col_labels,
            &args.options,
        ),
        false => read_table(
            path,
            &mut matrix,
            &mut row_labels,
            &mut col_labels,
            &mut corner,
            &args.options,
        ),
    }
    .with_context(|| format!("Failed to read table {}", path.display()))?;

    if summary.rows == 0 {
        anyhow::bail!("No data lines could be read from {}", path.display());
    }

    Ok(LoadedTable {
        matrix,
        row_labels,
        col_labels,
        corner: Some(corner).filter(|c| !c.is_empty()),
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(plink: bool) -> LoadArgs {
        LoadArgs {
            plink,
            policy: DuplicatePolicy::LastWriterWins,
            options: ReadOptions::default(),
        }
    }

    #[test]
    fn test_load_generic_and_plink() {
        let tempdir = tempfile::tempdir().unwrap();

        let generic = tempdir.path().join("t.pheno");
        std::fs::write(&generic, "PeopleID\t\"BMI\"\nP1\t22\n").unwrap();
        let loaded = load_table(&generic, &args(false)).unwrap();
        assert_eq!(loaded.corner.as_deref(), Some("PeopleID"));
        assert_eq!(loaded.matrix.rows(), 1);

        let plink = tempdir.path().join("p.pheno");
        std::fs::write(&plink, "FID IID BMI\nF1 P1 22\nF2 P2 x\n").unwrap();
        let loaded = load_table(&plink, &args(true)).unwrap();
        assert_eq!(loaded.corner, None);
        assert_eq!(loaded.summary.invalid_conversions, 1);
        assert_eq!(loaded.row_labels.label_at(1), Some("P2"));
    }

    #[test]
    fn test_load_header_only_fails() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("empty.cov");
        std::fs::write(&path, "PeopleID AGE\n").unwrap();
        assert!(load_table(&path, &args(false)).is_err());
    }
}
