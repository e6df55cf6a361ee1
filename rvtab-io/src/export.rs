use std::path::PathBuf;

use rvtab_core::{LabelMap, LabeledTable, Matrix};

use crate::consts::*;
use crate::error::TableError;
use crate::writer::{TableWrite, WriteStatus};

///
/// Everything needed to dump the four raw tables of an analysis: the genotype matrix (people x
/// markers), the collapsed genotype matrix (people x marker sets), covariates and phenotypes.
///
#[derive(Debug, Clone, Copy)]
pub struct RawData<'a> {
    pub people: &'a LabelMap,
    pub markers: &'a LabelMap,
    pub sets: &'a LabelMap,
    pub covariates: &'a LabelMap,
    pub phenotypes: &'a LabelMap,

    pub genotype: &'a Matrix,
    pub collapsed_genotype: &'a Matrix,
    pub covariate: &'a Matrix,
    pub phenotype: &'a Matrix,
}

impl<'a> RawData<'a> {
    ///
    /// The tables in export order, each with the file extension it is written to.
    ///
    pub fn tables(&self) -> [(&'static str, LabeledTable<'a>); 4] {
        [
            (
                GENO_FILE_EXT,
                LabeledTable::new(self.genotype, self.people, self.markers, MARKER_CORNER_NAME),
            ),
            (
                CGENO_FILE_EXT,
                LabeledTable::new(
                    self.collapsed_genotype,
                    self.people,
                    self.sets,
                    PEOPLE_CORNER_NAME,
                ),
            ),
            (
                COV_FILE_EXT,
                LabeledTable::new(self.covariate, self.people, self.covariates, PEOPLE_CORNER_NAME),
            ),
            (
                PHENO_FILE_EXT,
                LabeledTable::new(self.phenotype, self.people, self.phenotypes, PEOPLE_CORNER_NAME),
            ),
        ]
    }
}

///
/// Result of writing one raw table.
///
#[derive(Debug)]
pub struct ExportEntry {
    pub path: PathBuf,
    pub outcome: Result<WriteStatus, TableError>,
}

#[derive(Debug, Default)]
pub struct ExportReport {
    pub entries: Vec<ExportEntry>,
}

impl ExportReport {
    pub fn written(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, Ok(WriteStatus::Written)))
            .map(|e| &e.path)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExportEntry> {
        self.entries.iter().filter(|e| e.outcome.is_err())
    }

    pub fn is_ok(&self) -> bool {
        self.failures().next().is_none()
    }
}

///
/// `prefix`, or the default raw prefix when it is empty.
///
pub fn raw_prefix(prefix: &str) -> &str {
    if prefix.is_empty() {
        DEFAULT_RAW_PREFIX
    } else {
        prefix
    }
}

///
/// Write `prefix.geno`, `prefix.cgeno`, `prefix.cov` and `prefix.pheno`.
///
/// A table that fails is reported and the rest are still written; the outcome of each file is in
/// the returned report.
///
/// # Arguments
/// - prefix: path prefix of the four files, `rvtest.raw` if empty
/// - data: the matrices and labels to write
pub fn write_raw_data(prefix: &str, data: &RawData) -> ExportReport {
    let prefix = raw_prefix(prefix);
    let mut report = ExportReport::default();

    for (ext, table) in data.tables() {
        let path = PathBuf::from(format!("{}.{}", prefix, ext));
        let outcome = table.write_table(&path);
        if let Err(e) = &outcome {
            log::error!("Failed to write {}: {}", path.display(), e);
        }
        report.entries.push(ExportEntry { path, outcome });
    }

    report
}
