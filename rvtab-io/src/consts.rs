/// Field separators used when tokenizing table lines.
pub const DEFAULT_SEPARATORS: &str = " \t";

/// Value stored for tokens that fail to parse as a number.
pub const DEFAULT_MISSING_VALUE: f64 = -9.0;

/// Written in the header when a table has no column labels.
pub const PLACEHOLDER_LABEL: &str = ".";

pub const DEFAULT_RAW_PREFIX: &str = "rvtest.raw";

pub const GENO_FILE_EXT: &str = "geno";
pub const CGENO_FILE_EXT: &str = "cgeno";
pub const COV_FILE_EXT: &str = "cov";
pub const PHENO_FILE_EXT: &str = "pheno";

pub const MARKER_CORNER_NAME: &str = "MarkerName";
pub const PEOPLE_CORNER_NAME: &str = "PeopleID";

/// Leading non-value columns of a plink table (FID, IID).
pub const PLINK_LEADING_COLUMNS: usize = 2;
