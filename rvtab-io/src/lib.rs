//! # Input/Output for labeled numeric tables.
//!
//! Reads and writes genotype, collapsed genotype, covariate and phenotype tables in a
//! tab-delimited layout that R's `read.table` understands:
//!
//! ```text
//! PeopleID	"Cov1"	"Cov2"
//! P1	1	0
//! P2	0	2
//! ```
//!
//! Two readers are provided. [read_table] guesses whether the header names the row-label column,
//! [read_plink_table] reads plink style tables whose first two columns are FID and IID. Both
//! tolerate malformed lines: they are skipped with a warning and reported in the [ReadSummary].
//!
pub mod consts;
pub mod error;
pub mod export;
pub mod plink;
pub mod reader;
pub mod tokenizer;
pub mod utils;
pub mod writer;

// re-expose core functions
pub use consts::*;
pub use error::*;
pub use export::*;
pub use plink::*;
pub use reader::*;
pub use tokenizer::*;
pub use utils::*;
pub use writer::*;
