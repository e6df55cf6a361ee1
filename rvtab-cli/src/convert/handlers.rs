use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use rvtab_io::{PEOPLE_CORNER_NAME, WriteStatus, write_table};

use crate::table::{LoadArgs, load_table};

pub fn run_convert(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to an input table is required.");

    let output = matches
        .get_one::<String>("output")
        .expect("A path to an output table is required.");

    let args = LoadArgs::from_matches(matches);
    let table = load_table(Path::new(input), &args)?;

    let corner = matches
        .get_one::<String>("corner")
        .cloned()
        .or_else(|| table.corner.clone())
        .unwrap_or_else(|| PEOPLE_CORNER_NAME.to_string());

    let status = write_table(
        output,
        &table.matrix,
        &table.row_labels,
        &table.col_labels,
        &corner,
    )
    .with_context(|| format!("Failed to write table {}", output))?;

    match status {
        WriteStatus::Written => log::info!(
            "Wrote {}x{} table to {}",
            table.matrix.rows(),
            table.matrix.cols(),
            output
        ),
        WriteStatus::SkippedEmpty => log::warn!("Table has no values, {} not written", output),
    }

    if table.summary.invalid_conversions > 0 {
        log::warn!(
            "{} value(s) were not numbers and were replaced with {}",
            table.summary.invalid_conversions,
            args.options.default_value
        );
    }

    Ok(())
}
