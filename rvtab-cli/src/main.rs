mod convert;
mod inspect;
mod table;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use tracing_subscriber::filter::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "rvtab";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Read, check and rewrite labeled numeric tables (geno, cgeno, cov, pheno).")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Print more diagnostics (-v for info, -vv for debug)"),
        )
        .subcommand(convert::cli::create_convert_cli())
        .subcommand(inspect::cli::create_inspect_cli())
}

/// Diagnostics go to stderr; `log` records from the libraries are bridged in.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        //
        // CONVERT
        //
        Some((convert::cli::CONVERT_CMD, matches)) => {
            convert::handlers::run_convert(matches)?;
        }

        //
        // INSPECT
        //
        Some((inspect::cli::INSPECT_CMD, matches)) => {
            inspect::handlers::run_inspect(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
