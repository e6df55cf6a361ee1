use clap::{Arg, ArgAction, Command, value_parser};

pub const INSPECT_CMD: &str = "inspect";

pub fn create_inspect_cli() -> Command {
    Command::new(INSPECT_CMD)
        .about("Read a table and report its shape and any problems found while reading it.")
        .arg_required_else_help(true)
        .arg(Arg::new("input").required(true).help("Table to read (.gz is decompressed)"))
        .arg(
            Arg::new("plink")
                .long("plink")
                .action(ArgAction::SetTrue)
                .help("Input has FID and IID as its first two columns"),
        )
        .arg(
            Arg::new("default")
                .long("default")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .help("Value stored for fields that are not numbers (default: -9)"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Drop lines with an already seen row label instead of remapping it"),
        )
}
