use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const CONVERT_CMD: &str = "convert";

pub fn create_convert_cli() -> Command {
    Command::new(CONVERT_CMD)
        .about("Read a table (R style or plink style) and write it back out in R-readable format.")
        .arg_required_else_help(true)
        .arg(Arg::new("input").required(true).help("Table to read (.gz is decompressed)"))
        .arg(arg!(-o --output <output> "File to write (.gz is compressed)").required(true))
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
        .arg(
            arg!(--corner <corner> "Name written in the upper-left cell of the output header")
                .required(false),
        )
}
