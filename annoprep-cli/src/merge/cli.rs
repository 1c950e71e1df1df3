use std::path::PathBuf;

use clap::{Arg, Command, value_parser};

use crate::consts::OUTPUT_ARG;
use crate::shared::{input_arg, log_file_arg};

pub const MERGE_CMD: &str = "merge";

pub fn create_merge_cli() -> Command {
    Command::new(MERGE_CMD)
        .about("Join annotation results back onto the rows of the source table.")
        .arg(input_arg())
        .arg(
            Arg::new(OUTPUT_ARG)
                .long(OUTPUT_ARG)
                .short('o')
                .value_parser(value_parser!(PathBuf))
                .help("Output path (default: <input>.merged.tsv)"),
        )
        .arg(log_file_arg())
}
