use clap::Command;

use crate::shared::{anchor_insertions_arg, config_arg, format_arg, input_arg, log_file_arg};

pub const RUN_CMD: &str = "run";

pub fn create_run_cli() -> Command {
    Command::new(RUN_CMD)
        .about("Prepare a variant table and annotate the results in one go.")
        .arg(input_arg())
        .arg(config_arg())
        .arg(anchor_insertions_arg())
        .arg(format_arg())
        .arg(log_file_arg())
}
