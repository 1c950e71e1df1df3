use clap::Command;

use crate::shared::{config_arg, format_arg, input_arg, log_file_arg};

pub const ANNOTATE_CMD: &str = "annotate";

pub fn create_annotate_cli() -> Command {
    Command::new(ANNOTATE_CMD)
        .about("Run the annotation tool over the prepared files of a variant table.")
        .arg(input_arg())
        .arg(config_arg())
        .arg(format_arg())
        .arg(log_file_arg())
}
