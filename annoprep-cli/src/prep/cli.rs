use clap::Command;

use crate::shared::{anchor_insertions_arg, input_arg, log_file_arg};

pub const PREP_CMD: &str = "prep";

pub fn create_prep_cli() -> Command {
    Command::new(PREP_CMD)
        .about("Normalize a variant table into deduplicated VCF-style and Ensembl-style files.")
        .arg(input_arg())
        .arg(anchor_insertions_arg())
        .arg(log_file_arg())
}
