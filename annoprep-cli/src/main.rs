mod annotate;
mod logging;
mod merge;
mod prep;
mod run;
mod shared;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "annoprep";

    pub const INPUT_ARG: &str = "input";
    pub const CONFIG_ARG: &str = "config";
    pub const FORMAT_ARG: &str = "format";
    pub const OUTPUT_ARG: &str = "output";
    pub const LOG_FILE_ARG: &str = "log-file";
    pub const ANCHOR_INSERTIONS_ARG: &str = "anchor-insertions";

    pub const FORMAT_VCF: &str = "vcf";
    pub const FORMAT_ENSEMBL: &str = "ensembl";
    pub const FORMAT_BOTH: &str = "both";

    pub const LOG_SUFFIX: &str = "log";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Normalize tabular variant calls into inputs for variant annotation.")
        .subcommand_required(true)
        .subcommand(prep::cli::create_prep_cli())
        .subcommand(annotate::cli::create_annotate_cli())
        .subcommand(run::cli::create_run_cli())
        .subcommand(merge::cli::create_merge_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // PREP
        //
        Some((prep::cli::PREP_CMD, matches)) => {
            prep::handlers::run_prep(matches)?;
        }

        //
        // ANNOTATE
        //
        Some((annotate::cli::ANNOTATE_CMD, matches)) => {
            annotate::handlers::run_annotate(matches)?;
        }

        //
        // PREP + ANNOTATE
        //
        Some((run::cli::RUN_CMD, matches)) => {
            run::handlers::run_pipeline(matches)?;
        }

        //
        // MERGE
        //
        Some((merge::cli::MERGE_CMD, matches)) => {
            merge::handlers::run_merge(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
