//! Arguments shared by several subcommands and their extraction.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, value_parser};

use annoprep_core::{OutputFormat, RoutingPolicy};

use crate::consts::*;

pub fn input_arg() -> Arg {
    Arg::new(INPUT_ARG)
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Delimited variant table (.tsv, .csv, optionally gzipped)")
}

pub fn log_file_arg() -> Arg {
    Arg::new(LOG_FILE_ARG)
        .long(LOG_FILE_ARG)
        .value_parser(value_parser!(PathBuf))
        .help("Append log output here instead of <input>.log")
}

pub fn anchor_insertions_arg() -> Arg {
    Arg::new(ANCHOR_INSERTIONS_ARG)
        .long(ANCHOR_INSERTIONS_ARG)
        .action(ArgAction::SetTrue)
        .help("Write insertions VCF-style with an N anchor base instead of Ensembl-style")
}

pub fn config_arg() -> Arg {
    Arg::new(CONFIG_ARG)
        .long(CONFIG_ARG)
        .short('c')
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("TOML file with the annotation tool settings")
}

pub fn format_arg() -> Arg {
    Arg::new(FORMAT_ARG)
        .long(FORMAT_ARG)
        .value_parser([FORMAT_VCF, FORMAT_ENSEMBL, FORMAT_BOTH])
        .default_value(FORMAT_BOTH)
        .help("Which prepared files to annotate")
}

pub fn input(matches: &ArgMatches) -> Result<&Path> {
    matches
        .get_one::<PathBuf>(INPUT_ARG)
        .map(PathBuf::as_path)
        .context("A path to a variant table is required.")
}

pub fn config_path(matches: &ArgMatches) -> Result<&Path> {
    matches
        .get_one::<PathBuf>(CONFIG_ARG)
        .map(PathBuf::as_path)
        .context("A path to an annotation config is required.")
}

pub fn policy(matches: &ArgMatches) -> RoutingPolicy {
    if matches.get_flag(ANCHOR_INSERTIONS_ARG) {
        RoutingPolicy::AnchorInsertions
    } else {
        RoutingPolicy::PlaceholdersToEnsembl
    }
}

pub fn formats(matches: &ArgMatches) -> Result<Vec<OutputFormat>> {
    match matches.get_one::<String>(FORMAT_ARG).map(String::as_str) {
        None | Some(FORMAT_BOTH) => Ok(OutputFormat::ALL.to_vec()),
        Some(format) => Ok(vec![format.parse::<OutputFormat>().map_err(anyhow::Error::msg)?]),
    }
}
