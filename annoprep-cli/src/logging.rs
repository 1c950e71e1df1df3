use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use env_logger::{Env, Target};

use annoprep_io::append_suffix;

use crate::consts::{LOG_FILE_ARG, LOG_SUFFIX};

/// `--log-file` when given, else `<input>.log`.
pub fn log_path(matches: &ArgMatches, input: &Path) -> PathBuf {
    matches
        .get_one::<PathBuf>(LOG_FILE_ARG)
        .cloned()
        .unwrap_or_else(|| append_suffix(input, LOG_SUFFIX))
}

///
/// Send log records to `path`, appending to earlier runs.
///
/// The level defaults to `info` and can be changed with `RUST_LOG`.
///
pub fn init_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Could not open log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_module_path(false)
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}
