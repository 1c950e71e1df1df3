use anyhow::Result;
use clap::ArgMatches;

use crate::annotate::handlers::{annotate_and_report, load_config};
use crate::logging::{init_logging, log_path};
use crate::prep::handlers::prepare_and_report;
use crate::shared::{config_path, formats, input, policy};

pub fn run_pipeline(matches: &ArgMatches) -> Result<()> {
    let input = input(matches)?;
    let log_file = log_path(matches, input);
    init_logging(&log_file)?;

    // a bad config must fail before any row is touched
    let config = load_config(config_path(matches)?)?;
    let formats = formats(matches)?;

    prepare_and_report(input, policy(matches))?;
    annotate_and_report(&config, input, &formats, &log_file)
}
