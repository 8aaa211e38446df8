use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use qtrim_core::TrimConfig;

use crate::report::{Output, count_and_report};

pub fn run_config(matches: &ArgMatches) -> Result<()> {
    let config_path = matches
        .get_one::<String>("config")
        .context("A config file is required")?;
    let infile = matches
        .get_one::<String>("infile")
        .context("An input file is required")?;

    let config = TrimConfig::try_from(Path::new(config_path))
        .with_context(|| format!("Failed to load config {}", config_path))?;
    let settings = config.validate()?;

    count_and_report(
        infile,
        config.format,
        &settings,
        &Output::from_matches(matches),
    )
}
