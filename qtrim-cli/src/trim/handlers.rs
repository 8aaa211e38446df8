use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;

use qtrim_core::{InputFormat, TrimConfig};

use super::cli::{KZEROS_CMD, MEAN_CMD, PERCENT_CMD};
use crate::report::{Output, count_and_report, parse_arg, require_arg};

///
/// Assemble a [`TrimConfig`] from the arguments of counting subcommand `cmd`.
///
pub fn config_from_matches(cmd: &str, matches: &ArgMatches) -> Result<TrimConfig> {
    let mut config = TrimConfig::new(
        require_arg(matches, "reads")?,
        require_arg(matches, "length")?,
    );
    config.threshold = parse_arg(matches, "threshold")?;
    config.shift = parse_arg(matches, "shift")?;
    config.threads = parse_arg(matches, "threads")?.unwrap_or(0);

    if let Some(format) = matches.get_one::<String>("format") {
        config.format = InputFormat::from_str(format).map_err(|e| anyhow!(e))?;
    }

    match cmd {
        KZEROS_CMD => config.zeros = Some(require_arg(matches, "zeros")?),
        PERCENT_CMD => config.percent = Some(require_arg(matches, "percent")?),
        MEAN_CMD => config.mean = Some(require_arg(matches, "mean")?),
        _ => {}
    }

    Ok(config)
}

pub fn run_trim(cmd: &str, matches: &ArgMatches) -> Result<()> {
    let config = config_from_matches(cmd, matches)?;
    let settings = config.validate()?;

    let infile = matches
        .get_one::<String>("infile")
        .context("An input file is required")?;

    count_and_report(
        infile,
        config.format,
        &settings,
        &Output::from_matches(matches),
    )
}
