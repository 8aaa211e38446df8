use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use qtrim_core::simulate::simulate_fastq_file;

use super::cli::DEFAULT_OUT;
use crate::report::{parse_arg, require_arg};

pub fn run_simulate(matches: &ArgMatches) -> Result<()> {
    let reads: usize = require_arg(matches, "reads")?;
    let length: usize = require_arg(matches, "length")?;
    let seed: Option<u64> = parse_arg(matches, "seed")?;

    let default_out = DEFAULT_OUT.to_string();
    let outfile = matches.get_one::<String>("outfile").unwrap_or(&default_out);
    let path = Path::new(outfile);

    match seed {
        Some(seed) => simulate_fastq_file(path, reads, length, &mut StdRng::seed_from_u64(seed)),
        None => simulate_fastq_file(path, reads, length, &mut rand::rng()),
    }
    .with_context(|| format!("Failed to write {}", outfile))?;

    info!("Wrote {} random reads of length {} to {}", reads, length, outfile);
    Ok(())
}
