use clap::{Command, arg};

pub const SIMULATE_CMD: &str = "simulate";
pub const DEFAULT_OUT: &str = "random.fastq";

pub fn create_simulate_cli() -> Command {
    Command::new(SIMULATE_CMD)
        .about("Write a FASTQ file of random quality strings for benchmarking.")
        .arg(arg!(-r --reads <READS> "Number of records").required(true))
        .arg(arg!(-l --length <LENGTH> "Length of every quality string").required(true))
        .arg(
            arg!(-o --outfile <OUTFILE> "Output FASTQ, gzip'd if it ends in .gz")
                .required(false)
                .default_value(DEFAULT_OUT),
        )
        .arg(arg!(--seed <SEED> "Seed for a reproducible file").required(false))
}
