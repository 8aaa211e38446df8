use clap::{ArgAction, Command, arg};

pub const ZEROS_CMD: &str = "zeros";
pub const KZEROS_CMD: &str = "kzeros";
pub const PERCENT_CMD: &str = "percent";
pub const MEAN_CMD: &str = "mean";

pub const DEFAULT_THREADS: &str = "0";
pub const DEFAULT_FORMAT: &str = "fastq";

///
/// Arguments every counting subcommand takes.
///
fn with_shared_args(cmd: Command) -> Command {
    cmd.arg(arg!(-r --reads <READS> "Number of reads to process").required(true))
        .arg(arg!(-l --length <LENGTH> "Length of every read").required(true))
        .arg(arg!(-i --infile <INFILE> "FASTQ or plain file of quality strings, may be gzip'd").required(true))
        .arg(
            arg!(-o --outfile <OUTFILE> "Write the full count matrix as CSV instead of the summary")
                .required(false),
        )
        .arg(
            arg!(-t --threshold <THRESHOLD> "Lowest shifted quality value counted as good")
                .required(false)
                .allow_negative_numbers(true),
        )
        .arg(
            arg!(-s --shift <SHIFT> "Offset subtracted from every quality byte, e.g. 33")
                .required(false)
                .allow_negative_numbers(true),
        )
        .arg(
            arg!(-j --threads <THREADS> "Worker threads, 0 counts on the main thread")
                .required(false)
                .default_value(DEFAULT_THREADS),
        )
        .arg(
            arg!(--format <FORMAT> "Input layout: fastq or lines")
                .required(false)
                .default_value(DEFAULT_FORMAT),
        )
        .arg(arg!(--json "Print the summary as JSON").action(ArgAction::SetTrue))
        .arg(arg!(-q --quiet "Hide the progress spinner").action(ArgAction::SetTrue))
}

pub fn create_zeros_cli() -> Command {
    with_shared_args(
        Command::new(ZEROS_CMD).about("Count windows without a single bad position."),
    )
}

pub fn create_kzeros_cli() -> Command {
    with_shared_args(
        Command::new(KZEROS_CMD).about("Count windows with at most K bad positions."),
    )
    .arg(arg!(--zeros <K> "Number of bad positions allowed per window").required(true))
}

pub fn create_percent_cli() -> Command {
    with_shared_args(
        Command::new(PERCENT_CMD)
            .about("Count windows whose share of bad positions stays within a fraction."),
    )
    .arg(arg!(--percent <P> "Allowed fraction of bad positions, between 0 and 1").required(true))
}

pub fn create_mean_cli() -> Command {
    with_shared_args(
        Command::new(MEAN_CMD).about("Count windows whose mean shifted quality reaches a value."),
    )
    .arg(arg!(--mean <M> "Lowest acceptable mean quality").required(true))
}
