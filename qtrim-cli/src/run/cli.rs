use clap::{ArgAction, Command, arg};

pub const RUN_CMD: &str = "run";

pub fn create_run_cli() -> Command {
    Command::new(RUN_CMD)
        .about("Count windows with every parameter taken from a TOML config file.")
        .arg(arg!(-c --config <CONFIG> "TOML file with rows, length and the criterion").required(true))
        .arg(arg!(-i --infile <INFILE> "FASTQ or plain file of quality strings, may be gzip'd").required(true))
        .arg(
            arg!(-o --outfile <OUTFILE> "Write the full count matrix as CSV instead of the summary")
                .required(false),
        )
        .arg(arg!(--json "Print the summary as JSON").action(ArgAction::SetTrue))
        .arg(arg!(-q --quiet "Hide the progress spinner").action(ArgAction::SetTrue))
}
