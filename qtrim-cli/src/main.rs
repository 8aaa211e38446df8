mod report;
mod run;
mod simulate;
mod trim;

use anyhow::Result;
use clap::Command;
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "qtrim";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Count, for every window of read positions, how many reads keep that window under a quality criterion.")
        .subcommand_required(true)
        .subcommand(trim::cli::create_zeros_cli())
        .subcommand(trim::cli::create_kzeros_cli())
        .subcommand(trim::cli::create_percent_cli())
        .subcommand(trim::cli::create_mean_cli())
        .subcommand(run::cli::create_run_cli())
        .subcommand(simulate::cli::create_simulate_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // WINDOW COUNTING, ONE SUBCOMMAND PER CRITERION
        //
        Some((
            cmd @ (trim::cli::ZEROS_CMD
            | trim::cli::KZEROS_CMD
            | trim::cli::PERCENT_CMD
            | trim::cli::MEAN_CMD),
            matches,
        )) => {
            trim::handlers::run_trim(cmd, matches)?;
        }

        //
        // CONFIG FILE
        //
        Some((run::cli::RUN_CMD, matches)) => {
            run::handlers::run_config(matches)?;
        }

        //
        // BENCHMARK INPUT
        //
        Some((simulate::cli::SIMULATE_CMD, matches)) => {
            simulate::handlers::run_simulate(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
