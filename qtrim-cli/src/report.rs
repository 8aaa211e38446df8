use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use qtrim_core::export::export_matrix;
use qtrim_core::{InputFormat, TrimSettings, open_rows};
use qtrim_matrix::{MaxArea, compute_matrix, find_max_area};

///
/// Where and how the result of a counting run goes.
///
pub struct Output<'a> {
    pub outfile: Option<&'a str>,
    pub json: bool,
    pub progress: bool,
}

impl<'a> Output<'a> {
    pub fn from_matches(matches: &'a ArgMatches) -> Self {
        Self {
            outfile: matches.get_one::<String>("outfile").map(String::as_str),
            json: matches.get_flag("json"),
            progress: !matches.get_flag("quiet"),
        }
    }
}

///
/// Parse an optional argument given as a string.
///
pub fn parse_arg<T>(matches: &ArgMatches, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    matches
        .get_one::<String>(name)
        .map(|value| {
            value
                .parse::<T>()
                .with_context(|| format!("Invalid value for --{}: {}", name, value))
        })
        .transpose()
}

///
/// Parse a required argument given as a string.
///
pub fn require_arg<T>(matches: &ArgMatches, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_arg(matches, name)?.with_context(|| format!("--{} is required", name))
}

///
/// Count `settings.rows` rows of `infile`, then export the matrix or print its best window.
///
pub fn count_and_report(
    infile: &str,
    format: InputFormat,
    settings: &TrimSettings,
    output: &Output,
) -> Result<()> {
    let rows = open_rows(Path::new(infile), format)
        .with_context(|| format!("Failed to open {}", infile))?;
    let matrix = compute_matrix(rows, settings, output.progress)?;

    match output.outfile {
        Some(outfile) => {
            export_matrix(&matrix, Path::new(outfile))
                .with_context(|| format!("Failed to write {}", outfile))?;
            info!("Count matrix written to {}", outfile);
        }
        None => {
            let best = find_max_area(&matrix, settings.rows);
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_summary(&mut handle, best.as_ref(), output.json)?;
        }
    }
    Ok(())
}

pub fn write_summary<W: Write>(writer: &mut W, best: Option<&MaxArea>, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *writer, &best)?;
        writeln!(writer)?;
        return Ok(());
    }

    match best {
        Some(best) => {
            writeln!(writer, "area:  {}", best.area)?;
            writeln!(writer, "width: {} ({:.2}%)", best.width, best.width_percent)?;
            writeln!(writer, "rows:  {} ({:.2}%)", best.rows, best.rows_percent)?;
            writeln!(writer, "left:  {}", best.left)?;
            writeln!(writer, "right: {}", best.right)?;
        }
        None => writeln!(writer, "no feasible window")?,
    }
    Ok(())
}
