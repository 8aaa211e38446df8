use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> std::io::Result<Box<dyn BufRead + Send>> {
    let file = File::open(path)?;
    let file: Box<dyn Read + Send> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(Box::new(BufReader::new(file)))
}

///
/// Get a buffered writer that gzips its output when the path ends in `.gz`.
///
/// # Arguments
///
/// - path: path to the file to create
///
pub fn get_dynamic_writer(path: &Path) -> std::io::Result<Box<dyn Write>> {
    let file = File::create(path)?;
    let writer: Box<dyn Write> = match is_gzipped(path) {
        true => Box::new(BufWriter::new(GzEncoder::new(file, Compression::default()))),
        false => Box::new(BufWriter::new(file)),
    };

    Ok(writer)
}
