//! Sources of raw quality rows.
//!
//! The matrix engine pulls one quality string at a time through [`RowSource`]. Readers
//! skip any framing of the input (the three FASTQ lines preceding every quality line) and
//! hand over the bare bytes; length checks happen later in the classifier.

use std::collections::VecDeque;
use std::io::BufRead;
use std::path::Path;

use crate::errors::Result;
use crate::models::config::InputFormat;
use crate::utils::get_dynamic_reader;

pub trait RowSource {
    ///
    /// The next quality string, or `None` once the input is exhausted.
    ///
    fn next_row(&mut self) -> Result<Option<Vec<u8>>>;
}

///
/// Reads quality strings from FASTQ records or from plain lines.
///
pub struct QualityReader<R> {
    reader: R,
    format: InputFormat,
    buf: Vec<u8>,
}

impl<R: BufRead> QualityReader<R> {
    pub fn new(reader: R, format: InputFormat) -> Self {
        Self {
            reader,
            format,
            buf: Vec::new(),
        }
    }

    /// Read one line into `self.buf` without its line terminator.
    fn read_line(&mut self) -> Result<bool> {
        self.buf.clear();
        let n = self.reader.read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            return Ok(false);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        Ok(true)
    }
}

impl<R: BufRead> RowSource for QualityReader<R> {
    fn next_row(&mut self) -> Result<Option<Vec<u8>>> {
        if self.format == InputFormat::Fastq {
            // header, sequence, separator
            for _ in 0..3 {
                if !self.read_line()? {
                    return Ok(None);
                }
            }
        }
        if !self.read_line()? {
            return Ok(None);
        }
        Ok(Some(self.buf.clone()))
    }
}

///
/// Open a (possibly gzip'd) file of quality rows.
///
pub fn open_rows(
    path: &Path,
    format: InputFormat,
) -> Result<QualityReader<Box<dyn BufRead + Send>>> {
    let reader = get_dynamic_reader(path)?;
    Ok(QualityReader::new(reader, format))
}

///
/// Rows already held in memory.
///
#[derive(Debug, Default, Clone)]
pub struct InMemoryRows {
    rows: VecDeque<Vec<u8>>,
}

impl InMemoryRows {
    pub fn new(rows: Vec<Vec<u8>>) -> Self {
        Self { rows: rows.into() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<&[&str]> for InMemoryRows {
    fn from(rows: &[&str]) -> Self {
        Self::new(rows.iter().map(|r| r.as_bytes().to_vec()).collect())
    }
}

impl RowSource for InMemoryRows {
    fn next_row(&mut self) -> Result<Option<Vec<u8>>> {
        Ok(self.rows.pop_front())
    }
}
