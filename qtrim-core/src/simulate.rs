//! Random FASTQ input for benchmarking the matrix engine.

use std::io::Write;
use std::path::Path;

use rand::Rng;

use crate::consts::{SIMULATED_QUALITY_MAX, SIMULATED_QUALITY_MIN};
use crate::errors::Result;
use crate::utils::get_dynamic_writer;

///
/// Write `reads` FASTQ records whose quality strings hold `length` characters drawn
/// uniformly from `SIMULATED_QUALITY_MIN..SIMULATED_QUALITY_MAX`.
///
/// Header, sequence and separator lines are fixed placeholders; only the quality line is
/// meaningful.
///
pub fn write_random_fastq<W: Write, R: Rng>(
    writer: &mut W,
    reads: usize,
    length: usize,
    rng: &mut R,
) -> Result<()> {
    let mut quality = vec![0u8; length];
    for _ in 0..reads {
        for q in quality.iter_mut() {
            *q = rng.random_range(SIMULATED_QUALITY_MIN..SIMULATED_QUALITY_MAX);
        }
        writer.write_all(b"idline\nCGAT\nidline\n")?;
        writer.write_all(&quality)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

pub fn simulate_fastq_file<R: Rng>(
    path: &Path,
    reads: usize,
    length: usize,
    rng: &mut R,
) -> Result<()> {
    let mut writer = get_dynamic_writer(path)?;
    write_random_fastq(&mut writer, reads, length, rng)?;
    writer.flush()?;
    Ok(())
}
