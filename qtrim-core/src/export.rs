use std::io::Write;
use std::path::Path;

use crate::consts::CSV_SEPARATOR;
use crate::errors::Result;
use crate::models::matrix::CountMatrix;
use crate::utils::get_dynamic_writer;

///
/// Write every cell of the upper triangle as a `left; right; count;` line.
///
pub fn write_matrix_csv<W: Write>(matrix: &CountMatrix, writer: &mut W) -> Result<()> {
    for (left, right, count) in matrix.iter() {
        writeln!(
            writer,
            "{}{}{}{}{};",
            left, CSV_SEPARATOR, right, CSV_SEPARATOR, count
        )?;
    }
    Ok(())
}

///
/// Export `matrix` as CSV to `path`, gzip'd if the path ends in `.gz`.
///
pub fn export_matrix(matrix: &CountMatrix, path: &Path) -> Result<()> {
    let mut writer = get_dynamic_writer(path)?;
    write_matrix_csv(matrix, &mut writer)?;
    writer.flush()?;
    Ok(())
}
