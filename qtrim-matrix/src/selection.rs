use serde::Serialize;

use qtrim_core::CountMatrix;

///
/// The window `[left, right]` maximizing `width * C[left][right]`.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaxArea {
    pub area: u64,
    pub width: usize,
    /// `width` as a percentage of the read length.
    pub width_percent: f64,
    pub rows: u32,
    /// `rows` as a percentage of all reads.
    pub rows_percent: f64,
    pub left: usize,
    pub right: usize,
}

///
/// Scan `matrix` for the window with the largest area.
///
/// Ties go to the first window in scan order (increasing `left`, then increasing `right`).
/// Returns `None` when every count is zero.
///
/// # Arguments
/// * `matrix` - finished count matrix
/// * `total_rows` - number of reads the matrix was built from, for `rows_percent`
///
pub fn find_max_area(matrix: &CountMatrix, total_rows: usize) -> Option<MaxArea> {
    let mut best: Option<(u64, usize, usize)> = None;
    let mut best_area = 0u64;

    for (left, right, count) in matrix.iter() {
        let area = (right - left + 1) as u64 * count as u64;
        if area > best_area {
            best_area = area;
            best = Some((area, left, right));
        }
    }

    best.map(|(area, left, right)| {
        let width = right - left + 1;
        let rows = matrix[(left, right)];
        MaxArea {
            area,
            width,
            width_percent: width as f64 * 100.0 / matrix.len() as f64,
            rows,
            rows_percent: if total_rows == 0 {
                0.0
            } else {
                rows as f64 * 100.0 / total_rows as f64
            },
            left,
            right,
        }
    })
}
