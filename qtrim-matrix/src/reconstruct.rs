//! Sparse per-row marks and their conversion into window counts.

use qtrim_core::{CountMatrix, TriangularMatrix};

///
/// How the auxiliary triangle is turned into window counts.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconstruction {
    /// `Aux[s][e]` counts rows with a maximal block `[s, e]`;
    /// `C[i][j] = sum of Aux[s][e] over s <= i, e >= j`.
    Covering,
    /// `Aux[l][j]` counts rows for which `l` is the leftmost feasible start of a window
    /// ending at `j`; `C[i][j] = sum of Aux[s][j] over s <= i`.
    LeftHereditary,
}

///
/// Everything the rows of one accumulation pass contributed before reconstruction.
///
/// `aux` only ever receives marks anchored at block boundaries. `direct` holds plain
/// per-window counts and is allocated on first use, since only the percent and mean
/// criteria need it.
///
#[derive(Debug, Clone)]
pub struct Contributions {
    aux: CountMatrix,
    direct: Option<CountMatrix>,
}

impl Contributions {
    pub fn new(length: usize) -> Self {
        Self {
            aux: CountMatrix::new(length),
            direct: None,
        }
    }

    pub fn length(&self) -> usize {
        self.aux.len()
    }

    /// Mark a maximal block `[start, end]`.
    #[inline]
    pub fn mark_block(&mut self, start: usize, end: usize) {
        self.aux.increment(start, end);
    }

    ///
    /// Mark `left` as the leftmost feasible start for every window ending in `from..=to`.
    ///
    pub fn mark_columns(&mut self, left: usize, from: usize, to: usize) {
        if from > to {
            return;
        }
        let row = self.aux.row_mut(left);
        for cell in &mut row[from - left..=to - left] {
            *cell += 1;
        }
    }

    /// Count one feasible window directly.
    #[inline]
    pub fn count_window(&mut self, left: usize, right: usize) {
        let length = self.aux.len();
        self.direct
            .get_or_insert_with(|| CountMatrix::new(length))
            .increment(left, right);
    }

    pub fn aux(&self) -> &CountMatrix {
        &self.aux
    }

    ///
    /// Propagate the marks and add the direct counts.
    ///
    pub fn finish(self, reconstruction: Reconstruction) -> CountMatrix {
        let mut counts = match reconstruction {
            Reconstruction::Covering => reconstruct_covering(&self.aux),
            Reconstruction::LeftHereditary => reconstruct_left_hereditary(&self.aux),
        };
        if let Some(direct) = self.direct {
            for left in 0..counts.len() {
                for (cell, value) in counts.row_mut(left).iter_mut().zip(direct.row(left)) {
                    *cell += *value;
                }
            }
        }
        counts
    }
}

///
/// `C[i][j]` = number of marked blocks `[s, e]` with `s <= i` and `e >= j`.
///
/// Sweeps rows top to bottom keeping, per column `e`, the number of blocks ending at `e`
/// that start at or above the current row; each row of `C` is then a suffix sum of that
/// accumulator. O(L^2) regardless of how many blocks were marked.
///
pub fn reconstruct_covering(aux: &TriangularMatrix<u32>) -> CountMatrix {
    let length = aux.len();
    let mut counts = CountMatrix::new(length);
    let mut column_sum_above = vec![0u32; length];

    for i in 0..length {
        for (offset, value) in aux.row(i).iter().enumerate() {
            column_sum_above[i + offset] += *value;
        }
        let mut running = 0;
        let row = counts.row_mut(i);
        for j in (i..length).rev() {
            running += column_sum_above[j];
            row[j - i] = running;
        }
    }

    counts
}

///
/// `C[i][j] = Aux[i][j] + C[i-1][j]`: a downward cumulative sum over rows only.
///
pub fn reconstruct_left_hereditary(aux: &TriangularMatrix<u32>) -> CountMatrix {
    let length = aux.len();
    let mut counts = CountMatrix::new(length);
    if length == 0 {
        return counts;
    }

    counts.row_mut(0).copy_from_slice(aux.row(0));
    for i in 1..length {
        for j in i..length {
            counts[(i, j)] = aux[(i, j)] + counts[(i - 1, j)];
        }
    }

    counts
}
