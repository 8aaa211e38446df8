use qtrim_core::{Classifier, Result, Row};

use super::{RowCounter, for_each_block};
use crate::reconstruct::{Contributions, Reconstruction};

///
/// Counts windows with at most `k` bad positions.
///
/// Feasibility is hereditary in the left border: if `[l, r]` holds at most `k` bad
/// positions, so does `[l + 1, r]`. It is therefore enough to record, per row and per
/// right border `r`, the leftmost feasible start `l*(r)` as one mark `Aux[l*(r)][r]`; the
/// downward cumulative sum then credits the row to every `[l, r]` with `l >= l*(r)`.
///
/// With `z_0 < z_1 < ...` the bad positions of the row, the widest window around the
/// group `z_i..z_{i+k-1}` reaches from one past `z_{i-1}` (the start of the good run
/// touching the group on the left) to one before `z_{i+k}` (the end of the good run
/// touching it on the right). Consecutive groups cover consecutive ranges of right
/// borders, so every column is attributed to exactly one group. O(L) per row.
///
pub struct KBadCounter {
    classifier: Classifier,
    allowed: usize,
    flags: Vec<bool>,
    bad_positions: Vec<usize>,
}

impl KBadCounter {
    pub fn new(classifier: Classifier, allowed: usize) -> Self {
        Self {
            classifier,
            allowed,
            flags: Vec::with_capacity(classifier.length()),
            bad_positions: Vec::with_capacity(classifier.length()),
        }
    }
}

impl RowCounter for KBadCounter {
    fn reconstruction(&self) -> Reconstruction {
        Reconstruction::LeftHereditary
    }

    fn count_row(&mut self, row: &Row, contributions: &mut Contributions) -> Result<()> {
        self.classifier.flags_into(row, &mut self.flags)?;
        let length = self.flags.len();
        let k = self.allowed;

        self.bad_positions.clear();
        self.bad_positions.extend(
            self.flags
                .iter()
                .enumerate()
                .filter(|(_, good)| !**good)
                .map(|(i, _)| i),
        );
        let bad = &self.bad_positions;

        if bad.len() <= k {
            // every window of the row qualifies
            contributions.mark_columns(0, 0, length - 1);
            return Ok(());
        }

        if k == 0 {
            // the widest windows are the good runs themselves
            for_each_block(&self.flags, |start, end| {
                contributions.mark_columns(start, start, end)
            });
            return Ok(());
        }

        let mut next_column = 0;
        for first in 0..=bad.len() - k {
            let left = if first == 0 { 0 } else { bad[first - 1] + 1 };
            let right = match bad.get(first + k) {
                Some(&z) => z - 1,
                None => length - 1,
            };
            contributions.mark_columns(left, next_column, right);
            next_column = right + 1;
        }

        Ok(())
    }
}
