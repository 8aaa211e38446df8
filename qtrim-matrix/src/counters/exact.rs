use qtrim_core::{Classifier, Result, Row};

use super::{RowCounter, for_each_block};
use crate::reconstruct::{Contributions, Reconstruction};

///
/// Counts windows without any bad position.
///
/// Every maximal run of good positions `[s, e]` leaves a single mark `Aux[s][e]`; the
/// covering reconstruction then credits the row to every window inside the run.
/// O(L) per row.
///
pub struct ExactGoodCounter {
    classifier: Classifier,
    flags: Vec<bool>,
}

impl ExactGoodCounter {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            flags: Vec::with_capacity(classifier.length()),
        }
    }
}

impl RowCounter for ExactGoodCounter {
    fn reconstruction(&self) -> Reconstruction {
        Reconstruction::Covering
    }

    fn count_row(&mut self, row: &Row, contributions: &mut Contributions) -> Result<()> {
        self.classifier.flags_into(row, &mut self.flags)?;
        for_each_block(&self.flags, |start, end| contributions.mark_block(start, end));
        Ok(())
    }
}
