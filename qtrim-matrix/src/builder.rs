use qtrim_core::{Classifier, CountMatrix, Criterion, Result, Row};

use crate::counters::{RowCounter, counter_for};
use crate::reconstruct::Contributions;

///
/// One accumulation pass: rows go in one at a time, the count matrix comes out once.
///
/// The sequential run uses a single builder; in parallel mode every worker owns one and
/// the finished matrices are summed.
///
pub struct MatrixBuilder {
    counter: Box<dyn RowCounter>,
    contributions: Contributions,
    rows: usize,
}

impl MatrixBuilder {
    pub fn new(criterion: &Criterion, classifier: Classifier) -> Self {
        Self::with_counter(counter_for(criterion, classifier), classifier.length())
    }

    pub fn with_counter(counter: Box<dyn RowCounter>, length: usize) -> Self {
        Self {
            counter,
            contributions: Contributions::new(length),
            rows: 0,
        }
    }

    pub fn push_row(&mut self, row: &Row) -> Result<()> {
        self.counter.count_row(row, &mut self.contributions)?;
        self.rows += 1;
        Ok(())
    }

    /// Number of rows added so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn finish(self) -> CountMatrix {
        self.contributions.finish(self.counter.reconstruction())
    }
}
