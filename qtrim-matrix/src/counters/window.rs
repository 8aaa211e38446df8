//! Counters for criteria that bound an aggregate over the window (share of bad positions,
//! mean quality). Neither is hereditary: a feasible window may contain infeasible
//! sub-windows.
//!
//! Both split the windows of a row in two groups. Windows inside a maximal *solid* block
//! (all good, or all at least the mean) are feasible whatever their width and are counted
//! like exact-good runs, with one mark per block. Every other window is tested on its own
//! in O(1) through prefix sums and counted directly.

use qtrim_core::criterion::{reaches_mean, within_percent};
use qtrim_core::{Classifier, Result, Row};

use super::{RowCounter, for_each_block};
use crate::reconstruct::{Contributions, Reconstruction};

///
/// Mark the solid blocks of a row and count every remaining feasible window.
///
/// `block_end[l]` is the end of the solid block containing `l`, if any. Windows `[l, r]`
/// with `r <= block_end[l]` lie inside that block and are left to the block mark.
///
fn count_row_windows<F>(
    solid: &[bool],
    block_end: &mut Vec<Option<usize>>,
    contributions: &mut Contributions,
    feasible: F,
) where
    F: Fn(usize, usize) -> bool,
{
    let length = solid.len();
    block_end.clear();
    block_end.resize(length, None);

    for_each_block(solid, |start, end| {
        contributions.mark_block(start, end);
        for slot in &mut block_end[start..=end] {
            *slot = Some(end);
        }
    });

    for left in 0..length {
        let first = block_end[left].map_or(left, |end| end + 1);
        for right in first..length {
            if feasible(left, right) {
                contributions.count_window(left, right);
            }
        }
    }
}

///
/// Counts windows with at most `floor(p * width)` bad positions.
///
pub struct PercentCounter {
    classifier: Classifier,
    percent: f64,
    flags: Vec<bool>,
    bad_prefix: Vec<usize>,
    block_end: Vec<Option<usize>>,
}

impl PercentCounter {
    pub fn new(classifier: Classifier, percent: f64) -> Self {
        let length = classifier.length();
        Self {
            classifier,
            percent,
            flags: Vec::with_capacity(length),
            bad_prefix: Vec::with_capacity(length + 1),
            block_end: Vec::with_capacity(length),
        }
    }
}

impl RowCounter for PercentCounter {
    fn reconstruction(&self) -> Reconstruction {
        Reconstruction::Covering
    }

    fn count_row(&mut self, row: &Row, contributions: &mut Contributions) -> Result<()> {
        self.classifier.flags_into(row, &mut self.flags)?;

        // bad positions in [l, r] = bad_prefix[r + 1] - bad_prefix[l]
        self.bad_prefix.clear();
        self.bad_prefix.push(0);
        let mut total = 0;
        for &good in &self.flags {
            total += (!good) as usize;
            self.bad_prefix.push(total);
        }

        let bad_prefix = &self.bad_prefix;
        let percent = self.percent;
        count_row_windows(&self.flags, &mut self.block_end, contributions, |l, r| {
            within_percent(bad_prefix[r + 1] - bad_prefix[l], r + 1 - l, percent)
        });
        Ok(())
    }
}

///
/// Counts windows whose mean shifted quality value is at least `m`.
///
pub struct MeanCounter {
    classifier: Classifier,
    mean: f64,
    values: Vec<i32>,
    solid: Vec<bool>,
    sum_prefix: Vec<i64>,
    block_end: Vec<Option<usize>>,
}

impl MeanCounter {
    pub fn new(classifier: Classifier, mean: f64) -> Self {
        let length = classifier.length();
        Self {
            classifier,
            mean,
            values: Vec::with_capacity(length),
            solid: Vec::with_capacity(length),
            sum_prefix: Vec::with_capacity(length + 1),
            block_end: Vec::with_capacity(length),
        }
    }
}

impl RowCounter for MeanCounter {
    fn reconstruction(&self) -> Reconstruction {
        Reconstruction::Covering
    }

    fn count_row(&mut self, row: &Row, contributions: &mut Contributions) -> Result<()> {
        self.classifier.values_into(row, &mut self.values)?;

        let mean = self.mean;
        self.solid.clear();
        self.solid
            .extend(self.values.iter().map(|&v| reaches_mean(v as i64, 1, mean)));

        self.sum_prefix.clear();
        self.sum_prefix.push(0);
        let mut total = 0i64;
        for &v in &self.values {
            total += v as i64;
            self.sum_prefix.push(total);
        }

        let sum_prefix = &self.sum_prefix;
        count_row_windows(&self.solid, &mut self.block_end, contributions, |l, r| {
            reaches_mean(sum_prefix[r + 1] - sum_prefix[l], r + 1 - l, mean)
        });
        Ok(())
    }
}
