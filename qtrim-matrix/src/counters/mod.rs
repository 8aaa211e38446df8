//! Per-criterion row counters.
//!
//! A counter turns one raw row into marks on a [`Contributions`]. It owns its scratch
//! buffers so that a worker can feed it row after row without reallocating.

pub mod exact;
pub mod kbad;
pub mod window;

use qtrim_core::{Classifier, Criterion, Result, Row};

use crate::reconstruct::{Contributions, Reconstruction};

pub use exact::ExactGoodCounter;
pub use kbad::KBadCounter;
pub use window::{MeanCounter, PercentCounter};

pub trait RowCounter: Send {
    ///
    /// The propagation that turns this counter's marks into window counts.
    ///
    fn reconstruction(&self) -> Reconstruction;

    ///
    /// Classify `row` and add its contribution.
    ///
    fn count_row(&mut self, row: &Row, contributions: &mut Contributions) -> Result<()>;
}

///
/// Build the counter for `criterion`.
///
pub fn counter_for(criterion: &Criterion, classifier: Classifier) -> Box<dyn RowCounter> {
    match *criterion {
        Criterion::ExactGood => Box::new(ExactGoodCounter::new(classifier)),
        Criterion::KBadAllowed(k) => Box::new(KBadCounter::new(classifier, k)),
        Criterion::PercentBadAllowed(p) => Box::new(PercentCounter::new(classifier, p)),
        Criterion::MeanAtLeast(m) => Box::new(MeanCounter::new(classifier, m)),
    }
}

///
/// Call `f(start, end)` for every maximal run of `true` in `flags`, left to right.
///
pub(crate) fn for_each_block<F>(flags: &[bool], mut f: F)
where
    F: FnMut(usize, usize),
{
    let mut start: Option<usize> = None;
    for (i, &flag) in flags.iter().enumerate() {
        match (flag, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                f(s, i - 1);
                start = None;
            }
            _ => {}
        }
    }
    // the end of the row closes a trailing run
    if let Some(s) = start {
        f(s, flags.len() - 1);
    }
}
