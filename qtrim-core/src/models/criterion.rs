use std::fmt::{self, Display};

///
/// Feasibility criterion a window `[l, r]` of one read has to satisfy to be counted.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Criterion {
    /// No bad position inside the window.
    ExactGood,
    /// At most `k` bad positions inside the window.
    KBadAllowed(usize),
    /// At most `floor(p * width)` bad positions, `p` in `[0, 1]`.
    PercentBadAllowed(f64),
    /// Mean quality value of the window at least `m`.
    MeanAtLeast(f64),
}

impl Criterion {
    ///
    /// Whether the criterion reads good/bad flags (`true`) or shifted quality values (`false`).
    ///
    pub fn uses_flags(&self) -> bool {
        !matches!(self, Criterion::MeanAtLeast(_))
    }

    ///
    /// Whether feasibility of `[l, r]` implies feasibility of every sub-window.
    ///
    pub fn is_hereditary(&self) -> bool {
        matches!(self, Criterion::ExactGood | Criterion::KBadAllowed(_))
    }
}

impl Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::ExactGood => write!(f, "0-zeros"),
            Criterion::KBadAllowed(k) => write!(f, "{}-zeros", k),
            Criterion::PercentBadAllowed(p) => write!(f, "{}-percent", p),
            Criterion::MeanAtLeast(m) => write!(f, "{}-mean", m),
        }
    }
}

///
/// A window of `width` positions with `bad` bad ones satisfies the percent criterion.
///
#[inline]
pub fn within_percent(bad: usize, width: usize, percent: f64) -> bool {
    (bad as f64) <= percent * width as f64
}

///
/// A window of `width` positions whose shifted values add up to `sum` satisfies the mean
/// criterion.
///
#[inline]
pub fn reaches_mean(sum: i64, width: usize, mean: f64) -> bool {
    (sum as f64) >= mean * width as f64
}
