//! # Window count matrices for quality trimming.
//!
//! Given `n` reads of length `L` and a feasibility criterion, this crate computes the
//! triangular matrix `C` where `C[l][r]` is the number of reads whose window `[l, r]`
//! satisfies the criterion, and picks the window maximizing `width * C[l][r]`.
//!
//! Every criterion is counted in two phases. While reading, each row only leaves sparse
//! marks in an auxiliary triangle (plus, for the non-hereditary criteria, direct counts
//! for windows that cannot be resolved by a block). After the last row a cumulative sum
//! turns the marks into window counts. Both phases are linear in the rows, so partial
//! matrices built by independent workers simply add up.
//!
//! # Example
//!
//! ```
//! use qtrim_core::{Classifier, Criterion, InMemoryRows, TrimSettings};
//! use qtrim_matrix::{compute_matrix, find_max_area};
//!
//! let settings = TrimSettings::new(2, Classifier::grid(4), Criterion::ExactGood);
//! let rows = InMemoryRows::from(&["1101", "1111"][..]);
//!
//! let matrix = compute_matrix(rows, &settings, false).unwrap();
//! assert_eq!(matrix[(0, 1)], 2);
//!
//! let best = find_max_area(&matrix, settings.rows).unwrap();
//! assert_eq!((best.left, best.right, best.area), (0, 1, 4));
//! ```
pub mod builder;
pub mod counters;
pub mod pipeline;
pub mod queue;
pub mod reconstruct;
pub mod selection;

// re-exports
pub use builder::MatrixBuilder;
pub use counters::{RowCounter, counter_for};
pub use pipeline::{compute_matrix, compute_parallel, compute_sequential};
pub use queue::{QueueConsumer, QueueProducer, WorkQueue};
pub use reconstruct::{Contributions, Reconstruction};
pub use selection::{MaxArea, find_max_area};
