//! # Core types for quality window trimming.
//!
//! This crate holds everything the matrix engine consumes or produces but does not compute
//! itself: the triangular count matrix, the trimming criteria, the row classifier, the
//! configuration surface, the readers that turn FASTQ or plain files into rows, and the CSV
//! export of a finished matrix.
//!
pub mod consts;
pub mod errors;
pub mod export;
pub mod models;
pub mod rows;
pub mod simulate;
pub mod utils;

// re-expose core types
pub use errors::*;
pub use models::*;
pub use rows::*;
