pub mod classifier;
pub mod config;
pub mod criterion;
pub mod matrix;
pub mod row;

// re-export for cleaner imports
pub use self::classifier::Classifier;
pub use self::config::{InputFormat, TrimConfig, TrimSettings};
pub use self::criterion::Criterion;
pub use self::matrix::{CountMatrix, TriangularMatrix};
pub use self::row::Row;
