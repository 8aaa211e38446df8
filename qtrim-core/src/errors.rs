use thiserror::Error;

/// Problems with the run configuration. All of them are detected before any row is read.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Length of sequence must be positive")]
    InvalidLength,

    #[error("Number of reads must be positive")]
    InvalidRows,

    #[error("{rows} reads exceed the largest count a window can hold ({max})")]
    TooManyRows { rows: usize, max: u32 },

    #[error("Percent of allowed bad positions must be between 0 and 1, got {0}")]
    PercentOutOfRange(f64),

    #[error("Minimum mean must be a finite, non-negative number, got {0}")]
    MeanOutOfRange(f64),

    #[error("Number of allowed bad positions ({zeros}) exceeds the length of sequence ({length})")]
    ZerosOutOfRange { zeros: usize, length: usize },

    #[error("A threshold was given without a shift to convert characters to quality values")]
    ThresholdWithoutShift,

    #[error("The mean criterion needs a shift to convert characters to quality values")]
    MeanWithoutShift,

    #[error("Only one of zeros, percent and mean may be set")]
    ConflictingCriteria,

    #[error("Queue capacity must be positive")]
    InvalidQueueCapacity,

    #[error("Can't read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum TrimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Read {row} has {found} quality values, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Input ended after {found} reads, expected {expected}")]
    MissingRows { expected: usize, found: usize },

    #[error("Can't merge matrices of length {left} and {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("A worker thread panicked")]
    WorkerPanicked,
}

pub type Result<T> = std::result::Result<T, TrimError>;
