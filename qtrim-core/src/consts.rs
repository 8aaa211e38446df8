/// Default bound on the number of rows waiting between the reader and the workers.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10_000;

/// Byte marking a bad position in a raw 0/1 grid.
pub const BAD_GRID_BYTE: u8 = b'0';

/// Lowest quality character written by the read simulator (inclusive).
pub const SIMULATED_QUALITY_MIN: u8 = 44;

/// Highest quality character written by the read simulator (exclusive).
pub const SIMULATED_QUALITY_MAX: u8 = 74;

/// Separator between the fields of an exported matrix cell.
pub const CSV_SEPARATOR: &str = "; ";
