use crate::consts::BAD_GRID_BYTE;
use crate::errors::{Result, TrimError};
use crate::models::row::Row;

///
/// Converts raw quality bytes into what a counter needs: good/bad flags or shifted
/// quality values.
///
/// A position is good iff `byte - shift >= threshold`. Without a threshold the row is read
/// as a 0/1 grid where `'0'` is bad and every other byte is good.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    length: usize,
    threshold: Option<i32>,
    shift: i32,
}

impl Classifier {
    pub fn new(length: usize, threshold: Option<i32>, shift: i32) -> Self {
        Self {
            length,
            threshold,
            shift,
        }
    }

    /// Classifier for rows made of literal `'0'` and `'1'` characters.
    pub fn grid(length: usize) -> Self {
        Self::new(length, None, 0)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn threshold(&self) -> Option<i32> {
        self.threshold
    }

    pub fn shift(&self) -> i32 {
        self.shift
    }

    #[inline]
    pub fn value(&self, byte: u8) -> i32 {
        byte as i32 - self.shift
    }

    #[inline]
    pub fn is_good(&self, byte: u8) -> bool {
        match self.threshold {
            Some(threshold) => self.value(byte) >= threshold,
            None => byte != BAD_GRID_BYTE,
        }
    }

    pub fn check_length(&self, row: &Row) -> Result<()> {
        if row.len() != self.length {
            return Err(TrimError::RowLength {
                row: row.index,
                expected: self.length,
                found: row.len(),
            });
        }
        Ok(())
    }

    ///
    /// Fill `flags` with one good/bad flag per position of `row`.
    ///
    pub fn flags_into(&self, row: &Row, flags: &mut Vec<bool>) -> Result<()> {
        self.check_length(row)?;
        flags.clear();
        flags.extend(row.data.iter().map(|&b| self.is_good(b)));
        Ok(())
    }

    ///
    /// Fill `values` with the shifted quality value of every position of `row`.
    ///
    pub fn values_into(&self, row: &Row, values: &mut Vec<i32>) -> Result<()> {
        self.check_length(row)?;
        values.clear();
        values.extend(row.data.iter().map(|&b| self.value(b)));
        Ok(())
    }
}
