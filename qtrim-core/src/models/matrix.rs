use std::ops::{AddAssign, Index, IndexMut};

use crate::errors::{Result, TrimError};

///
/// Upper triangular `L x L` matrix indexed by `(left, right)` with `left <= right < L`.
///
/// Only the `L(L+1)/2` cells of the upper triangle are stored, row after row, in one flat
/// buffer. Row `left` is contiguous and covers `right` in `left..L`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriangularMatrix<T> {
    data: Vec<T>,
    len: usize,
}

/// Finalized window counts: `C[l][r]` is the number of rows for which `[l, r]` is feasible.
pub type CountMatrix = TriangularMatrix<u32>;

impl<T> TriangularMatrix<T>
where
    T: Copy + Default,
{
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![T::default(); len * (len + 1) / 2],
            len,
        }
    }

    ///
    /// Side length `L` of the matrix.
    ///
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn offset(&self, left: usize) -> usize {
        // sum of the lengths of rows 0..left
        left * self.len - left * left.saturating_sub(1) / 2
    }

    #[inline]
    fn index_of(&self, left: usize, right: usize) -> Option<usize> {
        if left <= right && right < self.len {
            Some(self.offset(left) + (right - left))
        } else {
            None
        }
    }

    pub fn get(&self, left: usize, right: usize) -> Option<T> {
        self.index_of(left, right).map(|idx| self.data[idx])
    }

    pub fn get_mut(&mut self, left: usize, right: usize) -> Option<&mut T> {
        self.index_of(left, right).map(|idx| &mut self.data[idx])
    }

    ///
    /// The cells `(left, left..L)` as one slice.
    ///
    pub fn row(&self, left: usize) -> &[T] {
        let start = self.offset(left);
        &self.data[start..start + (self.len - left)]
    }

    pub fn row_mut(&mut self, left: usize) -> &mut [T] {
        let start = self.offset(left);
        let end = start + (self.len - left);
        &mut self.data[start..end]
    }

    ///
    /// Iterate over all cells as `(left, right, value)`, increasing `left` then `right`.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.len).flat_map(move |left| {
            self.row(left)
                .iter()
                .enumerate()
                .map(move |(i, value)| (left, left + i, *value))
        })
    }
}

impl<T> TriangularMatrix<T>
where
    T: Copy + Default + AddAssign,
{
    ///
    /// Element-wise sum of `other` into `self`.
    ///
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        if self.len != other.len {
            return Err(TrimError::DimensionMismatch {
                left: self.len,
                right: other.len,
            });
        }
        for (cell, value) in self.data.iter_mut().zip(other.data.iter()) {
            *cell += *value;
        }
        Ok(())
    }
}

impl TriangularMatrix<u32> {
    pub fn increment(&mut self, left: usize, right: usize) {
        self[(left, right)] += 1;
    }
}

impl<T> Index<(usize, usize)> for TriangularMatrix<T>
where
    T: Copy + Default,
{
    type Output = T;

    fn index(&self, (left, right): (usize, usize)) -> &Self::Output {
        match self.index_of(left, right) {
            Some(idx) => &self.data[idx],
            None => panic!(
                "Index out of bounds: ({}, {}) in triangular matrix of length {}",
                left, right, self.len
            ),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for TriangularMatrix<T>
where
    T: Copy + Default,
{
    fn index_mut(&mut self, (left, right): (usize, usize)) -> &mut Self::Output {
        match self.index_of(left, right) {
            Some(idx) => &mut self.data[idx],
            None => panic!(
                "Index out of bounds: ({}, {}) in triangular matrix of length {}",
                left, right, self.len
            ),
        }
    }
}
