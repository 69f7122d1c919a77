//! This module defines [ColumnConstant].

use std::fmt::Debug;

use super::Column;

/// Column that repeats a single value-or-absent a fixed number of times.
///
/// Scalar arguments of an aggregate, like the cap of `make_list`,
/// are broadcast over the chunk in this way.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnConstant<T> {
    value: Option<T>,
    len: usize,
}

impl<T> ColumnConstant<T> {
    /// Constructs a new column containing `len` copies of `value`.
    pub fn new(value: Option<T>, len: usize) -> Self {
        Self { value, len }
    }
}

impl<T: Debug> Column<T> for ColumnConstant<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Option<&T> {
        assert!(
            index < self.len,
            "index {index} is out of bounds for a constant column of length {}",
            self.len
        );

        self.value.as_ref()
    }
}
