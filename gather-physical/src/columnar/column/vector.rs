//! This module defines [ColumnVector].

use std::{fmt::Debug, ops::Index};

use super::Column;

/// Simple implementation of [`Column`] that uses Vec to store data.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnVector<T> {
    data: Vec<Option<T>>,
}

impl<T> ColumnVector<T> {
    /// Constructs a new ColumnVector from a vector of the suitable type.
    pub fn new(data: Vec<Option<T>>) -> ColumnVector<T> {
        let mut data = data;
        data.shrink_to_fit();

        ColumnVector { data }
    }

    /// Constructs a new ColumnVector in which every value is present.
    pub fn from_values(values: Vec<T>) -> ColumnVector<T> {
        Self::new(values.into_iter().map(Some).collect())
    }
}

impl<T: Debug> Column<T> for ColumnVector<T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.data[index].as_ref()
    }
}

impl<T> Index<usize> for ColumnVector<T> {
    type Output = Option<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> FromIterator<Option<T>> for ColumnVector<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
