//! This module defines the trait [Column] and its implementations,
//! as well as [ColumnEnum],
//! which collects all implementations of [Column] into a single object.

pub mod constant;
pub mod vector;

use std::fmt::Debug;

use delegate::delegate;

use self::{constant::ColumnConstant, vector::ColumnVector};

/// A trait representing a column of data, where each entry is either a value of type `T` or absent.
pub trait Column<T>: Debug {
    /// Returns the number of entries in the column.
    fn len(&self) -> usize;

    /// Returns true iff the column is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at the given index, or `None` if it is absent.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn get(&self, index: usize) -> Option<&T>;
}

/// Enum for column implementations
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnEnum<T> {
    /// Case ColumnVector
    ColumnVector(ColumnVector<T>),
    /// Case ColumnConstant
    ColumnConstant(ColumnConstant<T>),
}

impl<T: Debug> Column<T> for ColumnEnum<T> {
    delegate! {
        to match self {
            Self::ColumnVector(column) => column,
            Self::ColumnConstant(column) => column,
        } {
            fn len(&self) -> usize;
            fn get(&self, index: usize) -> Option<&T>;
        }
    }
}

impl<T: Debug> ColumnEnum<T> {
    /// Returns an iterator over all entries of this column, in row order.
    pub fn iter(&self) -> ColumnEnumIterator<'_, T> {
        ColumnEnumIterator {
            column: self,
            position: 0,
        }
    }
}

impl<T> From<ColumnVector<T>> for ColumnEnum<T> {
    fn from(column: ColumnVector<T>) -> Self {
        Self::ColumnVector(column)
    }
}

impl<T> From<ColumnConstant<T>> for ColumnEnum<T> {
    fn from(column: ColumnConstant<T>) -> Self {
        Self::ColumnConstant(column)
    }
}

/// Iterator for a [ColumnEnum].
#[derive(Debug)]
pub struct ColumnEnumIterator<'a, T> {
    column: &'a ColumnEnum<T>,
    position: usize,
}

impl<'a, T: Debug> Iterator for ColumnEnumIterator<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.column.len() {
            return None;
        }

        let item = self.column.get(self.position);
        self.position += 1;

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.column.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::{constant::ColumnConstant, vector::ColumnVector, Column, ColumnEnum};

    #[test]
    fn iterate_both_representations() {
        let vector = ColumnEnum::from(ColumnVector::new(vec![Some(1i64), None, Some(3)]));
        let constant = ColumnEnum::from(ColumnConstant::new(Some(7i64), 2));

        assert_eq!(
            vector.iter().collect::<Vec<_>>(),
            vec![Some(&1), None, Some(&3)]
        );
        assert_eq!(constant.iter().collect::<Vec<_>>(), vec![Some(&7), Some(&7)]);
        assert_eq!(vector.len(), 3);
        assert!(!constant.is_empty());
    }
}
