//! This module defines [ColumnarArgument].

use std::sync::Arc;

use crate::{
    datatypes::{ScalarType, ScalarTypeName},
    error::Error,
};

use super::{column::ColumnEnum, column_t::ColumnT};

/// The evaluated result of one argument expression of an aggregate call.
///
/// Cloning only clones a handle;
/// the same column can be shared by several invocations.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnarArgument {
    column: Arc<ColumnT>,
}

impl ColumnarArgument {
    /// Create a new [ColumnarArgument] from a column.
    pub fn new(column: ColumnT) -> Self {
        Self {
            column: Arc::new(column),
        }
    }

    /// Create an argument from a list of values.
    pub fn from_values<T: ScalarType>(values: Vec<Option<T>>) -> Self {
        Self::new(ColumnT::from_values(values))
    }

    /// Create an argument that has the same value in each of its `len` rows.
    pub fn constant<T: ScalarType>(value: Option<T>, len: usize) -> Self {
        Self::new(ColumnT::constant(value, len))
    }

    /// Return the underlying column.
    pub fn column(&self) -> &ColumnT {
        &self.column
    }

    /// Return the type of this argument.
    pub fn get_type(&self) -> ScalarTypeName {
        self.column.get_type()
    }

    /// Return the number of rows.
    pub fn row_count(&self) -> usize {
        self.column.len()
    }

    /// Return the column viewed as a column of `T`.
    ///
    /// `index` is the position of this argument in the call
    /// and only used to report errors.
    pub fn typed<T: ScalarType>(&self, index: usize) -> Result<&ColumnEnum<T>, Error> {
        T::column(&self.column).ok_or(Error::ArgumentType {
            index,
            expected: T::TYPE_NAME,
            found: self.get_type(),
        })
    }
}

impl From<ColumnT> for ColumnarArgument {
    fn from(column: ColumnT) -> Self {
        Self::new(column)
    }
}
