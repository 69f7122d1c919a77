//! This module defines [ColumnT], a column of any scalar type.

use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::datatypes::{Double, ScalarType, ScalarTypeName, TypedScalar};

use super::column::{constant::ColumnConstant, vector::ColumnVector, Column, ColumnEnum};

/// Enum for columns of all supported scalar types
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnT {
    /// Case [i32]
    Int32(ColumnEnum<i32>),
    /// Case [i64]
    Int64(ColumnEnum<i64>),
    /// Case [Double]
    Double(ColumnEnum<Double>),
    /// Case [Decimal]
    Decimal(ColumnEnum<Decimal>),
    /// Case [bool]
    Bool(ColumnEnum<bool>),
    /// Case [`DateTime<Utc>`]
    DateTime(ColumnEnum<DateTime<Utc>>),
    /// Case [TimeDelta]
    TimeSpan(ColumnEnum<TimeDelta>),
    /// Case [Uuid]
    Guid(ColumnEnum<Uuid>),
    /// Case [String]
    String(ColumnEnum<String>),
    /// Case [JsonValue]
    Dynamic(ColumnEnum<JsonValue>),
}

/// Applies `$body` to the column inside any variant of [ColumnT].
macro_rules! forward_to_column {
    ($self:expr, $column:ident => $body:expr) => {
        match $self {
            ColumnT::Int32($column) => $body,
            ColumnT::Int64($column) => $body,
            ColumnT::Double($column) => $body,
            ColumnT::Decimal($column) => $body,
            ColumnT::Bool($column) => $body,
            ColumnT::DateTime($column) => $body,
            ColumnT::TimeSpan($column) => $body,
            ColumnT::Guid($column) => $body,
            ColumnT::String($column) => $body,
            ColumnT::Dynamic($column) => $body,
        }
    };
}

impl ColumnT {
    /// Creates a column that stores the given values.
    pub fn from_values<T: ScalarType>(values: Vec<Option<T>>) -> Self {
        T::into_column_t(ColumnVector::new(values).into())
    }

    /// Creates a column that repeats `value` for `len` rows.
    pub fn constant<T: ScalarType>(value: Option<T>, len: usize) -> Self {
        T::into_column_t(ColumnConstant::new(value, len).into())
    }

    /// Returns the type of the values in this column.
    pub fn get_type(&self) -> ScalarTypeName {
        match self {
            Self::Int32(_) => ScalarTypeName::Int32,
            Self::Int64(_) => ScalarTypeName::Int64,
            Self::Double(_) => ScalarTypeName::Double,
            Self::Decimal(_) => ScalarTypeName::Decimal,
            Self::Bool(_) => ScalarTypeName::Bool,
            Self::DateTime(_) => ScalarTypeName::DateTime,
            Self::TimeSpan(_) => ScalarTypeName::TimeSpan,
            Self::Guid(_) => ScalarTypeName::Guid,
            Self::String(_) => ScalarTypeName::String,
            Self::Dynamic(_) => ScalarTypeName::Dynamic,
        }
    }

    /// Returns the number of rows in this column.
    pub fn len(&self) -> usize {
        forward_to_column!(self, column => column.len())
    }

    /// Returns true iff the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at the given index, tagged with the type of this column.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> TypedScalar {
        let value = forward_to_column!(self, column => {
            column.get(index).cloned().map(ScalarType::into_scalar)
        });

        TypedScalar::from_option(self.get_type(), value)
    }
}
