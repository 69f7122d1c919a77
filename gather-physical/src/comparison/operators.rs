//! Row-wise evaluation of comparisons over two columns of the same scalar type.
//!
//! An absent operand on either side produces an absent result.
//! Empty strings are present values here, unlike in the collection aggregates.

use std::fmt::{Debug, Display};

use serde_json::Value as JsonValue;

use crate::{
    columnar::{
        column::{vector::ColumnVector, Column, ColumnEnum},
        column_t::ColumnT,
    },
    datatypes::{ScalarType, ScalarTypeName},
    error::Error,
};

use super::{
    equal, greater_than, greater_than_or_equal, less_than, less_than_or_equal, not_equal,
    Extremum,
};

/// Matches two [ColumnT]s of the same type,
/// handing ordered columns to the first body and dynamic columns to the second.
/// Returns an [Error::ArgumentType] from the enclosing function if the types differ.
macro_rules! dispatch_same_type {
    (
        $left:expr,
        $right:expr,
        |$l:ident, $r:ident| $ordered:expr,
        dynamic |$dl:ident, $dr:ident| $dynamic:expr
    ) => {
        match ($left, $right) {
            (ColumnT::Int32($l), ColumnT::Int32($r)) => $ordered,
            (ColumnT::Int64($l), ColumnT::Int64($r)) => $ordered,
            (ColumnT::Double($l), ColumnT::Double($r)) => $ordered,
            (ColumnT::Decimal($l), ColumnT::Decimal($r)) => $ordered,
            (ColumnT::Bool($l), ColumnT::Bool($r)) => $ordered,
            (ColumnT::DateTime($l), ColumnT::DateTime($r)) => $ordered,
            (ColumnT::TimeSpan($l), ColumnT::TimeSpan($r)) => $ordered,
            (ColumnT::Guid($l), ColumnT::Guid($r)) => $ordered,
            (ColumnT::String($l), ColumnT::String($r)) => $ordered,
            (ColumnT::Dynamic($dl), ColumnT::Dynamic($dr)) => $dynamic,
            (left, right) => {
                return Err(Error::ArgumentType {
                    index: 1,
                    expected: left.get_type(),
                    found: right.get_type(),
                })
            }
        }
    };
}

/// Relational operators of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperation {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
}

impl ComparisonOperation {
    /// Returns the operator symbol.
    pub fn name(&self) -> &'static str {
        match self {
            ComparisonOperation::Equal => "==",
            ComparisonOperation::NotEqual => "!=",
            ComparisonOperation::LessThan => "<",
            ComparisonOperation::LessThanOrEqual => "<=",
            ComparisonOperation::GreaterThan => ">",
            ComparisonOperation::GreaterThanOrEqual => ">=",
        }
    }

    /// Returns whether this operation only needs equality, not an order.
    pub fn is_equality(&self) -> bool {
        matches!(
            self,
            ComparisonOperation::Equal | ComparisonOperation::NotEqual
        )
    }

    /// Evaluate this operation on two present values.
    pub fn evaluate<T: PartialOrd + ?Sized>(&self, a: &T, b: &T) -> bool {
        match self {
            ComparisonOperation::Equal => equal(a, b),
            ComparisonOperation::NotEqual => not_equal(a, b),
            ComparisonOperation::LessThan => less_than(a, b),
            ComparisonOperation::LessThanOrEqual => less_than_or_equal(a, b),
            ComparisonOperation::GreaterThan => greater_than(a, b),
            ComparisonOperation::GreaterThanOrEqual => greater_than_or_equal(a, b),
        }
    }

    /// Compare two columns row by row, producing a column of booleans.
    ///
    /// # Errors
    /// Returns an error if the columns differ in type or length,
    /// or if an ordering is requested on dynamic values.
    pub fn evaluate_columns(&self, left: &ColumnT, right: &ColumnT) -> Result<ColumnT, Error> {
        check_lengths(left, right)?;

        let result = dispatch_same_type!(left, right,
            |left, right| compare_rows(left, right, |a, b| self.evaluate(a, b)),
            dynamic |left, right| {
                if !self.is_equality() {
                    return Err(Error::UnsupportedComparison {
                        operation: self.name(),
                        type_name: ScalarTypeName::Dynamic,
                    });
                }

                let negate = *self == ComparisonOperation::NotEqual;
                compare_rows(left, right, |a: &JsonValue, b| equal(a, b) != negate)
            }
        );

        Ok(ColumnT::Bool(result.into()))
    }
}

impl Display for ComparisonOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Extremum {
    /// Returns the name of the scalar function computing this extremum row by row.
    pub fn name(&self) -> &'static str {
        match self {
            Extremum::Max => "max_of",
            Extremum::Min => "min_of",
        }
    }

    /// Computes the null-propagating extremum of two columns row by row.
    ///
    /// # Errors
    /// Returns an error if the columns differ in type or length,
    /// or if they contain dynamic values, which have no order.
    pub fn evaluate_columns(&self, left: &ColumnT, right: &ColumnT) -> Result<ColumnT, Error> {
        check_lengths(left, right)?;

        Ok(dispatch_same_type!(left, right,
            |left, right| fold_rows(*self, left, right),
            dynamic |_left, _right| {
                return Err(Error::UnsupportedComparison {
                    operation: self.name(),
                    type_name: ScalarTypeName::Dynamic,
                });
            }
        ))
    }
}

fn check_lengths(left: &ColumnT, right: &ColumnT) -> Result<(), Error> {
    if left.len() != right.len() {
        return Err(Error::RowCountMismatch(vec![left.len(), right.len()]));
    }

    Ok(())
}

fn compare_rows<T, F>(left: &ColumnEnum<T>, right: &ColumnEnum<T>, compare: F) -> ColumnVector<bool>
where
    T: Debug,
    F: Fn(&T, &T) -> bool,
{
    (0..left.len())
        .map(|index| match (left.get(index), right.get(index)) {
            (Some(a), Some(b)) => Some(compare(a, b)),
            _ => None,
        })
        .collect()
}

fn fold_rows<T>(extremum: Extremum, left: &ColumnEnum<T>, right: &ColumnEnum<T>) -> ColumnT
where
    T: ScalarType + PartialOrd,
{
    let values: ColumnVector<T> = (0..left.len())
        .map(|index| {
            extremum
                .fold(left.get(index), right.get(index))
                .cloned()
        })
        .collect();

    T::into_column_t(values.into())
}
