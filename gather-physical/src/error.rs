//! Error-handling module for the crate

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::{aggregates::operation::AggregateOperation, datatypes::ScalarTypeName};

/// Error-Collection for all the possible Errors occurring in this crate
///
/// None of these errors are caused by the data itself.
/// They indicate that a caller (usually the binder) handed arguments to an
/// implementation that does not accept them, and should be treated as internal errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Aggregate was invoked with the wrong number of arguments
    #[error("aggregate `{operation}` expects {expected:?} arguments, but {found} were provided")]
    ArgumentCount {
        /// Invoked aggregate
        operation: AggregateOperation,
        /// Accepted number of arguments
        expected: RangeInclusive<usize>,
        /// Number of arguments that were provided
        found: usize,
    },
    /// An argument column has a different scalar type than the implementation expects
    #[error("argument {index} has type `{found}`, but `{expected}` was expected")]
    ArgumentType {
        /// Position of the argument
        index: usize,
        /// Type the implementation works on
        expected: ScalarTypeName,
        /// Type of the provided column
        found: ScalarTypeName,
    },
    /// Columns that should describe the same rows do not have the same length
    #[error("The provided columns do not have the same number of rows: {0:?}")]
    RowCountMismatch(Vec<usize>),
    /// Name does not refer to any built-in aggregate
    #[error("unknown aggregate function `{0}`")]
    UnknownAggregate(String),
    /// Name does not refer to any scalar type
    #[error("unknown scalar type `{0}`")]
    UnknownScalarType(String),
    /// Comparison operation is not defined on the given type
    #[error("operation `{operation}` is not supported on values of type `{type_name}`")]
    UnsupportedComparison {
        /// Name of the requested comparison
        operation: &'static str,
        /// Type of the compared columns
        type_name: ScalarTypeName,
    },
}
