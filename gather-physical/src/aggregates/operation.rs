//! Exposes the supported aggregate operations

use std::{fmt::Display, ops::RangeInclusive, str::FromStr};

use crate::{datatypes::ScalarTypeName, error::Error};

/// Number of built-in aggregate operations
pub const NUM_AGGREGATE_OPERATIONS: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Aggregate operations supported by the physical layer
pub enum AggregateOperation {
    /// List of all present values
    MakeList,
    /// List of all present values in rows passing a predicate
    MakeListIf,
    /// List of all values, absent ones included
    MakeListWithNulls,
    /// Set of all present values
    MakeSet,
    /// Set of all present values in rows passing a predicate
    MakeSetIf,
    /// Value(s) of a single row
    TakeAny,
    /// Value of the first row passing a predicate
    TakeAnyIf,
    /// Row with the greatest value of an expression
    ArgMax,
    /// Row with the least value of an expression
    ArgMin,
}

/// All [AggregateOperation]s, in the order they appear in the enum.
pub const AGGREGATE_OPERATIONS: [AggregateOperation; NUM_AGGREGATE_OPERATIONS] = [
    AggregateOperation::MakeList,
    AggregateOperation::MakeListIf,
    AggregateOperation::MakeListWithNulls,
    AggregateOperation::MakeSet,
    AggregateOperation::MakeSetIf,
    AggregateOperation::TakeAny,
    AggregateOperation::TakeAnyIf,
    AggregateOperation::ArgMax,
    AggregateOperation::ArgMin,
];

impl AggregateOperation {
    /// Returns the name under which the aggregate is called in queries.
    pub fn name(&self) -> &'static str {
        match self {
            AggregateOperation::MakeList => "make_list",
            AggregateOperation::MakeListIf => "make_list_if",
            AggregateOperation::MakeListWithNulls => "make_list_with_nulls",
            AggregateOperation::MakeSet => "make_set",
            AggregateOperation::MakeSetIf => "make_set_if",
            AggregateOperation::TakeAny => "take_any",
            AggregateOperation::TakeAnyIf => "take_anyif",
            AggregateOperation::ArgMax => "arg_max",
            AggregateOperation::ArgMin => "arg_min",
        }
    }

    /// Returns the number of argument columns an invocation may receive.
    pub fn argument_count(&self) -> RangeInclusive<usize> {
        match self {
            AggregateOperation::MakeList | AggregateOperation::MakeSet => 1..=2,
            AggregateOperation::MakeListIf | AggregateOperation::MakeSetIf => 2..=3,
            AggregateOperation::MakeListWithNulls => 1..=1,
            AggregateOperation::TakeAnyIf => 2..=2,
            AggregateOperation::TakeAny
            | AggregateOperation::ArgMax
            | AggregateOperation::ArgMin => 1..=usize::MAX,
        }
    }

    /// Returns whether the aggregate builds a list or set.
    pub fn is_collection(&self) -> bool {
        self.static_output_type().is_some()
    }

    /// Returns whether the aggregate operation always produces an output of the same type.
    /// If [`Some`] is returned, this is the static output type of the aggregate operation.
    /// If [`None`] is returned, the output types are those of the argument columns.
    pub fn static_output_type(&self) -> Option<ScalarTypeName> {
        match self {
            AggregateOperation::MakeList
            | AggregateOperation::MakeListIf
            | AggregateOperation::MakeListWithNulls
            | AggregateOperation::MakeSet
            | AggregateOperation::MakeSetIf => Some(ScalarTypeName::Dynamic),
            AggregateOperation::TakeAny
            | AggregateOperation::TakeAnyIf
            | AggregateOperation::ArgMax
            | AggregateOperation::ArgMin => None,
        }
    }
}

impl Display for AggregateOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AggregateOperation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AGGREGATE_OPERATIONS
            .into_iter()
            .find(|operation| operation.name() == s)
            .ok_or_else(|| Error::UnknownAggregate(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::{AggregateOperation, AGGREGATE_OPERATIONS};
    use crate::{datatypes::ScalarTypeName, error::Error};

    #[test]
    fn names_parse_back() {
        for operation in AGGREGATE_OPERATIONS {
            assert_eq!(operation.to_string().parse(), Ok(operation));
        }

        assert_eq!(
            "make_bag".parse::<AggregateOperation>(),
            Err(Error::UnknownAggregate("make_bag".to_string()))
        );
    }

    #[test]
    fn collections_are_dynamic() {
        assert_eq!(
            AggregateOperation::MakeSetIf.static_output_type(),
            Some(ScalarTypeName::Dynamic)
        );
        assert!(AggregateOperation::MakeListWithNulls.is_collection());
        assert!(!AggregateOperation::ArgMin.is_collection());
        assert!(!AggregateOperation::TakeAnyIf.is_collection());
    }
}
