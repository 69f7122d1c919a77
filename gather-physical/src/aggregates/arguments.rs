//! Checks and accessors shared by the aggregate implementations

use crate::{
    columnar::{argument::ColumnarArgument, chunk::Chunk, column::Column},
    error::Error,
};

use super::operation::AggregateOperation;

/// Checks that `operation` accepts the number of given `arguments`.
pub(crate) fn check_argument_count(
    operation: AggregateOperation,
    arguments: &[ColumnarArgument],
) -> Result<(), Error> {
    let expected = operation.argument_count();

    if !expected.contains(&arguments.len()) {
        return Err(Error::ArgumentCount {
            operation,
            expected,
            found: arguments.len(),
        });
    }

    Ok(())
}

/// Checks that every argument has exactly as many rows as `chunk`.
pub(crate) fn check_row_counts<'a>(
    chunk: &Chunk,
    arguments: impl IntoIterator<Item = &'a ColumnarArgument> + Clone,
) -> Result<(), Error> {
    if arguments
        .clone()
        .into_iter()
        .all(|argument| argument.row_count() == chunk.row_count())
    {
        return Ok(());
    }

    Err(Error::RowCountMismatch(
        std::iter::once(chunk.row_count())
            .chain(arguments.into_iter().map(ColumnarArgument::row_count))
            .collect(),
    ))
}

/// Returns whether a row passes a predicate.
///
/// Only a present `true` passes; `false` and absent both fail.
#[inline]
pub(crate) fn predicate_passes(value: Option<&bool>) -> bool {
    matches!(value, Some(true))
}

/// Reads the Max-Size cap of a collection aggregate.
///
/// Only row 0 of the argument is consulted.
/// A missing argument, a column without rows and an absent value all mean unbounded.
/// Negative caps act like zero.
pub(crate) fn max_size(argument: Option<&ColumnarArgument>, index: usize) -> Result<usize, Error> {
    let Some(argument) = argument else {
        return Ok(usize::MAX);
    };

    let column = argument.typed::<i64>(index)?;
    if column.is_empty() {
        return Ok(usize::MAX);
    }

    Ok(match column.get(0) {
        None => usize::MAX,
        Some(&cap) if cap < 0 => 0,
        Some(&cap) => usize::try_from(cap).unwrap_or(usize::MAX),
    })
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::{check_argument_count, check_row_counts, max_size, predicate_passes};
    use crate::{
        aggregates::operation::AggregateOperation,
        columnar::{argument::ColumnarArgument, chunk::Chunk},
        datatypes::ScalarTypeName,
        error::Error,
    };

    #[test]
    fn only_present_true_passes() {
        assert!(predicate_passes(Some(&true)));
        assert!(!predicate_passes(Some(&false)));
        assert!(!predicate_passes(None));
    }

    #[test]
    fn caps() {
        assert_eq!(max_size(None, 1), Ok(usize::MAX));
        assert_eq!(
            max_size(Some(&ColumnarArgument::from_values::<i64>(vec![])), 1),
            Ok(usize::MAX)
        );
        assert_eq!(
            max_size(Some(&ColumnarArgument::constant::<i64>(None, 3)), 1),
            Ok(usize::MAX)
        );
        assert_eq!(
            max_size(Some(&ColumnarArgument::constant(Some(2i64), 3)), 1),
            Ok(2)
        );
        assert_eq!(
            max_size(Some(&ColumnarArgument::constant(Some(-4i64), 1)), 1),
            Ok(0)
        );
        assert_eq!(
            max_size(Some(&ColumnarArgument::constant(Some(2i32), 1)), 2),
            Err(Error::ArgumentType {
                index: 2,
                expected: ScalarTypeName::Int64,
                found: ScalarTypeName::Int32
            })
        );
    }

    #[test]
    fn counts() {
        let three = ColumnarArgument::from_values(vec![Some(1i32), Some(2), Some(3)]);
        let two = ColumnarArgument::from_values(vec![Some(true), None]);

        assert_eq!(
            check_argument_count(AggregateOperation::TakeAnyIf, &[three.clone()]),
            Err(Error::ArgumentCount {
                operation: AggregateOperation::TakeAnyIf,
                expected: 2..=2,
                found: 1
            })
        );
        assert_eq!(
            check_row_counts(&Chunk::with_row_count(3), [&three]),
            Ok(())
        );
        assert_eq!(
            check_row_counts(&Chunk::with_row_count(3), [&three, &two]),
            Err(Error::RowCountMismatch(vec![3, 3, 2]))
        );
    }
}
