//! Returns the value(s) of a single row.

use std::marker::PhantomData;

use crate::{
    aggregates::{
        aggregate::{AggregateImpl, AggregateResult},
        arguments::{check_argument_count, check_row_counts, predicate_passes},
        operation::AggregateOperation,
    },
    columnar::{argument::ColumnarArgument, chunk::Chunk, column::Column, column_t::ColumnT},
    datatypes::{ScalarType, TypedScalar},
    error::Error,
};

/// Implements `take_any` over any number of columns of any type.
///
/// With a single column, the first row holding a present, non-empty value is chosen.
/// With several columns, the values of row 0 are returned together.
/// Without rows, every value is absent.
#[derive(Debug)]
pub(crate) struct TakeAnyProcessor {}

impl TakeAnyProcessor {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

fn first_present(column: &ColumnT) -> TypedScalar {
    (0..column.len())
        .map(|index| column.get(index))
        .find(|value| value.value().is_some_and(|value| !value.is_absent()))
        .unwrap_or_else(|| TypedScalar::absent(column.get_type()))
}

impl AggregateImpl for TakeAnyProcessor {
    fn operation(&self) -> AggregateOperation {
        AggregateOperation::TakeAny
    }

    fn invoke(
        &self,
        chunk: &Chunk,
        arguments: &[ColumnarArgument],
    ) -> Result<AggregateResult, Error> {
        check_argument_count(self.operation(), arguments)?;
        check_row_counts(chunk, arguments)?;

        log::trace!(
            "{} of {} columns over {} rows",
            self.operation(),
            arguments.len(),
            chunk.row_count()
        );

        if let [argument] = arguments {
            return Ok(AggregateResult::Scalar(first_present(argument.column())));
        }

        let values = arguments
            .iter()
            .map(|argument| {
                if chunk.row_count() > 0 {
                    argument.column().get(0)
                } else {
                    TypedScalar::absent(argument.get_type())
                }
            })
            .collect();

        Ok(AggregateResult::Row(values))
    }
}

/// Implements `take_anyif`, returning the value of the first row whose predicate holds.
#[derive(Debug)]
pub(crate) struct TakeAnyIfProcessor<T> {
    _phantom: PhantomData<T>,
}

impl<T> TakeAnyIfProcessor<T> {
    pub(crate) fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: ScalarType> AggregateImpl for TakeAnyIfProcessor<T> {
    fn operation(&self) -> AggregateOperation {
        AggregateOperation::TakeAnyIf
    }

    fn invoke(
        &self,
        chunk: &Chunk,
        arguments: &[ColumnarArgument],
    ) -> Result<AggregateResult, Error> {
        check_argument_count(self.operation(), arguments)?;
        let values = arguments[0].typed::<T>(0)?;
        let predicate = arguments[1].typed::<bool>(1)?;
        check_row_counts(chunk, arguments)?;

        log::trace!(
            "{}<{}> over {} rows",
            self.operation(),
            T::TYPE_NAME,
            chunk.row_count()
        );

        let value = (0..predicate.len())
            .find(|&index| predicate_passes(predicate.get(index)))
            .and_then(|index| values.get(index))
            .cloned()
            .map(T::into_scalar);

        Ok(AggregateResult::Scalar(TypedScalar::from_option(
            T::TYPE_NAME,
            value,
        )))
    }
}
