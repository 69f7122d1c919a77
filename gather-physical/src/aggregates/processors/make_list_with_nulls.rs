//! Lists every value of a column, absent ones as `null`.

use std::marker::PhantomData;

use serde_json::Value as JsonValue;

use crate::{
    aggregates::{
        aggregate::{AggregateImpl, AggregateResult},
        arguments::{check_argument_count, check_row_counts},
        operation::AggregateOperation,
    },
    columnar::{argument::ColumnarArgument, chunk::Chunk},
    datatypes::{ScalarType, ScalarValueT, TypedScalar},
    error::Error,
};

/// Implements `make_list_with_nulls`.
///
/// The output always has one entry per row.
#[derive(Debug)]
pub(crate) struct MakeListWithNullsProcessor<T> {
    _phantom: PhantomData<T>,
}

impl<T> MakeListWithNullsProcessor<T> {
    pub(crate) fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: ScalarType> AggregateImpl for MakeListWithNullsProcessor<T> {
    fn operation(&self) -> AggregateOperation {
        AggregateOperation::MakeListWithNulls
    }

    fn invoke(
        &self,
        chunk: &Chunk,
        arguments: &[ColumnarArgument],
    ) -> Result<AggregateResult, Error> {
        check_argument_count(self.operation(), arguments)?;
        let values = arguments[0].typed::<T>(0)?;
        check_row_counts(chunk, arguments)?;

        log::trace!(
            "{}<{}> over {} rows",
            self.operation(),
            T::TYPE_NAME,
            chunk.row_count()
        );

        let list = values
            .iter()
            .map(|value| value.map_or(JsonValue::Null, T::to_json))
            .collect();

        Ok(AggregateResult::Scalar(TypedScalar::new(
            ScalarValueT::Dynamic(JsonValue::Array(list)),
        )))
    }
}
