//! Builds a list of the present values of a column.

use std::marker::PhantomData;

use crate::{
    aggregates::{
        aggregate::{AggregateImpl, AggregateResult},
        operation::AggregateOperation,
    },
    columnar::{argument::ColumnarArgument, chunk::Chunk},
    datatypes::{ScalarType, ScalarValueT, TypedScalar},
    error::Error,
};

use super::collection::{CollectionInputs, ListCollector};

/// Implements `make_list` and, if `conditional`, `make_list_if`.
#[derive(Debug)]
pub(crate) struct MakeListProcessor<T> {
    conditional: bool,
    _phantom: PhantomData<T>,
}

impl<T> MakeListProcessor<T> {
    pub(crate) fn new(conditional: bool) -> Self {
        Self {
            conditional,
            _phantom: PhantomData,
        }
    }
}

impl<T: ScalarType> AggregateImpl for MakeListProcessor<T> {
    fn operation(&self) -> AggregateOperation {
        if self.conditional {
            AggregateOperation::MakeListIf
        } else {
            AggregateOperation::MakeList
        }
    }

    fn invoke(
        &self,
        chunk: &Chunk,
        arguments: &[ColumnarArgument],
    ) -> Result<AggregateResult, Error> {
        let inputs =
            CollectionInputs::<T>::new(self.operation(), self.conditional, chunk, arguments)?;
        let list = inputs.collect(ListCollector::default());

        Ok(AggregateResult::Scalar(TypedScalar::new(
            ScalarValueT::Dynamic(list),
        )))
    }
}
