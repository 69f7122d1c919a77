//! Builds a set of the distinct present values of a column.

use std::marker::PhantomData;

use hashbrown::HashSet;
use serde_json::Value as JsonValue;

use crate::{
    aggregates::{
        aggregate::{AggregateImpl, AggregateResult},
        operation::AggregateOperation,
    },
    columnar::{argument::ColumnarArgument, chunk::Chunk},
    datatypes::{ScalarType, ScalarValueT, TypedScalar},
    error::Error,
};

use super::collection::{CollectionInputs, Collector};

/// Collects distinct values, listed in the order they are first seen.
#[derive(Debug)]
pub(crate) struct SetCollector<T: ScalarType> {
    seen: HashSet<T::SetKey>,
    values: Vec<JsonValue>,
}

impl<T: ScalarType> Default for SetCollector<T> {
    fn default() -> Self {
        Self {
            seen: HashSet::new(),
            values: Vec::new(),
        }
    }
}

impl<T: ScalarType> Collector<T> for SetCollector<T> {
    fn insert(&mut self, value: &T) {
        if self.seen.insert(value.set_key()) {
            self.values.push(value.to_json());
        }
    }

    fn count(&self) -> usize {
        self.values.len()
    }

    fn finish(self) -> JsonValue {
        JsonValue::Array(self.values)
    }
}

/// Implements `make_set` and, if `conditional`, `make_set_if`.
#[derive(Debug)]
pub(crate) struct MakeSetProcessor<T> {
    conditional: bool,
    _phantom: PhantomData<T>,
}

impl<T> MakeSetProcessor<T> {
    pub(crate) fn new(conditional: bool) -> Self {
        Self {
            conditional,
            _phantom: PhantomData,
        }
    }
}

impl<T: ScalarType> AggregateImpl for MakeSetProcessor<T> {
    fn operation(&self) -> AggregateOperation {
        if self.conditional {
            AggregateOperation::MakeSetIf
        } else {
            AggregateOperation::MakeSet
        }
    }

    fn invoke(
        &self,
        chunk: &Chunk,
        arguments: &[ColumnarArgument],
    ) -> Result<AggregateResult, Error> {
        let inputs =
            CollectionInputs::<T>::new(self.operation(), self.conditional, chunk, arguments)?;
        let set = inputs.collect(SetCollector::<T>::default());

        Ok(AggregateResult::Scalar(TypedScalar::new(
            ScalarValueT::Dynamic(set),
        )))
    }
}
