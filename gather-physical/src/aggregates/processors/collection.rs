//! Scan shared by the list and set building aggregates

use serde_json::Value as JsonValue;

use crate::{
    aggregates::{
        arguments::{check_argument_count, check_row_counts, max_size, predicate_passes},
        operation::AggregateOperation,
    },
    columnar::{
        argument::ColumnarArgument,
        chunk::Chunk,
        column::{Column, ColumnEnum},
    },
    datatypes::ScalarType,
    error::Error,
};

/// Receives the values selected by [collect_values].
pub(crate) trait Collector<T: ScalarType> {
    /// Adds a present value.
    fn insert(&mut self, value: &T);

    /// Returns the number of elements collected so far.
    fn count(&self) -> usize;

    /// Encodes the collected elements as a JSON array.
    fn finish(self) -> JsonValue;
}

/// Arguments of a collection aggregate after validation
#[derive(Debug)]
pub(crate) struct CollectionInputs<'a, T> {
    pub(crate) values: &'a ColumnEnum<T>,
    pub(crate) predicate: Option<&'a ColumnEnum<bool>>,
    pub(crate) max_size: usize,
}

impl<'a, T: ScalarType> CollectionInputs<'a, T> {
    /// Validates the arguments `(value, [predicate], [max_size])`.
    ///
    /// The predicate is expected iff `conditional` is set.
    pub(crate) fn new(
        operation: AggregateOperation,
        conditional: bool,
        chunk: &Chunk,
        arguments: &'a [ColumnarArgument],
    ) -> Result<Self, Error> {
        check_argument_count(operation, arguments)?;

        let values = arguments[0].typed::<T>(0)?;
        let (predicate, cap_index) = if conditional {
            (Some(arguments[1].typed::<bool>(1)?), 2)
        } else {
            (None, 1)
        };

        check_row_counts(chunk, &arguments[..cap_index])?;
        let max_size = max_size(arguments.get(cap_index), cap_index)?;

        log::trace!(
            "{operation}<{}> over {} rows, max size {max_size}",
            T::TYPE_NAME,
            chunk.row_count()
        );

        Ok(Self {
            values,
            predicate,
            max_size,
        })
    }

    /// Feeds the selected values into `collector` and returns its encoding.
    pub(crate) fn collect<C: Collector<T>>(&self, collector: C) -> JsonValue {
        collect_values(self.values, self.predicate, self.max_size, collector)
    }
}

/// Scans `values` in row order and inserts every present value into `collector`.
///
/// Rows failing `predicate` are skipped, as are values that count as absent.
/// The scan stops as soon as `collector` holds `max_size` elements.
pub(crate) fn collect_values<T, C>(
    values: &ColumnEnum<T>,
    predicate: Option<&ColumnEnum<bool>>,
    max_size: usize,
    mut collector: C,
) -> JsonValue
where
    T: ScalarType,
    C: Collector<T>,
{
    if max_size == 0 {
        return collector.finish();
    }

    for index in 0..values.len() {
        if let Some(predicate) = predicate {
            if !predicate_passes(predicate.get(index)) {
                continue;
            }
        }

        let Some(value) = values.get(index) else {
            continue;
        };
        if value.is_absent() {
            continue;
        }

        collector.insert(value);
        if collector.count() >= max_size {
            break;
        }
    }

    collector.finish()
}

/// Collects values into a list, keeping duplicates and row order.
#[derive(Debug, Default)]
pub(crate) struct ListCollector {
    values: Vec<JsonValue>,
}

impl<T: ScalarType> Collector<T> for ListCollector {
    fn insert(&mut self, value: &T) {
        self.values.push(value.to_json());
    }

    fn count(&self) -> usize {
        self.values.len()
    }

    fn finish(self) -> JsonValue {
        JsonValue::Array(self.values)
    }
}
