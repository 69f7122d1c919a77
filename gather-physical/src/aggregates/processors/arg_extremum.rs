//! Finds the row with the greatest or least value of an expression
//! and returns it together with the values of the carried columns.

use std::marker::PhantomData;

use crate::{
    aggregates::{
        aggregate::{AggregateImpl, AggregateResult},
        arguments::{check_argument_count, check_row_counts},
        operation::AggregateOperation,
    },
    columnar::{argument::ColumnarArgument, chunk::Chunk},
    comparison::Extremum,
    datatypes::{ScalarType, TypedScalar},
    error::Error,
};

/// Implements `arg_max` and `arg_min`.
///
/// The first argument is the compared expression, all further arguments are carried.
/// Rows with an absent expression value never win,
/// and among equal values the earliest row is kept.
/// A row replaces the running best when [Extremum::improves] holds,
/// the strict form of folding with [crate::comparison::max] or [crate::comparison::min].
#[derive(Debug)]
pub(crate) struct ArgExtremumProcessor<T> {
    extremum: Extremum,
    _phantom: PhantomData<T>,
}

impl<T> ArgExtremumProcessor<T> {
    pub(crate) fn new(extremum: Extremum) -> Self {
        Self {
            extremum,
            _phantom: PhantomData,
        }
    }
}

impl<T: ScalarType + PartialOrd> ArgExtremumProcessor<T> {
    /// Returns the index of the winning row, if any row has a present value.
    fn best_row(&self, arguments: &[ColumnarArgument]) -> Result<Option<usize>, Error> {
        let primary = arguments[0].typed::<T>(0)?;
        let mut best: Option<(usize, &T)> = None;

        for (index, value) in primary.iter().enumerate() {
            let Some(value) = value else {
                continue;
            };

            if best.map_or(true, |(_, current)| self.extremum.improves(value, current)) {
                best = Some((index, value));
            }
        }

        Ok(best.map(|(index, _)| index))
    }
}

impl<T: ScalarType + PartialOrd> AggregateImpl for ArgExtremumProcessor<T> {
    fn operation(&self) -> AggregateOperation {
        match self.extremum {
            Extremum::Max => AggregateOperation::ArgMax,
            Extremum::Min => AggregateOperation::ArgMin,
        }
    }

    fn invoke(
        &self,
        chunk: &Chunk,
        arguments: &[ColumnarArgument],
    ) -> Result<AggregateResult, Error> {
        check_argument_count(self.operation(), arguments)?;
        let best = self.best_row(arguments)?;
        check_row_counts(chunk, arguments)?;

        // all values absent: any row will do
        let row = best.or((chunk.row_count() > 0).then_some(0));

        log::trace!(
            "{}<{}> over {} rows carrying {} columns, picked row {row:?}",
            self.operation(),
            T::TYPE_NAME,
            chunk.row_count(),
            arguments.len() - 1
        );

        let values = arguments
            .iter()
            .map(|argument| match row {
                Some(row) => argument.column().get(row),
                None => TypedScalar::absent(argument.get_type()),
            })
            .collect();

        Ok(AggregateResult::Row(values))
    }
}

#[cfg(test)]
mod test {
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};
    use quickcheck_macros::quickcheck;
    use test_log::test;

    use super::ArgExtremumProcessor;
    use crate::{
        aggregates::aggregate::{AggregateImpl, AggregateResult},
        columnar::{argument::ColumnarArgument, chunk::Chunk},
        comparison::Extremum,
        datatypes::{ScalarTypeName, ScalarValueT, TypedScalar},
    };

    fn label(value: &str) -> TypedScalar {
        TypedScalar::new(ScalarValueT::String(value.to_string()))
    }

    #[test]
    fn earliest_of_equal_rows_wins() {
        let primary =
            ColumnarArgument::from_values(vec![Some(1i32), Some(3), None, Some(3), Some(1)]);
        let labels = ColumnarArgument::from_values(
            ["a", "b", "c", "d", "e"]
                .into_iter()
                .map(|label| Some(label.to_string()))
                .collect(),
        );
        let chunk = Chunk::with_row_count(5);

        assert_eq!(
            ArgExtremumProcessor::<i32>::new(Extremum::Max)
                .invoke(&chunk, &[primary.clone(), labels.clone()]),
            Ok(AggregateResult::Row(vec![
                TypedScalar::new(ScalarValueT::Int32(3)),
                label("b")
            ]))
        );
        assert_eq!(
            ArgExtremumProcessor::<i32>::new(Extremum::Min).invoke(&chunk, &[primary, labels]),
            Ok(AggregateResult::Row(vec![
                TypedScalar::new(ScalarValueT::Int32(1)),
                label("a")
            ]))
        );
    }

    #[test]
    fn all_absent_still_emits_a_row() {
        let primary = ColumnarArgument::from_values::<i64>(vec![None, None]);
        let labels = ColumnarArgument::from_values(vec![Some("x".to_string()), None]);

        assert_eq!(
            ArgExtremumProcessor::<i64>::new(Extremum::Max)
                .invoke(&Chunk::with_row_count(2), &[primary, labels]),
            Ok(AggregateResult::Row(vec![
                TypedScalar::absent(ScalarTypeName::Int64),
                label("x")
            ]))
        );
    }

    #[test]
    fn no_rows_give_absent_values() {
        let primary = ColumnarArgument::from_values::<String>(vec![]);
        let carried = ColumnarArgument::from_values::<bool>(vec![]);

        assert_eq!(
            ArgExtremumProcessor::<String>::new(Extremum::Min)
                .invoke(&Chunk::with_row_count(0), &[primary, carried]),
            Ok(AggregateResult::Row(vec![
                TypedScalar::absent(ScalarTypeName::String),
                TypedScalar::absent(ScalarTypeName::Bool)
            ]))
        );
    }

    #[quickcheck]
    fn winner_is_extremal_present_value(values: Vec<Option<i64>>) -> bool {
        let chunk = Chunk::with_row_count(values.len());
        let expected = values.iter().flatten().max().copied();
        let primary = ColumnarArgument::from_values(values);

        match ArgExtremumProcessor::<i64>::new(Extremum::Max).invoke(&chunk, &[primary]) {
            Ok(AggregateResult::Row(row)) if row.len() == 1 => match (row[0].value(), expected) {
                (Some(ScalarValueT::Int64(found)), Some(expected)) => *found == expected,
                (None, None) => true,
                _ => false,
            },
            _ => false,
        }
    }

    #[test]
    fn instants_and_durations() {
        let early = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 3, 1, 17, 30, 0).unwrap();
        let instants =
            ColumnarArgument::from_values(vec![None, Some(late), Some(early), Some(late), None]);
        let durations = ColumnarArgument::from_values(vec![
            Some(TimeDelta::minutes(5)),
            None,
            Some(TimeDelta::minutes(-5)),
            Some(TimeDelta::minutes(5)),
            Some(TimeDelta::zero()),
        ]);
        let labels = ColumnarArgument::from_values(
            ["a", "b", "c", "d", "e"]
                .into_iter()
                .map(|label| Some(label.to_string()))
                .collect(),
        );
        let chunk = Chunk::with_row_count(5);

        assert_eq!(
            ArgExtremumProcessor::<DateTime<Utc>>::new(Extremum::Max)
                .invoke(&chunk, &[instants.clone(), labels.clone()]),
            Ok(AggregateResult::Row(vec![
                TypedScalar::new(ScalarValueT::DateTime(late)),
                label("b")
            ]))
        );
        assert_eq!(
            ArgExtremumProcessor::<DateTime<Utc>>::new(Extremum::Min)
                .invoke(&chunk, &[instants.clone(), durations.clone()]),
            Ok(AggregateResult::Row(vec![
                TypedScalar::new(ScalarValueT::DateTime(early)),
                TypedScalar::new(ScalarValueT::TimeSpan(TimeDelta::minutes(-5)))
            ]))
        );
        assert_eq!(
            ArgExtremumProcessor::<TimeDelta>::new(Extremum::Max)
                .invoke(&chunk, &[durations.clone(), labels]),
            Ok(AggregateResult::Row(vec![
                TypedScalar::new(ScalarValueT::TimeSpan(TimeDelta::minutes(5))),
                label("a")
            ]))
        );
        assert_eq!(
            ArgExtremumProcessor::<TimeDelta>::new(Extremum::Min)
                .invoke(&chunk, &[durations, instants]),
            Ok(AggregateResult::Row(vec![
                TypedScalar::new(ScalarValueT::TimeSpan(TimeDelta::minutes(-5))),
                TypedScalar::new(ScalarValueT::DateTime(early))
            ]))
        );
    }
}
