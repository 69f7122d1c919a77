//! Traits for implementing aggregate operations

use std::fmt::{Debug, Display};

use crate::{
    columnar::{argument::ColumnarArgument, chunk::Chunk},
    datatypes::TypedScalar,
    error::Error,
};

use super::operation::AggregateOperation;

/// A typed implementation of one aggregate operation.
///
/// Implementations carry no per-call state,
/// so a single instance may be invoked concurrently for different groups.
pub trait AggregateImpl: Debug + Send + Sync {
    /// Returns the operation this object implements.
    fn operation(&self) -> AggregateOperation;

    /// Computes the aggregate over all rows of `chunk`.
    ///
    /// `arguments` are the evaluated argument expressions of the call, in call order.
    ///
    /// # Errors
    /// Returns an error if the arguments do not fit the implementation,
    /// i.e. if their number, their types or their row counts are wrong.
    /// Absent or empty data never causes an error.
    fn invoke(&self, chunk: &Chunk, arguments: &[ColumnarArgument])
        -> Result<AggregateResult, Error>;
}

/// Result of invoking an aggregate on one group
#[derive(Clone, Debug, PartialEq)]
pub enum AggregateResult {
    /// A single value
    Scalar(TypedScalar),
    /// A fixed-order tuple of values, one for each argument column
    Row(Vec<TypedScalar>),
}

impl AggregateResult {
    /// Returns all values of this result, in output order.
    pub fn values(&self) -> &[TypedScalar] {
        match self {
            AggregateResult::Scalar(value) => std::slice::from_ref(value),
            AggregateResult::Row(values) => values,
        }
    }

    /// Consumes this result and returns its values.
    pub fn into_values(self) -> Vec<TypedScalar> {
        match self {
            AggregateResult::Scalar(value) => vec![value],
            AggregateResult::Row(values) => values,
        }
    }
}

/// Values are separated by commas, absent values are left empty.
impl Display for AggregateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, value) in self.values().iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }

            write!(f, "{value}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::AggregateResult;
    use crate::datatypes::{Double, ScalarTypeName, ScalarValueT, TypedScalar};

    #[test]
    fn results_render_as_lines() {
        let row = AggregateResult::Row(vec![
            TypedScalar::new(ScalarValueT::Double(Double::new(30.5))),
            TypedScalar::absent(ScalarTypeName::String),
            TypedScalar::new(ScalarValueT::String("Tornado".to_string())),
        ]);

        assert_eq!(row.to_string(), "30.5,,Tornado");
        assert_eq!(row.values().len(), 3);

        let scalar = AggregateResult::Scalar(TypedScalar::new(ScalarValueT::Int64(2)));
        assert_eq!(scalar.to_string(), "2");
        assert_eq!(
            scalar.into_values(),
            vec![TypedScalar::new(ScalarValueT::Int64(2))]
        );
    }
}
