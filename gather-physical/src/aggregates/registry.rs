//! This module defines [AggregateRegistry],
//! the table of all typed overloads of the built-in aggregates.

use std::fmt::Display;

use chrono::{DateTime, TimeDelta, Utc};
use hashbrown::HashMap;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::{
    columnar::{argument::ColumnarArgument, chunk::Chunk},
    comparison::Extremum,
    datatypes::{Double, ScalarType, ScalarTypeName},
    error::Error,
};

use super::{
    aggregate::{AggregateImpl, AggregateResult},
    operation::AggregateOperation,
    processors::{
        arg_extremum::ArgExtremumProcessor,
        make_list::MakeListProcessor,
        make_list_with_nulls::MakeListWithNullsProcessor,
        make_set::MakeSetProcessor,
        take_any::{TakeAnyIfProcessor, TakeAnyProcessor},
    },
};

static REGISTRY: Lazy<AggregateRegistry> = Lazy::new(AggregateRegistry::new);

/// Parameter types of an aggregate overload
///
/// A signature consists of fixed leading parameters,
/// optionally followed by a variadic tail of columns of any type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    parameters: Vec<ScalarTypeName>,
    variadic: Option<usize>,
}

impl Signature {
    /// Create a signature accepting exactly the given parameter types.
    pub fn fixed(parameters: Vec<ScalarTypeName>) -> Self {
        Self {
            parameters,
            variadic: None,
        }
    }

    /// Create a signature accepting the given parameter types
    /// followed by at least `minimum` further columns of any type.
    pub fn variadic(parameters: Vec<ScalarTypeName>, minimum: usize) -> Self {
        Self {
            parameters,
            variadic: Some(minimum),
        }
    }

    /// Return the fixed parameter types.
    pub fn parameters(&self) -> &[ScalarTypeName] {
        &self.parameters
    }

    /// Return whether arguments of the given types match this signature exactly.
    pub fn accepts(&self, argument_types: &[ScalarTypeName]) -> bool {
        match self.variadic {
            None => self.parameters == argument_types,
            Some(minimum) => {
                argument_types.len() >= self.parameters.len() + minimum
                    && argument_types.starts_with(&self.parameters)
            }
        }
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries: Vec<String> = self.parameters.iter().map(|t| t.to_string()).collect();
        if self.variadic.is_some() {
            entries.push("...".to_string());
        }

        write!(f, "({})", entries.join(", "))
    }
}

/// One typed implementation of an aggregate operation
#[derive(Debug)]
pub struct AggregateOverload {
    operation: AggregateOperation,
    signature: Signature,
    implementation: Box<dyn AggregateImpl>,
}

impl AggregateOverload {
    /// Return the implemented operation.
    pub fn operation(&self) -> AggregateOperation {
        self.operation
    }

    /// Return the parameter types of this overload.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Return the implementation.
    pub fn implementation(&self) -> &dyn AggregateImpl {
        self.implementation.as_ref()
    }

    /// Invoke the implementation on one group.
    ///
    /// # Errors
    /// Returns an error if the arguments violate the preconditions of the implementation.
    pub fn invoke(
        &self,
        chunk: &Chunk,
        arguments: &[ColumnarArgument],
    ) -> Result<AggregateResult, Error> {
        self.implementation.invoke(chunk, arguments)
    }
}

/// Read-only table associating every built-in aggregate with its typed overloads
///
/// The process-wide instance is built on first use by [AggregateRegistry::global]
/// and never changes afterwards.
#[derive(Debug)]
pub struct AggregateRegistry {
    overloads: HashMap<AggregateOperation, Vec<AggregateOverload>>,
}

impl AggregateRegistry {
    /// Create a registry containing all built-in overloads.
    fn new() -> Self {
        let mut registry = Self {
            overloads: HashMap::new(),
        };

        registry.register_collections::<i32>();
        registry.register_collections::<i64>();
        registry.register_collections::<Double>();
        registry.register_collections::<Decimal>();
        registry.register_collections::<bool>();
        registry.register_collections::<DateTime<Utc>>();
        registry.register_collections::<TimeDelta>();
        registry.register_collections::<Uuid>();
        registry.register_collections::<String>();
        registry.register_collections::<JsonValue>();

        registry.register_extrema::<i32>();
        registry.register_extrema::<i64>();
        registry.register_extrema::<Double>();
        registry.register_extrema::<Decimal>();
        registry.register_extrema::<bool>();
        registry.register_extrema::<DateTime<Utc>>();
        registry.register_extrema::<TimeDelta>();
        registry.register_extrema::<Uuid>();
        registry.register_extrema::<String>();

        registry.register(
            Signature::variadic(Vec::new(), 1),
            Box::new(TakeAnyProcessor::new()),
        );

        log::debug!(
            "registered {} overloads of {} aggregates",
            registry.len(),
            registry.overloads.len()
        );

        registry
    }

    /// Return the process-wide registry of built-in aggregates.
    pub fn global() -> &'static AggregateRegistry {
        &REGISTRY
    }

    fn register(&mut self, signature: Signature, implementation: Box<dyn AggregateImpl>) {
        let operation = implementation.operation();

        self.overloads
            .entry(operation)
            .or_default()
            .push(AggregateOverload {
                operation,
                signature,
                implementation,
            });
    }

    /// Registers the aggregates that accept values of every type.
    fn register_collections<T: ScalarType>(&mut self) {
        use ScalarTypeName::{Bool, Int64};
        let value = T::TYPE_NAME;

        for conditional in [false, true] {
            let leading = if conditional {
                vec![value, Bool]
            } else {
                vec![value]
            };
            let with_cap = [leading.clone(), vec![Int64]].concat();

            self.register(
                Signature::fixed(leading.clone()),
                Box::new(MakeListProcessor::<T>::new(conditional)),
            );
            self.register(
                Signature::fixed(with_cap.clone()),
                Box::new(MakeListProcessor::<T>::new(conditional)),
            );
            self.register(
                Signature::fixed(leading),
                Box::new(MakeSetProcessor::<T>::new(conditional)),
            );
            self.register(
                Signature::fixed(with_cap),
                Box::new(MakeSetProcessor::<T>::new(conditional)),
            );
        }

        self.register(
            Signature::fixed(vec![value]),
            Box::new(MakeListWithNullsProcessor::<T>::new()),
        );
        self.register(
            Signature::fixed(vec![value, Bool]),
            Box::new(TakeAnyIfProcessor::<T>::new()),
        );
    }

    /// Registers the aggregates that need an order on the values.
    fn register_extrema<T: ScalarType + PartialOrd>(&mut self) {
        debug_assert!(T::TYPE_NAME.is_ordered());

        for extremum in [Extremum::Max, Extremum::Min] {
            self.register(
                Signature::variadic(vec![T::TYPE_NAME], 0),
                Box::new(ArgExtremumProcessor::<T>::new(extremum)),
            );
        }
    }

    /// Return the overload of the aggregate called `name`
    /// whose signature matches the given argument types.
    pub fn lookup(
        &self,
        name: &str,
        argument_types: &[ScalarTypeName],
    ) -> Option<&AggregateOverload> {
        let operation = name.parse().ok()?;
        self.lookup_operation(operation, argument_types)
    }

    /// Return the overload of `operation` whose signature matches the given argument types.
    pub fn lookup_operation(
        &self,
        operation: AggregateOperation,
        argument_types: &[ScalarTypeName],
    ) -> Option<&AggregateOverload> {
        self.overloads(operation)
            .iter()
            .find(|overload| overload.signature.accepts(argument_types))
    }

    /// Return all overloads of `operation`.
    pub fn overloads(&self, operation: AggregateOperation) -> &[AggregateOverload] {
        self.overloads
            .get(&operation)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Return the total number of overloads.
    pub fn len(&self) -> usize {
        self.overloads.values().map(Vec::len).sum()
    }

    /// Return whether the registry has no overloads.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use quickcheck_macros::quickcheck;
    use test_log::test;

    use super::{AggregateRegistry, Signature};
    use crate::{
        aggregates::operation::{AggregateOperation, AGGREGATE_OPERATIONS},
        columnar::{argument::ColumnarArgument, chunk::Chunk},
        datatypes::{
            scalar_type_name::SCALAR_TYPES,
            ScalarTypeName::{self, Bool, Dynamic, Guid, Int32, Int64, String},
        },
    };

    #[test]
    fn every_operation_is_registered() {
        let registry = AggregateRegistry::global();

        for operation in AGGREGATE_OPERATIONS {
            assert!(!registry.overloads(operation).is_empty(), "{operation}");

            for overload in registry.overloads(operation) {
                assert_eq!(overload.operation(), operation);
                assert_eq!(overload.implementation().operation(), operation);
            }
        }

        assert!(std::ptr::eq(registry, AggregateRegistry::global()));
    }

    #[test]
    fn collections_accept_every_type() {
        let registry = AggregateRegistry::global();

        for type_name in SCALAR_TYPES {
            for (name, arguments) in [
                ("make_list", vec![type_name]),
                ("make_list", vec![type_name, Int64]),
                ("make_list_if", vec![type_name, Bool]),
                ("make_list_if", vec![type_name, Bool, Int64]),
                ("make_list_with_nulls", vec![type_name]),
                ("make_set", vec![type_name, Int64]),
                ("make_set_if", vec![type_name, Bool, Int64]),
                ("take_anyif", vec![type_name, Bool]),
            ] {
                assert!(
                    registry.lookup(name, &arguments).is_some(),
                    "{name}{arguments:?}"
                );
            }
        }

        assert!(registry.lookup("make_list", &[Int32, Int32]).is_none());
        assert!(registry.lookup("make_list_if", &[Int32]).is_none());
        assert!(registry.lookup("make_bag", &[Int32]).is_none());
    }

    #[test]
    fn extrema_need_an_order() {
        let registry = AggregateRegistry::global();

        let overload = registry
            .lookup("arg_min", &[Guid, String, Dynamic])
            .unwrap();
        assert_eq!(overload.operation(), AggregateOperation::ArgMin);
        assert_eq!(overload.signature(), &Signature::variadic(vec![Guid], 0));
        assert!(registry.lookup("arg_max", &[Guid]).is_some());
        assert!(registry.lookup("arg_max", &[Dynamic, Int32]).is_none());
        assert!(registry.lookup("arg_max", &[]).is_none());
    }

    #[test]
    fn extrema_exist_for_ordered_types() {
        let registry = AggregateRegistry::global();

        for type_name in SCALAR_TYPES {
            for name in ["arg_max", "arg_min"] {
                assert_eq!(
                    registry.lookup(name, &[type_name, Int32]).is_some(),
                    type_name.is_ordered(),
                    "{name}({type_name}, int)"
                );
            }
        }
    }

    #[test]
    fn take_any_needs_a_column() {
        let registry = AggregateRegistry::global();

        assert!(registry.lookup("take_any", &[Dynamic]).is_some());
        assert!(registry.lookup("take_any", &[Int32, String, Bool]).is_some());
        assert!(registry.lookup("take_any", &[]).is_none());
    }

    #[test]
    fn signatures_display() {
        assert_eq!(
            Signature::fixed(vec![Int32, Bool, Int64]).to_string(),
            "(int, bool, long)"
        );
        assert_eq!(Signature::variadic(vec![], 1).to_string(), "(...)");
    }

    #[quickcheck]
    fn invocations_are_idempotent(values: Vec<Option<i32>>, predicate: Vec<bool>, cap: u8) -> bool {
        let registry = AggregateRegistry::global();
        let chunk = Chunk::with_row_count(values.len());
        let predicate: Vec<Option<bool>> = (0..values.len())
            .map(|index| predicate.get(index).copied())
            .collect();

        let values = ColumnarArgument::from_values(values);
        let predicate = ColumnarArgument::from_values(predicate);
        let cap = ColumnarArgument::constant(Some(i64::from(cap)), 1);

        let calls: [(&str, Vec<ColumnarArgument>); 6] = [
            ("make_list", vec![values.clone(), cap.clone()]),
            ("make_set_if", vec![values.clone(), predicate.clone(), cap]),
            ("make_list_with_nulls", vec![values.clone()]),
            ("take_anyif", vec![values.clone(), predicate.clone()]),
            ("take_any", vec![values.clone(), predicate]),
            ("arg_max", vec![values]),
        ];

        calls.iter().all(|(name, arguments)| {
            let types: Vec<ScalarTypeName> = arguments.iter().map(|a| a.get_type()).collect();
            let Some(overload) = registry.lookup(name, &types) else {
                return false;
            };

            let first = overload.invoke(&chunk, arguments);
            let second = overload.invoke(&chunk, arguments);
            first.is_ok() && first == second
        })
    }
}
