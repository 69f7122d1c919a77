//! This module defines [ScalarValueT], a single value of any scalar type,
//! and [TypedScalar], a possibly absent value together with its type.

use std::fmt::Display;

use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use super::{
    timespan::{format_datetime, format_timespan},
    Double, ScalarType, ScalarTypeName,
};

/// Enum for present values of all supported scalar types.
/// This should not be used to represent large numbers of values,
/// due to the overhead for each value, but it is the
/// way results leave an aggregate.
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarValueT {
    /// A value of type [ScalarTypeName::Int32]
    Int32(i32),
    /// A value of type [ScalarTypeName::Int64]
    Int64(i64),
    /// A value of type [ScalarTypeName::Double]
    Double(Double),
    /// A value of type [ScalarTypeName::Decimal]
    Decimal(Decimal),
    /// A value of type [ScalarTypeName::Bool]
    Bool(bool),
    /// A value of type [ScalarTypeName::DateTime]
    DateTime(DateTime<Utc>),
    /// A value of type [ScalarTypeName::TimeSpan]
    TimeSpan(TimeDelta),
    /// A value of type [ScalarTypeName::Guid]
    Guid(Uuid),
    /// A value of type [ScalarTypeName::String]
    String(String),
    /// A value of type [ScalarTypeName::Dynamic]
    Dynamic(JsonValue),
}

impl ScalarValueT {
    /// Returns the type of this value.
    pub fn get_type(&self) -> ScalarTypeName {
        match self {
            Self::Int32(_) => ScalarTypeName::Int32,
            Self::Int64(_) => ScalarTypeName::Int64,
            Self::Double(_) => ScalarTypeName::Double,
            Self::Decimal(_) => ScalarTypeName::Decimal,
            Self::Bool(_) => ScalarTypeName::Bool,
            Self::DateTime(_) => ScalarTypeName::DateTime,
            Self::TimeSpan(_) => ScalarTypeName::TimeSpan,
            Self::Guid(_) => ScalarTypeName::Guid,
            Self::String(_) => ScalarTypeName::String,
            Self::Dynamic(_) => ScalarTypeName::Dynamic,
        }
    }

    /// Returns whether this value counts as absent for collection building and `take_any`,
    /// as decided by [ScalarType::is_absent] for its type.
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Int32(value) => value.is_absent(),
            Self::Int64(value) => value.is_absent(),
            Self::Double(value) => value.is_absent(),
            Self::Decimal(value) => value.is_absent(),
            Self::Bool(value) => value.is_absent(),
            Self::DateTime(value) => value.is_absent(),
            Self::TimeSpan(value) => value.is_absent(),
            Self::Guid(value) => value.is_absent(),
            Self::String(value) => value.is_absent(),
            Self::Dynamic(value) => value.is_absent(),
        }
    }
}

impl Display for ScalarValueT {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int32(value) => write!(f, "{value}"),
            Self::Int64(value) => write!(f, "{value}"),
            Self::Double(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::DateTime(value) => f.write_str(&format_datetime(value)),
            Self::TimeSpan(value) => f.write_str(&format_timespan(value)),
            Self::Guid(value) => write!(f, "{}", value.hyphenated()),
            Self::String(value) => f.write_str(value),
            Self::Dynamic(value) => write!(f, "{value}"),
        }
    }
}

/// A value-or-absent of a known scalar type.
///
/// Absent values keep their type,
/// so that a driver can still build a typed output column from them.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedScalar {
    type_name: ScalarTypeName,
    value: Option<ScalarValueT>,
}

impl TypedScalar {
    /// Create a present value.
    pub fn new(value: ScalarValueT) -> Self {
        Self {
            type_name: value.get_type(),
            value: Some(value),
        }
    }

    /// Create an absent value of the given type.
    pub fn absent(type_name: ScalarTypeName) -> Self {
        Self {
            type_name,
            value: None,
        }
    }

    /// Create a value of the given type from an optional value.
    pub(crate) fn from_option(type_name: ScalarTypeName, value: Option<ScalarValueT>) -> Self {
        debug_assert!(value
            .as_ref()
            .map_or(true, |value| value.get_type() == type_name));

        Self { type_name, value }
    }

    /// Return the type of this value.
    pub fn type_name(&self) -> ScalarTypeName {
        self.type_name
    }

    /// Return the contained value, or `None` if it is absent.
    pub fn value(&self) -> Option<&ScalarValueT> {
        self.value.as_ref()
    }

    /// Consume this object and return the contained value.
    pub fn into_value(self) -> Option<ScalarValueT> {
        self.value
    }

    /// Return `true` if there is no value.
    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }
}

impl From<ScalarValueT> for TypedScalar {
    fn from(value: ScalarValueT) -> Self {
        Self::new(value)
    }
}

/// Absent values are written as the empty string.
impl Display for TypedScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{value}"),
            None => Ok(()),
        }
    }
}
