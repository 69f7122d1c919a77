//! This module defines [ScalarTypeName],
//! the runtime descriptor of the scalar types a column can hold.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Number of scalar types
pub const NUM_SCALAR_TYPES: usize = 10;

/// Descriptors to refer to the possible scalar types at runtime.
///
/// (De)serializes to the type names used by the query language.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScalarTypeName {
    /// Data type [`i32`]
    #[serde(rename = "int")]
    Int32,
    /// Data type [`i64`]
    #[serde(rename = "long")]
    Int64,
    /// Data type [`super::Double`]
    #[serde(rename = "real")]
    Double,
    /// Data type [`rust_decimal::Decimal`]
    #[serde(rename = "decimal")]
    Decimal,
    /// Data type [`bool`]
    #[serde(rename = "bool")]
    Bool,
    /// Data type [`chrono::DateTime<chrono::Utc>`]
    #[serde(rename = "datetime")]
    DateTime,
    /// Data type [`chrono::TimeDelta`]
    #[serde(rename = "timespan")]
    TimeSpan,
    /// Data type [`uuid::Uuid`]
    #[serde(rename = "guid")]
    Guid,
    /// Data type [`String`]
    #[serde(rename = "string")]
    String,
    /// Data type [`serde_json::Value`]
    #[serde(rename = "dynamic")]
    Dynamic,
}

/// A list of all [ScalarTypeName]s,
/// in the order they appear in the enum.
pub const SCALAR_TYPES: [ScalarTypeName; NUM_SCALAR_TYPES] = [
    ScalarTypeName::Int32,
    ScalarTypeName::Int64,
    ScalarTypeName::Double,
    ScalarTypeName::Decimal,
    ScalarTypeName::Bool,
    ScalarTypeName::DateTime,
    ScalarTypeName::TimeSpan,
    ScalarTypeName::Guid,
    ScalarTypeName::String,
    ScalarTypeName::Dynamic,
];

impl ScalarTypeName {
    /// Returns the name of this type in the query language.
    pub fn name(&self) -> &'static str {
        match self {
            ScalarTypeName::Int32 => "int",
            ScalarTypeName::Int64 => "long",
            ScalarTypeName::Double => "real",
            ScalarTypeName::Decimal => "decimal",
            ScalarTypeName::Bool => "bool",
            ScalarTypeName::DateTime => "datetime",
            ScalarTypeName::TimeSpan => "timespan",
            ScalarTypeName::Guid => "guid",
            ScalarTypeName::String => "string",
            ScalarTypeName::Dynamic => "dynamic",
        }
    }

    /// Returns whether values of this type have a total order.
    pub fn is_ordered(&self) -> bool {
        !matches!(self, ScalarTypeName::Dynamic)
    }
}

impl Display for ScalarTypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarTypeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SCALAR_TYPES
            .iter()
            .find(|type_name| type_name.name() == s)
            .copied()
            .ok_or_else(|| Error::UnknownScalarType(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::{ScalarTypeName, SCALAR_TYPES};
    use test_log::test;

    #[test]
    fn names_round_trip_through_from_str() {
        for type_name in SCALAR_TYPES {
            assert_eq!(type_name.name().parse::<ScalarTypeName>(), Ok(type_name));
        }

        assert!("integer".parse::<ScalarTypeName>().is_err());
    }

    #[test]
    fn signatures_load_from_json() {
        let signature: Vec<ScalarTypeName> =
            serde_json::from_str(r#"["long", "bool", "timespan"]"#).unwrap();

        assert_eq!(
            signature,
            vec![
                ScalarTypeName::Int64,
                ScalarTypeName::Bool,
                ScalarTypeName::TimeSpan
            ]
        );
        assert_eq!(
            serde_json::to_string(&ScalarTypeName::Dynamic).unwrap(),
            r#""dynamic""#
        );
    }
}
