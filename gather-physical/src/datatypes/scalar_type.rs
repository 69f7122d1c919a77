//! This module defines the trait [ScalarType]
//! and provides implementations for all supported types.

use std::{fmt::Debug, hash::Hash};

use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde_json::{Number, Value as JsonValue};
use uuid::Uuid;

use crate::columnar::{column::ColumnEnum, column_t::ColumnT};

use super::{
    timespan::{format_datetime, format_timespan},
    Double, ScalarTypeName, ScalarValueT,
};

/// Trait implemented by all types that appear in a typed column.
///
/// Generic aggregates are written once against this trait
/// and instantiated for every member of [ScalarTypeName].
pub trait ScalarType: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Runtime descriptor of this type
    const TYPE_NAME: ScalarTypeName;

    /// Key under which values are deduplicated in sets
    type SetKey: Hash + Eq;

    /// Returns the key used to decide whether two values are duplicates.
    fn set_key(&self) -> Self::SetKey;

    /// Returns whether this present value still counts as absent
    /// for collection building and `take_any`.
    fn is_absent(&self) -> bool {
        false
    }

    /// Encodes this value in its canonical JSON representation.
    fn to_json(&self) -> JsonValue;

    /// Wraps this value into a [ScalarValueT].
    fn into_scalar(self) -> ScalarValueT;

    /// Returns the column of this type contained in `column`, if the types agree.
    fn column(column: &ColumnT) -> Option<&ColumnEnum<Self>>;

    /// Wraps a column of this type into a [ColumnT].
    fn into_column_t(column: ColumnEnum<Self>) -> ColumnT;
}

macro_rules! hashable_scalar_type {
    ($type:ty => $variant:ident, |$value:ident| $json:expr) => {
        impl ScalarType for $type {
            const TYPE_NAME: ScalarTypeName = ScalarTypeName::$variant;

            type SetKey = Self;

            fn set_key(&self) -> Self::SetKey {
                self.clone()
            }

            fn to_json(&self) -> JsonValue {
                let $value = self;
                $json
            }

            fn into_scalar(self) -> ScalarValueT {
                ScalarValueT::$variant(self)
            }

            fn column(column: &ColumnT) -> Option<&ColumnEnum<Self>> {
                match column {
                    ColumnT::$variant(column) => Some(column),
                    _ => None,
                }
            }

            fn into_column_t(column: ColumnEnum<Self>) -> ColumnT {
                ColumnT::$variant(column)
            }
        }
    };
}

hashable_scalar_type!(i32 => Int32, |value| JsonValue::from(*value));
hashable_scalar_type!(i64 => Int64, |value| JsonValue::from(*value));
hashable_scalar_type!(Double => Double, |value| double_to_json(*value));
hashable_scalar_type!(Decimal => Decimal, |value| decimal_to_json(value));
hashable_scalar_type!(bool => Bool, |value| JsonValue::Bool(*value));
hashable_scalar_type!(DateTime<Utc> => DateTime, |value| JsonValue::String(format_datetime(value)));
hashable_scalar_type!(TimeDelta => TimeSpan, |value| JsonValue::String(format_timespan(value)));
hashable_scalar_type!(Uuid => Guid, |value| JsonValue::String(value.hyphenated().to_string()));

impl ScalarType for String {
    const TYPE_NAME: ScalarTypeName = ScalarTypeName::String;

    type SetKey = String;

    fn set_key(&self) -> Self::SetKey {
        self.clone()
    }

    fn is_absent(&self) -> bool {
        self.is_empty()
    }

    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.clone())
    }

    fn into_scalar(self) -> ScalarValueT {
        ScalarValueT::String(self)
    }

    fn column(column: &ColumnT) -> Option<&ColumnEnum<Self>> {
        match column {
            ColumnT::String(column) => Some(column),
            _ => None,
        }
    }

    fn into_column_t(column: ColumnEnum<Self>) -> ColumnT {
        ColumnT::String(column)
    }
}

impl ScalarType for JsonValue {
    const TYPE_NAME: ScalarTypeName = ScalarTypeName::Dynamic;

    // Object keys are kept sorted by serde_json, so the text is canonical.
    type SetKey = String;

    fn set_key(&self) -> Self::SetKey {
        self.to_string()
    }

    fn is_absent(&self) -> bool {
        self.is_null()
    }

    fn to_json(&self) -> JsonValue {
        self.clone()
    }

    fn into_scalar(self) -> ScalarValueT {
        ScalarValueT::Dynamic(self)
    }

    fn column(column: &ColumnT) -> Option<&ColumnEnum<Self>> {
        match column {
            ColumnT::Dynamic(column) => Some(column),
            _ => None,
        }
    }

    fn into_column_t(column: ColumnEnum<Self>) -> ColumnT {
        ColumnT::Dynamic(column)
    }
}

/// JSON has no representation for NaN or infinity,
/// so those are written as strings.
fn double_to_json(value: Double) -> JsonValue {
    let value = value.value();

    match Number::from_f64(value) {
        Some(number) => JsonValue::Number(number),
        None if value.is_nan() => JsonValue::String("NaN".to_string()),
        None if value.is_sign_positive() => JsonValue::String("Infinity".to_string()),
        None => JsonValue::String("-Infinity".to_string()),
    }
}

fn decimal_to_json(value: &Decimal) -> JsonValue {
    if value.fract().is_zero() {
        if let Some(integer) = value.to_i64() {
            return JsonValue::from(integer);
        }
    }

    value
        .to_f64()
        .and_then(Number::from_f64)
        .map(JsonValue::Number)
        .unwrap_or_else(|| JsonValue::String(value.to_string()))
}

#[cfg(test)]
mod test {
    use chrono::{TimeDelta, TimeZone, Utc};
    use rust_decimal::Decimal;
    use serde_json::{json, Value as JsonValue};
    use test_log::test;
    use uuid::Uuid;

    use super::ScalarType;
    use crate::datatypes::Double;

    #[test]
    fn canonical_json() {
        assert_eq!(7i32.to_json(), json!(7));
        assert_eq!(Double::new(30.5).to_json(), json!(30.5));
        assert_eq!(Double::new(f64::NAN).to_json(), json!("NaN"));
        assert_eq!(Double::new(f64::NEG_INFINITY).to_json(), json!("-Infinity"));
        assert_eq!(Decimal::new(1200, 2).to_json(), json!(12));
        assert_eq!(Decimal::new(125, 2).to_json(), json!(1.25));
        assert_eq!(true.to_json(), json!(true));
        assert_eq!(
            Utc.with_ymd_and_hms(2023, 2, 1, 0, 0, 0).unwrap().to_json(),
            json!("2023-02-01T00:00:00.0000000Z")
        );
        assert_eq!(TimeDelta::hours(25).to_json(), json!("1.01:00:00"));
        assert_eq!(
            Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef).to_json(),
            json!("01234567-89ab-cdef-0123-456789abcdef")
        );
        assert_eq!("apple".to_string().to_json(), json!("apple"));
        assert_eq!(json!({"a": [1, 2]}).to_json(), json!({"a": [1, 2]}));
    }

    #[test]
    fn absence_beyond_none() {
        assert!(String::new().is_absent());
        assert!(!"x".to_string().is_absent());
        assert!(JsonValue::Null.is_absent());
        assert!(!json!([]).is_absent());
        assert!(!0i64.is_absent());
    }

    #[test]
    fn dynamic_set_keys_ignore_key_order() {
        let first: JsonValue = serde_json::from_str(r#"{"a": 1, "b": 2}"#).unwrap();
        let second: JsonValue = serde_json::from_str(r#"{"b": 2, "a": 1}"#).unwrap();

        assert_eq!(first.set_key(), second.set_key());
    }
}
