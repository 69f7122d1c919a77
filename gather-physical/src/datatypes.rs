//! This module collects the scalar types a column can hold,
//! and the traits that let generic code work on all of them.

pub mod double;
pub use double::Double;
pub mod scalar_type;
pub use scalar_type::ScalarType;
pub mod scalar_type_name;
pub use scalar_type_name::ScalarTypeName;
pub mod scalar_value;
pub use scalar_value::{ScalarValueT, TypedScalar};
pub mod timespan;
