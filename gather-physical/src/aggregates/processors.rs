//! This module contains the built-in aggregate implementations,
//! each generic over the scalar type of the aggregated column.

pub(crate) mod arg_extremum;
pub(crate) mod collection;
pub(crate) mod make_list;
pub(crate) mod make_list_with_nulls;
pub(crate) mod make_set;
pub(crate) mod take_any;
