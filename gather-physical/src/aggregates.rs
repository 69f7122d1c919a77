//! This module contains the built-in aggregate functions
//! and the registry through which a binder selects one of their typed overloads.
//!
//! Every aggregate is a stateless value implementing [aggregate::AggregateImpl].
//! It receives the [crate::columnar::chunk::Chunk] of one group
//! together with the already evaluated argument columns,
//! and produces exactly one result per call.

pub mod aggregate;
pub(crate) mod arguments;
pub mod operation;
pub(crate) mod processors;
pub mod registry;
