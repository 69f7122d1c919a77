//! This module defines typed, read-only columns
//! and the chunks of rows that aggregates are evaluated on.

pub mod argument;
pub mod chunk;
pub mod column;
pub mod column_t;
