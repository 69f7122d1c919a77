//! This crate defines the physical aggregate layer of a columnar query engine.
//! It consumes chunks of already materialized, typed columns and computes
//! one summary value per group, without any knowledge of the query text
//! that produced the columns or of the driver that partitions the input.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

pub mod aggregates;
pub mod columnar;
pub mod comparison;
pub mod datatypes;
pub mod error;
