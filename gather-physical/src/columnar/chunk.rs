//! This module defines [Chunk].

use crate::error::Error;

use super::argument::ColumnarArgument;

/// An immutable batch of rows, either one group or the whole input.
///
/// All columns of a chunk have exactly [Chunk::row_count] rows.
#[derive(Debug, Clone, Default)]
pub struct Chunk {
    row_count: usize,
    columns: Vec<(String, ColumnarArgument)>,
}

impl Chunk {
    /// Create a new [Chunk] from named columns.
    ///
    /// # Errors
    /// Returns an error if the columns have different numbers of rows.
    pub fn new(columns: Vec<(String, ColumnarArgument)>) -> Result<Self, Error> {
        let row_count = columns
            .first()
            .map_or(0, |(_, column)| column.row_count());

        if columns
            .iter()
            .any(|(_, column)| column.row_count() != row_count)
        {
            return Err(Error::RowCountMismatch(
                columns
                    .iter()
                    .map(|(_, column)| column.row_count())
                    .collect(),
            ));
        }

        Ok(Self { row_count, columns })
    }

    /// Create a [Chunk] without named columns.
    ///
    /// Used when the aggregate arguments are computed expressions
    /// and no input column needs to be carried.
    pub fn with_row_count(row_count: usize) -> Self {
        Self {
            row_count,
            columns: Vec::new(),
        }
    }

    /// Return the number of rows in this chunk.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Return the column with the given name.
    pub fn column(&self, name: &str) -> Option<&ColumnarArgument> {
        self.columns
            .iter()
            .find(|(column_name, _)| column_name == name)
            .map(|(_, column)| column)
    }

    /// Return an iterator over the names of all columns, in schema order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Return all columns except the `excluded` ones, in schema order.
    ///
    /// This is what the `*` argument of `take_any`, `arg_max` and `arg_min` stands for.
    pub fn expand_wildcard(&self, excluded: &[&str]) -> Vec<ColumnarArgument> {
        self.columns
            .iter()
            .filter(|(name, _)| !excluded.contains(&name.as_str()))
            .map(|(_, column)| column.clone())
            .collect()
    }
}
