//! Matrix validation.
//!
//! A [`ValidMatrix`] can only be obtained through [`validate`], so holding one
//! proves the grid is non-empty and rectangular.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A `(row, column)` cell coordinate inside a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub column: usize,
}

impl Position {
    /// Creates a new `Position`.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// A non-empty, rectangular integer matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidMatrix {
    cells: Vec<i32>,
    rows: usize,
    columns: usize,
}

impl ValidMatrix {
    /// Number of rows (always at least 1).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (always at least 1).
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells, `rows * columns`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; kept for the `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `pos` lies inside the matrix.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.column < self.columns
    }

    /// Returns the value at `pos`, or `None` if it is out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<i32> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Returns the cells of row `index`, or `None` if out of bounds.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[i32]> {
        let start = index.checked_mul(self.columns)?;
        let end = start.checked_add(self.columns)?;
        self.cells.get(start..end)
    }

    /// Row-major index of `pos`, or `None` if it is out of bounds.
    pub(crate) fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.columns + pos.column)
    }
}

impl TryFrom<Vec<Vec<i32>>> for ValidMatrix {
    type Error = ValidationError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        validate(Some(rows))
    }
}

/// Checks that `matrix` is present, non-empty, and rectangular.
///
/// Rules are applied in order: a missing matrix, then an empty first row (or
/// no rows at all), then the first row whose length differs from row 0.
///
/// # Errors
/// Returns [`ValidationError::NullMatrix`], [`ValidationError::EmptyMatrix`],
/// or [`ValidationError::NonRectangular`] for the first rule that fails.
pub fn validate(matrix: Option<Vec<Vec<i32>>>) -> Result<ValidMatrix, ValidationError> {
    let matrix = matrix.ok_or(ValidationError::NullMatrix)?;

    let columns = matrix.first().map_or(0, Vec::len);
    if columns == 0 {
        return Err(ValidationError::EmptyMatrix);
    }

    if let Some((row, found)) = matrix
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != columns)
    {
        return Err(ValidationError::NonRectangular { row, expected: columns, found });
    }

    let rows = matrix.len();
    let cells: Vec<i32> = matrix.into_iter().flatten().collect();
    Ok(ValidMatrix { cells, rows, columns })
}
