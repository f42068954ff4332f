/// Reasons a supplied matrix cannot be walked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// No matrix was supplied at all.
    #[error("Cannot traverse a null matrix")]
    NullMatrix,

    /// The matrix has no rows, or its first row has no columns.
    #[error("Matrix must have at least one value")]
    EmptyMatrix,

    /// A row's length differs from the first row's length.
    #[error("Supplied matrix must be rectangular: row {row} has {found} columns, expected {expected}")]
    NonRectangular {
        /// Zero-based index of the first offending row.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },
}
