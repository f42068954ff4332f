//! Clockwise spiral traversal.
//!
//! The walk starts at the top-left cell heading [`Direction::Right`]. Each
//! step continues in the current direction until it would leave the matrix
//! or land on a visited cell; the direction then rotates clockwise and the
//! step is retried from the same cell. The walk ends once every cell has
//! been emitted, so it is bounded by `rows * columns` steps.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::matrix::{validate, Position, ValidMatrix};

/// Heading of the walk. Rotates `Right → Down → Left → Up → Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Increasing column.
    Right,
    /// Increasing row.
    Down,
    /// Decreasing column.
    Left,
    /// Decreasing row.
    Up,
}

impl Direction {
    /// The next heading a quarter turn clockwise.
    #[must_use]
    pub const fn clockwise(self) -> Self {
        match self {
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
            Self::Up => Self::Right,
        }
    }

    /// The position one step from `pos` in this direction.
    ///
    /// Returns `None` when the step would underflow past row or column 0.
    /// The upper bound is the caller's to check against the matrix.
    #[must_use]
    pub fn step(self, pos: Position) -> Option<Position> {
        let Position { row, column } = pos;
        match self {
            Self::Right => column.checked_add(1).map(|c| Position::new(row, c)),
            Self::Down => row.checked_add(1).map(|r| Position::new(r, column)),
            Self::Left => column.checked_sub(1).map(|c| Position::new(row, c)),
            Self::Up => row.checked_sub(1).map(|r| Position::new(r, column)),
        }
    }
}

/// Positions already emitted during a single traversal.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    flags: Vec<bool>,
    columns: usize,
    count: usize,
}

impl VisitedSet {
    /// An empty set sized for `matrix`.
    #[must_use]
    pub fn for_matrix(matrix: &ValidMatrix) -> Self {
        Self {
            flags: vec![false; matrix.len()],
            columns: matrix.columns(),
            count: 0,
        }
    }

    /// Marks `pos` as visited. Returns `false` if it was already present
    /// or lies outside the matrix.
    pub fn insert(&mut self, pos: Position) -> bool {
        let Some(flag) = self.slot(pos).and_then(|i| self.flags.get_mut(i)) else {
            return false;
        };
        if *flag {
            return false;
        }
        *flag = true;
        self.count += 1;
        true
    }

    /// Returns `true` if `pos` has been visited.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.slot(pos)
            .and_then(|i| self.flags.get(i))
            .copied()
            .unwrap_or(false)
    }

    /// Number of visited positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if nothing has been visited yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn slot(&self, pos: Position) -> Option<usize> {
        if pos.column >= self.columns {
            return None;
        }
        pos.row.checked_mul(self.columns)?.checked_add(pos.column)
    }
}

/// Iterator over a matrix's values in clockwise spiral order.
///
/// Yields exactly `rows * columns` values, each cell once.
#[derive(Debug, Clone)]
pub struct Spiral<'a> {
    matrix: &'a ValidMatrix,
    cursor: Option<Position>,
    direction: Direction,
    visited: VisitedSet,
}

impl<'a> Spiral<'a> {
    /// Starts a walk at the top-left cell heading right.
    #[must_use]
    pub fn new(matrix: &'a ValidMatrix) -> Self {
        Self {
            matrix,
            cursor: Some(Position::new(0, 0)),
            direction: Direction::Right,
            visited: VisitedSet::for_matrix(matrix),
        }
    }

    /// Current heading of the walk.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn is_open(&self, pos: Position) -> bool {
        self.matrix.contains(pos) && !self.visited.contains(pos)
    }

    /// Finds the next cell from `from`, rotating clockwise at most a full turn.
    fn advance(&mut self, from: Position) -> Option<Position> {
        if self.visited.len() == self.matrix.len() {
            return None;
        }
        for _ in 0..4 {
            if let Some(next) = self.direction.step(from).filter(|&p| self.is_open(p)) {
                return Some(next);
            }
            self.direction = self.direction.clockwise();
        }
        None
    }
}

impl Iterator for Spiral<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let pos = self.cursor.take()?;
        let value = self.matrix.get(pos)?;
        self.visited.insert(pos);
        self.cursor = self.advance(pos);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.matrix.len() - self.visited.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Spiral<'_> {}

impl FusedIterator for Spiral<'_> {}

/// Collects the spiral order of `matrix`.
#[must_use]
pub fn traverse(matrix: &ValidMatrix) -> Vec<i32> {
    Spiral::new(matrix).collect()
}

/// Validates `matrix` and returns its values in spiral order.
///
/// # Errors
/// Returns the [`ValidationError`] produced by [`validate`]; no partial
/// output is produced on failure.
pub fn walk(matrix: Option<Vec<Vec<i32>>>) -> Result<Vec<i32>, ValidationError> {
    let matrix = validate(matrix)?;
    Ok(traverse(&matrix))
}
