//! Core of the grid-walker service.
//!
//! Validates rectangular integer matrices and walks them in clockwise spiral
//! order starting at the top-left cell. Everything here is pure and holds no
//! state between calls.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod matrix;
pub mod spiral;

pub use error::ValidationError;
pub use matrix::{validate, Position, ValidMatrix};
pub use spiral::{traverse, walk, Direction, Spiral, VisitedSet};
