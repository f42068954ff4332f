//! HTTP gateway for the grid-walker service.
//!
//! Exposes a single `POST /api/traversed-grid` endpoint that accepts a JSON
//! integer matrix and answers with its values in clockwise spiral order.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
