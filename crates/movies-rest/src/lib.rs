//! # Movies REST
//!
//! REST API layer using Axum. Serves the movie catalogue, comments, the
//! caller's user extras and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
