//! # Movies Core
//!
//! Core types, traits, and error definitions for the Movies API.
//! This crate provides the domain entities and the foundational abstractions
//! shared by the repository, service and REST layers.

pub mod domain;
pub mod error;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use result::*;
pub use traits::*;
pub use validation::*;
