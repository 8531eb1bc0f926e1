//! Domain entities for the Movies API.

pub mod entities;

pub use entities::*;
