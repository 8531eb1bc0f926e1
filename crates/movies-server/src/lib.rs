//! # Movies Server Library
//!
//! Component wiring and startup utilities for the Movies API server.

pub mod startup;
pub mod wiring;
