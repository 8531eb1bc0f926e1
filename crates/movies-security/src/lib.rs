//! # Movies Security
//!
//! Bearer token validation and role checks. Tokens are minted by an external
//! identity provider; this crate only verifies them.

pub mod jwt;
pub mod rbac;

pub use jwt::*;
pub use rbac::*;
