//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `movie_service.rs`).

pub mod movie_service_impl;
pub mod user_extra_service_impl;

pub use movie_service_impl::MovieServiceImpl;
pub use user_extra_service_impl::UserExtraServiceImpl;
