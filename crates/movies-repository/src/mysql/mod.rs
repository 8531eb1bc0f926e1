//! MySQL repository implementations.

mod movie_repository;
mod user_extra_repository;

pub use movie_repository::*;
pub use user_extra_repository::*;
