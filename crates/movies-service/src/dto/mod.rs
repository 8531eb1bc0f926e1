//! Data Transfer Objects (DTOs).

mod movie_dto;
mod user_extra_dto;

pub use movie_dto::*;
pub use user_extra_dto::*;
