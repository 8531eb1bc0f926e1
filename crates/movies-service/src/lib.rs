//! # Movies Service
//!
//! Business logic service layer for the Movies API: the cache-aside
//! [`CachedLookup`], the movie and user extra services built on it, wire DTOs
//! and the mapper that turns entities into responses.

pub mod cache;
pub mod dto;
pub mod lookup;
pub mod mappers;
pub mod movie_service;
pub mod user_extra_service;
pub mod r#impl;

pub use cache::*;
pub use dto::*;
pub use lookup::CachedLookup;
pub use mappers::MovieMapper;
pub use movie_service::*;
pub use r#impl::{MovieServiceImpl, UserExtraServiceImpl};
pub use user_extra_service::*;
