//! Entity-DTO mappers.

mod movie_mapper;

pub use movie_mapper::MovieMapper;
