//! Domain entities.

mod movie;
mod user_extra;

pub use movie::*;
pub use user_extra::*;
