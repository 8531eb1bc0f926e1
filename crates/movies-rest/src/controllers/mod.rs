//! REST API controllers.

pub mod health_controller;
pub mod movie_controller;
pub mod user_extra_controller;

pub use health_controller::*;
