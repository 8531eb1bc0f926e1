//! # Movies Repository
//!
//! Persistent store access for movies and user extras.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn MovieRepository>      (domain interface)
//! MySqlMovieRepository               (MySQL / SQLx)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL
//! ```
//!
//! [`InMemoryRepository`] implements the same traits over a map and backs
//! tests that run without a database.

pub mod memory;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use memory::*;
pub use mysql::*;
pub use pool::*;
pub use traits::*;
