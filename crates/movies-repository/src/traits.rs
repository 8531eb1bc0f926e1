//! Repository trait definitions.

use movies_core::{Movie, Repository, UserExtra};

/// Movie repository, keyed by IMDb id.
///
/// `save` persists the whole aggregate, comments included.
pub trait MovieRepository: Repository<Movie> {}

/// User extra repository, keyed by username.
pub trait UserExtraRepository: Repository<UserExtra> {}
