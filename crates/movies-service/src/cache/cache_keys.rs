//! Cache groups and key naming.

/// A named cache group and the prefix of every key stored in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheGroup {
    /// Group (Redis hash) name.
    pub name: &'static str,
    /// Prefix joined to the entity id with `_`.
    pub key_prefix: &'static str,
}

impl CacheGroup {
    /// Builds the per-record key, `<prefix>_<id>`.
    #[must_use]
    pub fn hash_key(&self, id: &str) -> String {
        format!("{}_{}", self.key_prefix, id)
    }
}

/// Movies, keyed by IMDb id.
pub const MOVIE: CacheGroup = CacheGroup {
    name: "Movie",
    key_prefix: "movie",
};

/// User extras, keyed by username.
pub const USER_EXTRA: CacheGroup = CacheGroup {
    name: "UserExtra",
    key_prefix: "userExtra",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_key() {
        assert_eq!(MOVIE.hash_key("tt0133093"), "movie_tt0133093");
        assert_eq!(MOVIE.name, "Movie");
    }

    #[test]
    fn test_user_extra_key() {
        assert_eq!(USER_EXTRA.hash_key("alice"), "userExtra_alice");
        assert_eq!(USER_EXTRA.name, "UserExtra");
    }
}
