//! Movie aggregate and its comments.

use crate::Entity;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A movie identified by its IMDb id.
///
/// Comments are ordered newest first and have no identity outside the movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// IMDb id, immutable after creation.
    pub imdb_id: String,

    /// Movie title.
    pub title: String,

    /// Director name.
    pub director: String,

    /// Release year.
    pub year: i32,

    /// Poster URL.
    pub poster: Option<String>,

    /// Comments, newest first.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Movie {
    /// Creates a movie without comments.
    #[must_use]
    pub fn new(
        imdb_id: impl Into<String>,
        title: impl Into<String>,
        director: impl Into<String>,
        year: i32,
        poster: Option<String>,
    ) -> Self {
        Self {
            imdb_id: imdb_id.into(),
            title: title.into(),
            director: director.into(),
            year,
            poster,
            comments: Vec::new(),
        }
    }

    /// Puts a comment at the head of the comment sequence.
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }
}

impl Entity for Movie {
    const TYPE_NAME: &'static str = "Movie";

    fn id(&self) -> &str {
        &self.imdb_id
    }
}

/// A comment left on a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Author username.
    pub username: String,

    /// Comment body.
    pub text: String,

    /// Creation time, at microsecond precision.
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    /// Creates a comment stamped with the current time.
    ///
    /// The stamp is cut to microseconds, the finest precision the store keeps.
    #[must_use]
    pub fn new(username: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            text: text.into(),
            timestamp: Utc::now().trunc_subsecs(6),
        }
    }
}
