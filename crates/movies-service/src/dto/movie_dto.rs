//! Movie-related DTOs.

use chrono::{DateTime, Utc};
use movies_core::rules::{imdb_id, not_blank};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a movie.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    #[validate(custom(function = "imdb_id", message = "imdbId must look like tt0133093"))]
    pub imdb_id: String,

    #[validate(
        custom(function = "not_blank", message = "title must not be blank"),
        length(max = 255)
    )]
    pub title: String,

    #[validate(
        custom(function = "not_blank", message = "director must not be blank"),
        length(max = 255)
    )]
    pub director: String,

    #[validate(range(min = 1870, max = 2100, message = "year is out of range"))]
    pub year: i32,

    #[validate(length(max = 1024))]
    pub poster: Option<String>,
}

/// Partial update of a movie. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovieRequest {
    #[validate(
        custom(function = "not_blank", message = "title must not be blank"),
        length(max = 255)
    )]
    pub title: Option<String>,

    #[validate(
        custom(function = "not_blank", message = "director must not be blank"),
        length(max = 255)
    )]
    pub director: Option<String>,

    #[validate(range(min = 1870, max = 2100, message = "year is out of range"))]
    pub year: Option<i32>,

    #[validate(length(max = 1024))]
    pub poster: Option<String>,
}

/// Request to comment on a movie.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[validate(
        custom(function = "not_blank", message = "text must not be blank"),
        length(max = 2000)
    )]
    pub text: String,
}

/// Movie as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub imdb_id: String,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub poster: Option<String>,
    pub comments: Vec<CommentResponse>,
}

/// Comment with its author's avatar resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub username: String,
    pub avatar: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateMovieRequest {
        CreateMovieRequest {
            imdb_id: "tt0133093".to_string(),
            title: "The Matrix".to_string(),
            director: "Lana Wachowski".to_string(),
            year: 1999,
            poster: None,
        }
    }

    #[test]
    fn test_create_request_uses_camel_case() {
        let json = r#"{"imdbId":"tt0133093","title":"The Matrix","director":"Lana Wachowski","year":1999}"#;
        let request: CreateMovieRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.imdb_id, "tt0133093");
        assert!(request.poster.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_validation() {
        let mut request = create_request();
        request.imdb_id = "0133093".to_string();
        request.title = "  ".to_string();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("imdb_id"));
        assert!(fields.contains_key("title"));
    }

    #[test]
    fn test_update_request_validates_present_fields_only() {
        assert!(UpdateMovieRequest::default().validate().is_ok());

        let request = UpdateMovieRequest {
            director: Some(String::new()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_blank_comment_rejected() {
        let request = AddCommentRequest {
            text: " ".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
