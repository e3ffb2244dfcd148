//! Movie records decoded from the most-popular-movies payload.

use moviequiz_core::error::QuizError;
use serde::Deserialize;
use tracing::debug;

/// Suffix requesting a 600px-wide rendition of a poster.
pub const RESIZED_IMAGE_SUFFIX: &str = "._V0_UX600_.jpg";

/// Wire shape of the movie list response.
#[derive(Debug, Deserialize)]
struct MostPopularMovies {
    #[serde(rename = "errorMessage", default)]
    error_message: String,
    #[serde(default)]
    items: Vec<MostPopularMovie>,
}

/// Wire shape of one movie entry.
#[derive(Debug, Deserialize)]
struct MostPopularMovie {
    #[serde(default)]
    title: String,
    #[serde(default)]
    rating: String,
    #[serde(rename = "image", default)]
    image_url: String,
}

/// A movie the remote source can ask about.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// Display title.
    pub title: String,
    /// Rating parsed from the payload; `0.0` when it was not a number.
    pub rating: f64,
    /// Full-size poster URL as delivered.
    pub image_url: String,
}

impl Movie {
    /// Returns the URL of the resized poster.
    ///
    /// Everything from the first `"._"` on is replaced by
    /// [`RESIZED_IMAGE_SUFFIX`].
    #[must_use]
    pub fn resized_image_url(&self) -> String {
        let base = self
            .image_url
            .split_once("._")
            .map_or(self.image_url.as_str(), |(head, _)| head);
        format!("{base}{RESIZED_IMAGE_SUFFIX}")
    }
}

/// Parses a rating string, degrading to `0.0` when it is empty or not numeric.
#[must_use]
pub fn parse_rating(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(rating) if rating.is_finite() => rating,
        _ => {
            debug!(raw, "unparseable rating, defaulting to 0.0");
            0.0
        }
    }
}

/// Decodes the movie list payload.
///
/// # Errors
///
/// Returns `QuizError::Decode` if `bytes` is not a valid payload and
/// `QuizError::Api` if the service filled in `errorMessage`.
pub fn decode_movie_list(bytes: &[u8]) -> Result<Vec<Movie>, QuizError> {
    let payload: MostPopularMovies =
        serde_json::from_slice(bytes).map_err(|e| QuizError::Decode(e.to_string()))?;

    if !payload.error_message.is_empty() {
        return Err(QuizError::Api(payload.error_message));
    }

    Ok(payload
        .items
        .into_iter()
        .map(|item| Movie {
            rating: parse_rating(&item.rating),
            title: item.title,
            image_url: item.image_url,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating_reads_decimal() {
        assert!((parse_rating("8.3") - 8.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_rating_defaults_to_zero() {
        assert!(parse_rating("").abs() < f64::EPSILON);
        assert!(parse_rating("N/A").abs() < f64::EPSILON);
        assert!(parse_rating("NaN").abs() < f64::EPSILON);
    }

    #[test]
    fn test_resized_image_url_replaces_size_suffix() {
        let movie = Movie {
            title: "Heat".into(),
            rating: 8.3,
            image_url: "https://img.example/M/abc._V1_Ratio0.6716_AL_.jpg".into(),
        };
        assert_eq!(
            movie.resized_image_url(),
            "https://img.example/M/abc._V0_UX600_.jpg"
        );
    }

    #[test]
    fn test_resized_image_url_appends_when_no_marker() {
        let movie = Movie {
            title: "Heat".into(),
            rating: 8.3,
            image_url: "https://img.example/M/abc".into(),
        };
        assert_eq!(
            movie.resized_image_url(),
            "https://img.example/M/abc._V0_UX600_.jpg"
        );
    }

    #[test]
    fn test_decode_movie_list_parses_items() {
        let body = br#"{
            "errorMessage": "",
            "items": [
                {"id": "tt0111161", "title": "The Shawshank Redemption", "rating": "9.2", "image": "https://img.example/a._V1_.jpg"},
                {"title": "Unrated", "rating": "", "image": "https://img.example/b.jpg"}
            ]
        }"#;

        let movies = decode_movie_list(body).unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "The Shawshank Redemption");
        assert!((movies[0].rating - 9.2).abs() < f64::EPSILON);
        assert!(movies[1].rating.abs() < f64::EPSILON);
    }

    #[test]
    fn test_decode_movie_list_surfaces_api_error() {
        let body = br#"{"errorMessage": "Invalid API Key", "items": []}"#;

        match decode_movie_list(body) {
            Err(QuizError::Api(message)) => assert_eq!(message, "Invalid API Key"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_movie_list_rejects_garbage() {
        assert!(matches!(
            decode_movie_list(b"<html>"),
            Err(QuizError::Decode(_))
        ));
    }
}
