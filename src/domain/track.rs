use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// The persisted metadata record for one uploaded track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackDocument {
    pub title: String,
    /// Basename of the stored audio file, never a full path.
    pub filename: String,
    pub genres: Option<Vec<String>>,
    /// Basename of the stored cover image, if one was uploaded.
    pub cover_image: Option<String>,
    pub like_count: i64,
    pub play_count: i64,
    pub is_public: bool,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input collected by the front end before ingestion.
#[derive(Debug, Clone)]
pub struct UploadForm {
    pub audio_path: PathBuf,
    pub cover_path: Option<PathBuf>,
    /// Derived from the audio filename when absent.
    pub title: Option<String>,
    /// Raw comma-separated genre field, as typed by the operator.
    pub genres: Option<String>,
    pub is_public: bool,
}

/// Splits a comma-separated genre field, trimming each entry and keeping
/// the input order. Blank input, and entries that trim to nothing, are
/// dropped; a field with no usable entries yields `None`.
pub fn parse_genres(raw: &str) -> Option<Vec<String>> {
    let genres: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect();

    if genres.is_empty() { None } else { Some(genres) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_genres_trims_and_keeps_order() {
        assert_eq!(
            parse_genres("rock, pop ,jazz"),
            Some(vec![
                "rock".to_string(),
                "pop".to_string(),
                "jazz".to_string()
            ])
        );
    }

    #[test]
    fn parse_genres_empty_input_is_none() {
        assert_eq!(parse_genres(""), None);
        assert_eq!(parse_genres("   "), None);
    }

    #[test]
    fn parse_genres_drops_blank_entries() {
        assert_eq!(
            parse_genres("rock,,  ,pop,"),
            Some(vec!["rock".to_string(), "pop".to_string()])
        );
    }
}
