use chrono::{DateTime, Utc};
use log::info;
use rusqlite::{params, types::Type};

use crate::{
    config::{Database, StorageConfig},
    domain::{
        title::title_from_filename,
        track::{TrackDocument, UploadForm, parse_genres},
    },
    storage::{
        db::{self, utc_to_i64},
        error::StorageError,
        fs::{self, StorageLayout},
        schema::{columns::*, tables::*},
    },
};

/// Main structure that implements all storage logic
pub struct Storage {
    pub(crate) db: rusqlite::Connection,
    layout: StorageLayout,
}

impl Storage {
    /// when called, opens a database connection
    pub fn new(
        db_config: Database,
        storage_config: StorageConfig,
    ) -> Result<Self, StorageError> {
        let db: rusqlite::Connection = db::open(&db_config)?;
        Ok(Self::from_existing_conn(
            db,
            StorageLayout::new(storage_config.root),
        ))
    }

    pub fn from_existing_conn(db: rusqlite::Connection, layout: StorageLayout) -> Self {
        Self { db, layout }
    }

    pub fn layout(&self) -> &StorageLayout {
        &self.layout
    }

    /// Ingests one track: copies the media into the storage layout, builds
    /// the track document, and performs a single insert.
    ///
    /// A missing audio file aborts before any side effect. If the insert
    /// fails after the copies ran, the copied files stay in place.
    pub fn add_track(&mut self, form: UploadForm) -> Result<TrackDocument, StorageError> {
        if !form.audio_path.is_file() {
            return Err(StorageError::MissingAudioFile(form.audio_path.clone()));
        }

        let filename = fs::copy_into(&form.audio_path, &self.layout.tracks_dir())?;
        let cover_image = match &form.cover_path {
            Some(cover) => Some(fs::copy_into(cover, &self.layout.covers_dir())?),
            None => None,
        };

        let title = form
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| title_from_filename(&filename));
        let genres = form.genres.as_deref().and_then(parse_genres);

        let now = Utc::now();
        let doc = TrackDocument {
            title,
            filename,
            genres,
            cover_image,
            like_count: 0,
            play_count: 0,
            is_public: form.is_public,
            is_approved: false,
            created_at: now,
            updated_at: now,
        };

        self.insert_document(&doc)?;
        info!("added track '{}' ({})", doc.title, doc.filename);

        Ok(doc)
    }

    fn insert_document(&mut self, doc: &TrackDocument) -> Result<(), StorageError> {
        let genres_json = doc
            .genres
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| StorageError::Internal(e.into()))?;

        self.db.execute(
            &format!(
                "INSERT INTO {TRACKS} \
                 ({TITLE}, {FILENAME}, {GENRES}, {COVER_IMAGE}, {LIKE_COUNT}, {PLAY_COUNT}, \
                  {IS_PUBLIC}, {IS_APPROVED}, {CREATED_AT}, {UPDATED_AT}) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
            ),
            params![
                doc.title,
                doc.filename,
                genres_json,
                doc.cover_image,
                doc.like_count,
                doc.play_count,
                doc.is_public,
                doc.is_approved,
                utc_to_i64(doc.created_at),
                utc_to_i64(doc.updated_at),
            ],
        )?;

        Ok(())
    }

    /// Reads back every stored track document, oldest first.
    pub fn list_tracks(&mut self) -> Result<Vec<TrackDocument>, StorageError> {
        let mut stmt = self.db.prepare(&format!(
            "SELECT {TITLE}, {FILENAME}, {GENRES}, {COVER_IMAGE}, {LIKE_COUNT}, {PLAY_COUNT}, \
             {IS_PUBLIC}, {IS_APPROVED}, {CREATED_AT}, {UPDATED_AT} \
             FROM {TRACKS} ORDER BY rowid"
        ))?;

        let docs = stmt
            .query_map([], |row| {
                let genres = row
                    .get::<_, Option<String>>(2)?
                    .map(|json| serde_json::from_str(&json))
                    .transpose()
                    .map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
                    })?;

                Ok(TrackDocument {
                    title: row.get(0)?,
                    filename: row.get(1)?,
                    genres,
                    cover_image: row.get(3)?,
                    like_count: row.get(4)?,
                    play_count: row.get(5)?,
                    is_public: row.get(6)?,
                    is_approved: row.get(7)?,
                    created_at: read_utc(row, 8)?,
                    updated_at: read_utc(row, 9)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(docs)
    }
}

fn read_utc(row: &rusqlite::Row<'_>, idx: usize) -> Result<DateTime<Utc>, rusqlite::Error> {
    let secs: i64 = row.get(idx)?;
    db::i64_seconds_to_utc(secs)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, e.into()))
}
