use rusqlite::Connection;

pub mod tables {
    pub const TRACKS: &str = "tracks";

    pub const ALL_TABLES: &[&str] = &[TRACKS];
}

pub mod columns {
    pub const TITLE: &str = "title";
    pub const FILENAME: &str = "filename";
    pub const GENRES: &str = "genres";
    pub const COVER_IMAGE: &str = "cover_image";
    pub const LIKE_COUNT: &str = "like_count";
    pub const PLAY_COUNT: &str = "play_count";
    pub const IS_PUBLIC: &str = "is_public";
    pub const IS_APPROVED: &str = "is_approved";
    pub const CREATED_AT: &str = "created_at";
    pub const UPDATED_AT: &str = "updated_at";
}

pub use columns::*;
pub use tables::*;

// One table, one document per upload. Genres are a JSON array in a TEXT
// cell, NULL when absent. No uniqueness constraints.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS tracks (
    title TEXT NOT NULL,
    filename TEXT NOT NULL,
    genres TEXT,
    cover_image TEXT,
    like_count INTEGER NOT NULL,
    play_count INTEGER NOT NULL,
    is_public INTEGER NOT NULL,
    is_approved INTEGER NOT NULL,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);
"#;

pub fn init(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA)
}
