use std::path::Path;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::{
    config::Database,
    storage::{error::StorageError, schema},
};

pub type SecondsSinceUnix = i64;

fn open_in_memory() -> Result<rusqlite::Connection, rusqlite::Error> {
    Connection::open_in_memory()
}

fn open_from_file(path: &Path) -> Result<rusqlite::Connection, rusqlite::Error> {
    Connection::open(path)
}

pub fn open(config: &Database) -> Result<rusqlite::Connection, StorageError> {
    let db = if config.in_memory {
        open_in_memory()?
    } else {
        let path = config.path.as_ref().ok_or_else(|| {
            StorageError::Internal(anyhow!("database path required when not in memory"))
        })?;
        open_from_file(path)?
    };
    schema::init(&db)?;
    Ok(db)
}

/// converts a UTC instant to number of seconds since unix epoch
pub fn utc_to_i64(time: DateTime<Utc>) -> SecondsSinceUnix {
    time.timestamp()
}

/// converts number of seconds since unix epoch to a UTC instant
pub fn i64_seconds_to_utc(since_unix: i64) -> anyhow::Result<DateTime<Utc>> {
    DateTime::from_timestamp_secs(since_unix).ok_or(anyhow!(
        "failed to convert {since_unix} s timestamp to datetime"
    ))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::{
        config::Database,
        storage::{
            db::{i64_seconds_to_utc, open, utc_to_i64},
            schema,
        },
    };

    #[test]
    fn open_in_memory_db_initializes_schema() {
        let db = open(&Database {
            in_memory: true,
            path: None,
        })
        .unwrap();

        let mut stmt = db
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap();

        let tables: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .map(|r| r.unwrap())
            .collect();

        for table in schema::tables::ALL_TABLES {
            assert!(tables.contains(&table.to_string()));
        }
    }

    #[test]
    fn open_on_disk_without_path_fails() {
        let err = open(&Database {
            in_memory: false,
            path: None,
        });

        assert!(err.is_err());
    }

    #[test]
    fn timestamp_conversion_round_trips() {
        let now = Utc::now();
        let secs = utc_to_i64(now);
        let back = i64_seconds_to_utc(secs).unwrap();

        assert_eq!(back.timestamp(), now.timestamp());
    }
}
