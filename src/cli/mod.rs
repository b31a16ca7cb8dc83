use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config;
use crate::domain::track::UploadForm;
use crate::storage::error::StorageError;
use crate::storage::fs::StorageLayout;
use crate::storage::operations::Storage;

#[derive(Parser)]
#[command(name = "trackdrop")]
#[command(version = "0.1")]
#[command(about = "Music track upload tool")]
pub struct Cli {
    /// Path to the config TOML file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a track: copy the media into storage and record its metadata
    Add {
        /// Path to the audio file
        audio: PathBuf,

        /// Track title; derived from the filename when omitted
        #[arg(short, long)]
        title: Option<String>,

        /// Comma-separated genres
        #[arg(short, long)]
        genres: Option<String>,

        /// Path to a cover image
        #[arg(long)]
        cover: Option<PathBuf>,

        /// Keep the track private
        #[arg(long)]
        private: bool,
    },
    /// List uploaded tracks
    List,
}

/// Entrypoint for CLI
pub fn run() {
    env_logger::init();

    let cli = Cli::parse();

    let cfg = config::Config::load(cli.config.to_str().unwrap()).unwrap();

    match cli.command {
        Commands::Add {
            audio,
            title,
            genres,
            cover,
            private,
        } => {
            let mut storage =
                Storage::new(cfg.database, cfg.storage).expect("Failed to initialize storage");

            let form = UploadForm {
                audio_path: audio,
                cover_path: cover,
                title,
                genres,
                is_public: !private,
            };

            match storage.add_track(form) {
                Ok(doc) => {
                    println!("Track added successfully!");
                    println!("  Title: {}", doc.title);
                    println!(
                        "  Audio file: {}",
                        StorageLayout::display_path(&storage.layout().tracks_dir(), &doc.filename)
                    );
                    if let Some(cover) = &doc.cover_image {
                        println!(
                            "  Cover image: {}",
                            StorageLayout::display_path(&storage.layout().covers_dir(), cover)
                        );
                    }
                    if let Some(genres) = &doc.genres {
                        println!("  Genres: {}", genres.join(", "));
                    }
                }
                Err(StorageError::MissingAudioFile(path)) => {
                    println!("Error: audio file not found: {}", path.display());
                }
                Err(e) => {
                    log::error!("failed to add track: {e}");
                    println!("Failed to add track.");
                }
            }
        }

        Commands::List => {
            let mut storage =
                Storage::new(cfg.database, cfg.storage).expect("Failed to initialize storage");

            let tracks = storage.list_tracks().unwrap();

            if tracks.is_empty() {
                println!("No tracks uploaded yet.");
            }

            for track in tracks {
                println!("Track: {}", track.title);
                println!("  File: {}", track.filename);
                if let Some(genres) = &track.genres {
                    println!("  Genres: {}", genres.join(", "));
                }
                if let Some(cover) = &track.cover_image {
                    println!("  Cover: {}", cover);
                }
                println!(
                    "  Public: {}, approved: {}, likes: {}, plays: {}",
                    track.is_public, track.is_approved, track.like_count, track.play_count
                );
                println!("  Uploaded: {}", track.created_at);
            }
        }
    }
}
