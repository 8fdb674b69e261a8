//! Score persistence guard.
//!
//! The best score is stored as two whitespace-separated decimal tokens,
//! `<score> <checksum>`, where the checksum is a pure deterministic function
//! of the score. A missing file and a tampered file are both non-fatal: the
//! caller gets a zero best and a tag saying which case it was. A tampered
//! record is never trusted and never rewritten here; it stays on disk until
//! the next genuine new best overwrites it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use sha2::{Digest, Sha256};

const RECORD_FILE: &str = "highscore.txt";

/// Deterministic checksum of a score: the first 8 bytes (LE) of SHA-256 over
/// the score's decimal string. Stable across runs and platforms, and not
/// derivable from the score by inspection.
fn checksum(score: u32) -> u64 {
    let digest = Sha256::digest(score.to_string().as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// Result of reading the persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Record present and its checksum matched.
    Loaded(u32),
    /// No record on disk (first run). Treated as best = 0.
    Missing,
    /// Record present but malformed or failing the checksum. Treated as
    /// best = 0; the stored value is discarded.
    Tampered,
}

impl LoadOutcome {
    pub fn best(&self) -> u32 {
        match self {
            LoadOutcome::Loaded(score) => *score,
            LoadOutcome::Missing | LoadOutcome::Tampered => 0,
        }
    }
}

/// Owns the record path and the load/save operations.
#[derive(Debug)]
pub struct HighscoreStore {
    path: PathBuf,
}

impl HighscoreStore {
    /// Store at the platform config location (e.g. `~/.config/tui-flappy`).
    pub fn new() -> io::Result<Self> {
        let dirs = ProjectDirs::from("", "", "tui-flappy").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not determine config directory")
        })?;
        fs::create_dir_all(dirs.config_dir())?;
        Ok(Self {
            path: dirs.config_dir().join(RECORD_FILE),
        })
    }

    /// Store at an explicit path. Used by tests.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the record. Never writes.
    pub fn load(&self) -> LoadOutcome {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return LoadOutcome::Missing,
        };

        let mut tokens = contents.split_whitespace();
        let score = tokens.next().and_then(|t| t.parse::<u32>().ok());
        let stored = tokens.next().and_then(|t| t.parse::<u64>().ok());

        match (score, stored) {
            (Some(score), Some(stored)) if checksum(score) == stored => {
                LoadOutcome::Loaded(score)
            }
            _ => LoadOutcome::Tampered,
        }
    }

    /// Write the score with a freshly computed checksum, replacing any prior
    /// record.
    pub fn save(&self, score: u32) -> io::Result<()> {
        fs::write(&self.path, format!("{} {}", score, checksum(score)))
    }
}
