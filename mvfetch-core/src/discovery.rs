//! Library scanning and per-folder eligibility.
//!
//! Scans the immediate children of the library root; no recursion. A folder
//! is eligible when it is a directory, its name parses, it contains
//! `song.opus`, and no `.mp4` file exists in it yet. Ineligible entries carry
//! a distinct, reportable skip reason. The scanner never mutates anything.

use crate::config::AUDIO_FILENAME;
use crate::error::{CoreError, CoreResult};
use crate::identity::parse_song_name;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Why a library entry was excluded from processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotADirectory,
    UnparsedName,
    MissingAudio,
    AlreadyProcessed,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotADirectory => write!(f, "not a directory"),
            SkipReason::UnparsedName => write!(f, "folder name not recognized"),
            SkipReason::MissingAudio => write!(f, "no {AUDIO_FILENAME} found"),
            SkipReason::AlreadyProcessed => write!(f, "video already present"),
        }
    }
}

/// A song folder eligible for augmentation.
#[derive(Debug, Clone)]
pub struct SongFolder {
    pub path: PathBuf,
    pub artist: String,
    pub title: String,
    pub audio_file: PathBuf,
}

/// One immediate child of the library root, classified.
#[derive(Debug)]
pub enum LibraryEntry {
    Eligible(SongFolder),
    Skipped { path: PathBuf, reason: SkipReason },
}

/// Enumerates and classifies the immediate children of the library root.
///
/// Entries are returned in path order so runs are deterministic. Fails only
/// when the root itself cannot be enumerated.
pub fn scan_library(root: &Path) -> CoreResult<Vec<LibraryEntry>> {
    let read_dir =
        fs::read_dir(root).map_err(|e| CoreError::LibraryUnreadable(root.to_path_buf(), e))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in read_dir {
        paths.push(entry?.path());
    }
    paths.sort();

    Ok(paths.into_iter().map(|path| classify(&path)).collect())
}

fn classify(path: &Path) -> LibraryEntry {
    let skipped = |reason| LibraryEntry::Skipped {
        path: path.to_path_buf(),
        reason,
    };

    if !path.is_dir() {
        return skipped(SkipReason::NotADirectory);
    }

    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return skipped(SkipReason::UnparsedName);
    };
    let Some(identity) = parse_song_name(name) else {
        return skipped(SkipReason::UnparsedName);
    };

    let audio_file = path.join(AUDIO_FILENAME);
    if !audio_file.is_file() {
        return skipped(SkipReason::MissingAudio);
    }

    if has_video(path) {
        return skipped(SkipReason::AlreadyProcessed);
    }

    LibraryEntry::Eligible(SongFolder {
        path: path.to_path_buf(),
        artist: identity.artist,
        title: identity.title,
        audio_file,
    })
}

/// True when the folder already contains an `.mp4` file.
#[must_use]
pub fn has_video(dir: &Path) -> bool {
    let Ok(read_dir) = fs::read_dir(dir) else {
        return false;
    };
    read_dir.flatten().any(|entry| {
        let path = entry.path();
        path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("mp4"))
    })
}
