// mvfetch-core/tests/discovery_tests.rs

use mvfetch_core::discovery::{LibraryEntry, SkipReason, scan_library};
use mvfetch_core::error::CoreError;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn make_song_folder(root: &Path, name: &str) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir(&dir).unwrap();
    File::create(dir.join("song.opus")).unwrap();
    dir
}

#[test]
fn test_scan_finds_eligible_folder() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    make_song_folder(dir.path(), "Daft Punk - One More Time (Guitar Hero III)");

    let entries = scan_library(dir.path())?;
    assert_eq!(entries.len(), 1);
    match &entries[0] {
        LibraryEntry::Eligible(song) => {
            assert_eq!(song.artist, "Daft Punk");
            assert_eq!(song.title, "One More Time");
            assert_eq!(song.audio_file.file_name().unwrap(), "song.opus");
        }
        other => panic!("Expected eligible entry, got {other:?}"),
    }

    dir.close()?;
    Ok(())
}

#[test]
fn test_scan_reports_distinct_skip_reasons() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();

    // A loose file at the root.
    File::create(root.join("a_readme.txt"))?;
    // A directory whose name does not parse.
    fs::create_dir(root.join("b_not_a_valid_name"))?;
    // A parsable directory without the audio track.
    fs::create_dir(root.join("c - Song (tag)"))?;
    // A complete folder that already has a video.
    let done = make_song_folder(root, "d - Done (tag)");
    File::create(done.join("video.mp4"))?;

    let entries = scan_library(root)?;
    assert_eq!(entries.len(), 4);

    let reasons: Vec<SkipReason> = entries
        .iter()
        .map(|e| match e {
            LibraryEntry::Skipped { reason, .. } => *reason,
            LibraryEntry::Eligible(song) => panic!("Unexpected eligible entry: {song:?}"),
        })
        .collect();

    // Entries come back in path order.
    assert_eq!(
        reasons,
        vec![
            SkipReason::NotADirectory,
            SkipReason::UnparsedName,
            SkipReason::MissingAudio,
            SkipReason::AlreadyProcessed,
        ]
    );

    dir.close()?;
    Ok(())
}

#[test]
fn test_scan_treats_any_mp4_as_processed() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let song = make_song_folder(dir.path(), "Queen - Bohemian Rhapsody (1975)");
    // Extension match is case-insensitive and not limited to video.mp4.
    File::create(song.join("OLD_CLIP.MP4"))?;

    let entries = scan_library(dir.path())?;
    match &entries[0] {
        LibraryEntry::Skipped { reason, .. } => {
            assert_eq!(*reason, SkipReason::AlreadyProcessed);
        }
        other => panic!("Expected skipped entry, got {other:?}"),
    }

    dir.close()?;
    Ok(())
}

#[test]
fn test_scan_ignores_non_mp4_extras() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let song = make_song_folder(dir.path(), "Queen - Bohemian Rhapsody (1975)");
    File::create(song.join("album.jpg"))?;
    File::create(song.join("notes.txt"))?;

    let entries = scan_library(dir.path())?;
    assert!(matches!(&entries[0], LibraryEntry::Eligible(_)));

    dir.close()?;
    Ok(())
}

#[test]
fn test_scan_nonexistent_root_is_fatal() {
    let result = scan_library(&PathBuf::from("surely_this_does_not_exist_42_mvfetch"));
    assert!(result.is_err());
    match result.err().unwrap() {
        CoreError::LibraryUnreadable(_, _) => {}
        e => panic!("Unexpected error type: {e:?}"),
    }
}
