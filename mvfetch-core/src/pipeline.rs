//! Per-folder orchestration over the whole library.
//!
//! Each folder is driven to a terminal outcome (conformed, skipped, or
//! failed) before the next begins; no outcome is retried. A single folder's
//! failure never aborts the run. The scratch directory is cleared after the
//! loop as a teardown guarantee.

use crate::acquire::acquire_video;
use crate::config::CoreConfig;
use crate::conform::conform_video;
use crate::discovery::{LibraryEntry, SkipReason, SongFolder, scan_library};
use crate::error::{CoreError, CoreResult};
use crate::external::{MediaProbe, MediaTranscoder, VideoSearchProvider};
use crate::scratch::{clear_scratch_dir, prepare_scratch_dir};

use std::path::Path;

/// The external collaborators the pipeline drives.
pub struct Collaborators<'a> {
    pub provider: &'a dyn VideoSearchProvider,
    pub probe: &'a dyn MediaProbe,
    pub transcoder: &'a dyn MediaTranscoder,
}

/// Terminal state of one library entry.
#[derive(Debug)]
pub enum FolderOutcome {
    Conformed { folder: String },
    Skipped { folder: String, reason: SkipReason },
    Failed { folder: String, error: CoreError },
}

/// Aggregate result of a library run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<FolderOutcome>,
}

impl RunReport {
    #[must_use]
    pub fn conformed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FolderOutcome::Conformed { .. }))
            .count()
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FolderOutcome::Skipped { .. }))
            .count()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FolderOutcome::Failed { .. }))
            .count()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }
}

/// Runs the augmentation pipeline over every folder in the library.
///
/// Fatal only when the scratch directory cannot be prepared or the library
/// root cannot be enumerated; everything else is recorded per folder in the
/// returned report.
pub fn process_library(c: &Collaborators<'_>, config: &CoreConfig) -> CoreResult<RunReport> {
    let scratch_dir = prepare_scratch_dir(config)?;
    let entries = scan_library(&config.library_dir)?;
    log::info!(
        "Scanning {}: {} entries",
        config.library_dir.display(),
        entries.len()
    );

    let mut report = RunReport::default();
    for entry in entries {
        let outcome = match entry {
            LibraryEntry::Skipped { path, reason } => {
                let folder = display_name(&path);
                log::info!("Skipping {folder}: {reason}");
                FolderOutcome::Skipped { folder, reason }
            }
            LibraryEntry::Eligible(song) => {
                let folder = display_name(&song.path);
                match process_song(c, config, &song, &scratch_dir) {
                    Ok(()) => {
                        log::info!("Added video for {} by {}", song.title, song.artist);
                        FolderOutcome::Conformed { folder }
                    }
                    Err(error) => {
                        log::warn!("Failed {}: {error}", folder);
                        FolderOutcome::Failed { folder, error }
                    }
                }
            }
        };
        report.outcomes.push(outcome);
    }

    // Teardown guarantee: runs even when folders failed above.
    if let Err(err) = clear_scratch_dir(&scratch_dir) {
        log::warn!(
            "Could not clear scratch directory {}: {err}",
            scratch_dir.display()
        );
    }

    Ok(report)
}

fn process_song(
    c: &Collaborators<'_>,
    config: &CoreConfig,
    song: &SongFolder,
    scratch_dir: &Path,
) -> CoreResult<()> {
    let settings = config.quality.settings();
    let acquired = acquire_video(
        c.provider,
        c.probe,
        c.transcoder,
        song,
        settings,
        scratch_dir,
    )?;
    let target_secs = c.probe.duration_secs(&song.audio_file)?;
    conform_video(c.probe, c.transcoder, &acquired, target_secs, &song.path)?;
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
