//! Video acquisition and codec normalization.
//!
//! Downloads a candidate video into the scratch directory, probes its codec,
//! and re-encodes it to H.264 when the source codec is one the conform stage
//! cannot process. The suitability decision is table-driven against
//! [`CONFORM_SAFE_CODECS`], never inferred.

use crate::config::QualitySettings;
use crate::discovery::SongFolder;
use crate::error::{CoreError, CoreResult};
use crate::external::{EncodeParams, MediaProbe, MediaTranscoder, TranscodeJob, VideoSearchProvider};

use std::path::{Path, PathBuf};

/// Codecs the conform stage handles without re-encoding first.
pub const CONFORM_SAFE_CODECS: &[&str] = &["h264", "hevc", "vp8", "vp9", "mpeg4", "mpeg2video"];

/// A downloaded (and possibly normalized) video in scratch storage.
#[derive(Debug, Clone)]
pub struct AcquiredVideo {
    pub path: PathBuf,
    pub codec: String,
}

/// Builds the search query for a song.
#[must_use]
pub fn build_query(artist: &str, title: &str) -> String {
    format!("{artist} {title} music video")
}

/// Scratch destination for a song's raw download.
///
/// Derived from the song folder's own directory name, which is unique within
/// a library root, so two folders can never collide on a scratch file.
#[must_use]
pub fn scratch_video_path(work_dir: &Path, folder_name: &str) -> PathBuf {
    work_dir.join(format!("{folder_name}.mp4"))
}

/// True when the codec is in the conform-safe allow-list.
#[must_use]
pub fn is_conform_safe(codec: &str) -> bool {
    CONFORM_SAFE_CODECS.contains(&codec)
}

/// Obtains a conform-ready video for a song into the scratch directory.
///
/// Acquisition and normalization failures are folder-local; the caller skips
/// the folder and continues the run.
pub fn acquire_video(
    provider: &dyn VideoSearchProvider,
    probe: &dyn MediaProbe,
    transcoder: &dyn MediaTranscoder,
    song: &SongFolder,
    settings: QualitySettings,
    work_dir: &Path,
) -> CoreResult<AcquiredVideo> {
    let folder_name = song
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            CoreError::Acquisition(format!("unusable folder name: {}", song.path.display()))
        })?;

    let query = build_query(&song.artist, &song.title);
    let raw_path = scratch_video_path(work_dir, folder_name);
    provider.fetch(&query, &raw_path)?;

    let codec = probe.video_codec(&raw_path)?;
    log::debug!("Probed codec for {}: {codec}", raw_path.display());

    if is_conform_safe(&codec) {
        return Ok(AcquiredVideo {
            path: raw_path,
            codec,
        });
    }

    log::info!("{codec} is not conform-safe, re-encoding to H.264");
    let normalized_path = normalized_video_path(&raw_path);
    let job = TranscodeJob {
        input: raw_path,
        output: normalized_path.clone(),
        encode: EncodeParams {
            crf: settings.crf,
            preset: settings.preset.to_string(),
            bitrate: Some(settings.bitrate.to_string()),
        },
        trim_secs: None,
        mute: false,
        fps: None,
        loop_input: false,
    };
    transcoder
        .run(&job)
        .map_err(|e| CoreError::CodecNormalization(e.to_string()))?;

    Ok(AcquiredVideo {
        path: normalized_path,
        codec: "h264".to_string(),
    })
}

fn normalized_video_path(raw_path: &Path) -> PathBuf {
    let stem = raw_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    raw_path.with_file_name(format!("{stem}_h264.mp4"))
}
