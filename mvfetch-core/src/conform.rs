//! Mute, trim, and frame-rate normalization of acquired videos.
//!
//! Produces `video.mp4` inside the song folder: no audio stream, duration
//! equal to the audio track's, 30 fps. When the acquired source is shorter
//! than the audio the input is looped so the output still covers the full
//! track.

use crate::acquire::AcquiredVideo;
use crate::config::{CONFORM_CRF, CONFORM_FPS, CONFORM_PRESET, VIDEO_FILENAME};
use crate::error::{CoreError, CoreResult};
use crate::external::{EncodeParams, MediaProbe, MediaTranscoder, TranscodeJob};

use std::path::{Path, PathBuf};

/// Writes the conformed `video.mp4` into the song folder.
///
/// Overwrites any partial prior attempt. Failure leaves the folder without a
/// video, so the next run reprocesses it.
pub fn conform_video(
    probe: &dyn MediaProbe,
    transcoder: &dyn MediaTranscoder,
    acquired: &AcquiredVideo,
    target_secs: f64,
    song_dir: &Path,
) -> CoreResult<PathBuf> {
    let output = song_dir.join(VIDEO_FILENAME);

    // The source duration is not authoritative; if it cannot be read, assume
    // it covers the audio and let the trim do its work.
    let loop_input = match probe.duration_secs(&acquired.path) {
        Ok(video_secs) => video_secs < target_secs,
        Err(err) => {
            log::warn!(
                "Could not probe duration of {}: {err}",
                acquired.path.display()
            );
            false
        }
    };
    if loop_input {
        log::debug!(
            "Source video shorter than audio target ({target_secs}s), looping input"
        );
    }

    let job = TranscodeJob {
        input: acquired.path.clone(),
        output: output.clone(),
        encode: EncodeParams {
            crf: CONFORM_CRF,
            preset: CONFORM_PRESET.to_string(),
            bitrate: None,
        },
        trim_secs: Some(target_secs),
        mute: true,
        fps: Some(CONFORM_FPS),
        loop_input,
    };
    transcoder
        .run(&job)
        .map_err(|e| CoreError::Conform(e.to_string()))?;

    Ok(output)
}
