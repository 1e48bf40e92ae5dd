//! FFprobe-backed media analysis.
//!
//! Wraps the `ffprobe` crate to extract the two pieces of metadata the
//! pipeline needs: the video codec of an acquired file (for the
//! normalization decision) and the container duration (the audio file's
//! duration is the authoritative trim target).

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::external::MediaProbe;

use ffprobe::{FfProbeError, ffprobe};
use std::path::Path;

/// [`MediaProbe`] implementation backed by the `ffprobe` crate.
#[derive(Debug, Clone, Default)]
pub struct FfprobeProbe;

impl FfprobeProbe {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MediaProbe for FfprobeProbe {
    fn video_codec(&self, path: &Path) -> CoreResult<String> {
        log::debug!("Running ffprobe for video codec on: {}", path.display());
        match ffprobe(path) {
            Ok(metadata) => {
                let stream = metadata
                    .streams
                    .iter()
                    .find(|s| s.codec_type.as_deref() == Some("video"))
                    .ok_or_else(|| {
                        CoreError::Probe(format!("No video stream found in {}", path.display()))
                    })?;
                stream.codec_name.clone().ok_or_else(|| {
                    CoreError::Probe(format!(
                        "Video stream missing codec name in {}",
                        path.display()
                    ))
                })
            }
            Err(err) => {
                log::error!(
                    "ffprobe failed for video codec on {}: {err:?}",
                    path.display()
                );
                Err(map_ffprobe_error(err, "video codec"))
            }
        }
    }

    fn duration_secs(&self, path: &Path) -> CoreResult<f64> {
        log::debug!("Running ffprobe for duration on: {}", path.display());
        match ffprobe(path) {
            Ok(metadata) => metadata
                .format
                .duration
                .as_deref()
                .and_then(|d| d.parse::<f64>().ok())
                .ok_or_else(|| {
                    CoreError::Probe(format!(
                        "No duration metadata in {}",
                        path.display()
                    ))
                }),
            Err(err) => {
                log::error!("ffprobe failed for duration on {}: {err:?}", path.display());
                Err(map_ffprobe_error(err, "duration"))
            }
        }
    }
}

fn map_ffprobe_error(err: FfProbeError, context: &str) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => command_start_error(format!("ffprobe ({context})"), io_err),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error(format!("ffprobe ({context})"), output.status, stderr)
        }
        FfProbeError::Deserialize(err) => CoreError::Probe(format!(
            "ffprobe {context} output deserialization: {err}"
        )),
        _ => CoreError::Probe(format!("Unknown ffprobe error during {context}: {err:?}")),
    }
}
