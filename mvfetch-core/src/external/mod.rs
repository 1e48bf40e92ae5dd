//! Interactions with external media tools.
//!
//! The pipeline talks to three collaborators through traits so the
//! orchestrator can be tested without spawning processes: a video search
//! provider (yt-dlp), a media probe (ffprobe), and a transcoder (ffmpeg).
//! The production implementations live in the submodules here.

use crate::error::{CoreError, CoreResult};

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub mod ffmpeg_exec;
pub mod ffprobe_exec;
pub mod ytdlp;

pub use ffmpeg_exec::FfmpegTranscoder;
pub use ffprobe_exec::FfprobeProbe;
pub use ytdlp::YtdlpProvider;

/// Searches an external video source and downloads the single best match
/// to the given destination path.
pub trait VideoSearchProvider {
    fn fetch(&self, query: &str, dest: &Path) -> CoreResult<()>;
}

/// Reads stream and container metadata from a media file.
pub trait MediaProbe {
    /// Codec name of the first video stream (e.g. "h264", "av1").
    fn video_codec(&self, path: &Path) -> CoreResult<String>;

    /// Container duration in seconds.
    fn duration_secs(&self, path: &Path) -> CoreResult<f64>;
}

/// Encoder parameters for a transcode pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeParams {
    pub crf: u8,
    pub preset: String,
    /// Target video bitrate; only set during codec normalization.
    pub bitrate: Option<String>,
}

/// A single ffmpeg transform: re-encode with optional trim, mute, frame-rate
/// change, and input looping.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscodeJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub encode: EncodeParams,
    /// Trim the output to this many seconds from time zero.
    pub trim_secs: Option<f64>,
    /// Drop all audio streams from the output.
    pub mute: bool,
    /// Normalize the output frame rate.
    pub fps: Option<u32>,
    /// Loop the input indefinitely; only meaningful together with `trim_secs`.
    pub loop_input: bool,
}

/// Runs ffmpeg transform jobs.
pub trait MediaTranscoder {
    fn run(&self, job: &TranscodeJob) -> CoreResult<()>;
}

/// Checks that a required external command is available and executable.
pub(crate) fn check_dependency(cmd_name: &str, version_arg: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg(version_arg)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{cmd_name}': {e}");
            Err(CoreError::CommandStart(cmd_name.to_string(), e))
        }
    }
}

/// Verifies every external tool the pipeline shells out to.
pub fn check_external_tools() -> CoreResult<()> {
    check_dependency("ffmpeg", "-version")?;
    check_dependency("ffprobe", "-version")?;
    check_dependency("yt-dlp", "--version")?;
    Ok(())
}
