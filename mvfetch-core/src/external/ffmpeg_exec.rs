//! FFmpeg-sidecar-backed transcoding.
//!
//! Argument building is a pure function over the [`TranscodeJob`] so flag
//! placement can be unit tested without spawning ffmpeg.

use crate::error::{CoreResult, command_failed_error, command_start_error, command_wait_error};
use crate::external::{MediaTranscoder, TranscodeJob};

use ffmpeg_sidecar::command::FfmpegCommand;

/// [`MediaTranscoder`] implementation backed by `ffmpeg-sidecar`.
#[derive(Debug, Clone, Default)]
pub struct FfmpegTranscoder;

impl FfmpegTranscoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MediaTranscoder for FfmpegTranscoder {
    fn run(&self, job: &TranscodeJob) -> CoreResult<()> {
        let args = build_args(job);
        log::debug!("Running ffmpeg transcode: {args:?}");

        let mut cmd = FfmpegCommand::new();
        for arg in &args {
            cmd.arg(arg);
        }

        let mut child = cmd
            .spawn()
            .map_err(|e| command_start_error("ffmpeg", e))?;
        let status = child
            .wait()
            .map_err(|e| command_wait_error("ffmpeg", e))?;
        if !status.success() {
            log::error!("ffmpeg transcode failed: {status}");
            return Err(command_failed_error(
                "ffmpeg",
                status,
                "transcode process failed",
            ));
        }
        Ok(())
    }
}

/// Builds the full ffmpeg argument vector for a job.
///
/// Input-side options (`-stream_loop`, `-ss`) must precede `-i`; everything
/// else applies to the output.
#[must_use]
pub fn build_args(job: &TranscodeJob) -> Vec<String> {
    let mut args: Vec<String> = Vec::new();

    if job.loop_input {
        args.push("-stream_loop".into());
        args.push("-1".into());
    }
    if job.trim_secs.is_some() {
        args.push("-ss".into());
        args.push("0".into());
    }
    args.push("-i".into());
    args.push(job.input.to_string_lossy().into_owned());

    if let Some(trim) = job.trim_secs {
        args.push("-t".into());
        args.push(trim.to_string());
    }

    if job.mute {
        args.push("-an".into());
    } else {
        args.push("-c:a".into());
        args.push("aac".into());
        args.push("-b:a".into());
        args.push("128k".into());
    }

    args.push("-c:v".into());
    args.push("libx264".into());
    args.push("-preset".into());
    args.push(job.encode.preset.clone());
    args.push("-crf".into());
    args.push(job.encode.crf.to_string());
    if let Some(bitrate) = &job.encode.bitrate {
        args.push("-b:v".into());
        args.push(bitrate.clone());
    }

    if let Some(fps) = job.fps {
        args.push("-r".into());
        args.push(fps.to_string());
    }

    args.push("-y".into());
    args.push(job.output.to_string_lossy().into_owned());

    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::EncodeParams;
    use std::path::PathBuf;

    fn conform_job() -> TranscodeJob {
        TranscodeJob {
            input: PathBuf::from("/tmp/in.mp4"),
            output: PathBuf::from("/songs/video.mp4"),
            encode: EncodeParams {
                crf: 28,
                preset: "ultrafast".into(),
                bitrate: None,
            },
            trim_secs: Some(320.5),
            mute: true,
            fps: Some(30),
            loop_input: false,
        }
    }

    #[test]
    fn conform_args_trim_mute_fps() {
        let args = build_args(&conform_job());
        assert_eq!(args[0], "-ss");
        assert_eq!(args[1], "0");
        assert_eq!(args[2], "-i");
        assert!(args.windows(2).any(|w| w == ["-t", "320.5"]));
        assert!(args.contains(&"-an".to_string()));
        assert!(args.windows(2).any(|w| w == ["-r", "30"]));
        assert!(!args.contains(&"-b:v".to_string()));
        assert_eq!(args.last().unwrap(), "/songs/video.mp4");
        assert_eq!(args[args.len() - 2], "-y");
    }

    #[test]
    fn loop_flag_precedes_input() {
        let mut job = conform_job();
        job.loop_input = true;
        let args = build_args(&job);
        let loop_pos = args.iter().position(|a| a == "-stream_loop").unwrap();
        let input_pos = args.iter().position(|a| a == "-i").unwrap();
        assert!(loop_pos < input_pos);
        assert_eq!(args[loop_pos + 1], "-1");
    }

    #[test]
    fn normalization_args_keep_audio_and_bitrate() {
        let job = TranscodeJob {
            input: PathBuf::from("/tmp/raw.mp4"),
            output: PathBuf::from("/tmp/raw_h264.mp4"),
            encode: EncodeParams {
                crf: 26,
                preset: "veryfast".into(),
                bitrate: Some("3M".into()),
            },
            trim_secs: None,
            mute: false,
            fps: None,
            loop_input: false,
        };
        let args = build_args(&job);
        assert_eq!(args[0], "-i");
        assert!(args.windows(2).any(|w| w == ["-c:a", "aac"]));
        assert!(args.windows(2).any(|w| w == ["-b:v", "3M"]));
        assert!(args.windows(2).any(|w| w == ["-preset", "veryfast"]));
        assert!(!args.contains(&"-an".to_string()));
        assert!(!args.contains(&"-r".to_string()));
    }
}
