//! Configuration structures and constants for the mvfetch-core library.
//!
//! The quality level only affects codec normalization (re-encoding an
//! unsuitable source codec to H.264); the conform stage uses fixed encoder
//! values regardless of quality.

use std::path::PathBuf;
use std::str::FromStr;

/// Canonical audio track filename inside a song folder.
pub const AUDIO_FILENAME: &str = "song.opus";

/// Artifact filename written into a song folder on success.
pub const VIDEO_FILENAME: &str = "video.mp4";

/// CRF used by the conform stage (mute + trim + fps normalize).
pub const CONFORM_CRF: u8 = 28;

/// Encoder preset used by the conform stage.
pub const CONFORM_PRESET: &str = "ultrafast";

/// Frame rate every conformed video is normalized to.
pub const CONFORM_FPS: u32 = 30;

/// Named quality level selecting the normalization encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QualityLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityLevel {
    /// Returns the encoder settings for this quality level.
    #[must_use]
    pub fn settings(self) -> QualitySettings {
        match self {
            QualityLevel::Low => QualitySettings {
                crf: 30,
                bitrate: "1.5M",
                preset: "faster",
            },
            QualityLevel::Medium => QualitySettings {
                crf: 26,
                bitrate: "3M",
                preset: "veryfast",
            },
            QualityLevel::High => QualitySettings {
                crf: 22,
                bitrate: "5M",
                preset: "slow",
            },
        }
    }
}

impl FromStr for QualityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(QualityLevel::Low),
            "medium" => Ok(QualityLevel::Medium),
            "high" => Ok(QualityLevel::High),
            other => Err(format!(
                "unknown quality level '{other}' (expected low, medium, or high)"
            )),
        }
    }
}

/// Encoder settings used during codec normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualitySettings {
    pub crf: u8,
    pub bitrate: &'static str,
    pub preset: &'static str,
}

/// Main configuration for a library augmentation run.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Root directory containing one song folder per track.
    pub library_dir: PathBuf,

    /// Scratch directory for in-flight downloads and re-encodes
    /// (defaults to `mvfetch` under the system temp directory).
    pub work_dir: Option<PathBuf>,

    /// Quality level for codec normalization.
    pub quality: QualityLevel,
}

impl CoreConfig {
    #[must_use]
    pub fn new(library_dir: PathBuf) -> Self {
        Self {
            library_dir,
            work_dir: None,
            quality: QualityLevel::default(),
        }
    }

    /// Resolves the scratch directory for this run.
    #[must_use]
    pub fn effective_work_dir(&self) -> PathBuf {
        self.work_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("mvfetch"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_settings_table() {
        assert_eq!(QualityLevel::Low.settings().crf, 30);
        assert_eq!(QualityLevel::Medium.settings().bitrate, "3M");
        assert_eq!(QualityLevel::High.settings().preset, "slow");
    }

    #[test]
    fn quality_level_from_str() {
        assert_eq!("low".parse::<QualityLevel>().unwrap(), QualityLevel::Low);
        assert_eq!("HIGH".parse::<QualityLevel>().unwrap(), QualityLevel::High);
        assert_eq!(
            "Medium".parse::<QualityLevel>().unwrap(),
            QualityLevel::Medium
        );
        assert!("ultra".parse::<QualityLevel>().is_err());
    }
}
