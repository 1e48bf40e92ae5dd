//! Core library for augmenting song libraries with background music videos.
//!
//! Each song folder (named `"<Artist> - <Title> (<tag>)"`, containing
//! `song.opus`) gets a muted `video.mp4` trimmed to the audio track's exact
//! duration: the library is scanned, a candidate video is searched and
//! downloaded per song, normalized to a conform-safe codec when necessary,
//! then muted, trimmed, and frame-rate-normalized into the folder.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mvfetch_core::{Collaborators, CoreConfig, process_library};
//! use mvfetch_core::external::{FfmpegTranscoder, FfprobeProbe, YtdlpProvider};
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(PathBuf::from("/path/to/songs"));
//!
//! let provider = YtdlpProvider::new();
//! let probe = FfprobeProbe::new();
//! let transcoder = FfmpegTranscoder::new();
//! let collaborators = Collaborators {
//!     provider: &provider,
//!     probe: &probe,
//!     transcoder: &transcoder,
//! };
//!
//! let report = process_library(&collaborators, &config).unwrap();
//! println!("added {} videos", report.conformed_count());
//! ```

pub mod acquire;
pub mod config;
pub mod conform;
pub mod discovery;
pub mod error;
pub mod external;
pub mod identity;
pub mod pipeline;
pub mod scratch;

// Re-exports for public API
pub use acquire::{AcquiredVideo, CONFORM_SAFE_CODECS};
pub use config::{CoreConfig, QualityLevel, QualitySettings};
pub use discovery::{LibraryEntry, SkipReason, SongFolder, scan_library};
pub use error::{CoreError, CoreResult};
pub use external::{
    EncodeParams, MediaProbe, MediaTranscoder, TranscodeJob, VideoSearchProvider,
    check_external_tools,
};
pub use identity::{SongIdentity, parse_song_name};
pub use pipeline::{Collaborators, FolderOutcome, RunReport, process_library};
