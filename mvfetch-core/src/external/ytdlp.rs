//! yt-dlp-backed video search and download.
//!
//! One blocking subprocess per acquisition. The query uses yt-dlp's
//! `ytsearch1:` prefix for single-result semantics; `--no-playlist` keeps a
//! playlist match from expanding into multiple downloads.

use crate::error::{CoreError, CoreResult};
use crate::external::VideoSearchProvider;

use std::io;
use std::path::Path;
use std::process::Command;

/// Format selector asking for an mp4-compatible stream pair.
const FORMAT_SELECTOR: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/mp4";

/// Network stall bound so a dead connection fails the folder instead of
/// hanging the run.
const SOCKET_TIMEOUT_SECS: u32 = 30;

/// [`VideoSearchProvider`] implementation shelling out to `yt-dlp`.
#[derive(Debug, Clone, Default)]
pub struct YtdlpProvider;

impl YtdlpProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl VideoSearchProvider for YtdlpProvider {
    fn fetch(&self, query: &str, dest: &Path) -> CoreResult<()> {
        log::debug!("Fetching video for {query:?} to {}", dest.display());

        let output = Command::new("yt-dlp")
            .arg(format!("ytsearch1:{query}"))
            .arg("--no-playlist")
            .arg("-f")
            .arg(FORMAT_SELECTOR)
            .arg("--quiet")
            .arg("--socket-timeout")
            .arg(SOCKET_TIMEOUT_SECS.to_string())
            .arg("--output")
            .arg(dest)
            .output()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    CoreError::DependencyNotFound("yt-dlp".to_string())
                } else {
                    CoreError::CommandStart("yt-dlp".to_string(), e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CoreError::Acquisition(format!(
                "yt-dlp failed for {query:?}: {}",
                stderr.trim()
            )));
        }

        // yt-dlp exits zero on an empty search result, so verify the file.
        if !dest.is_file() {
            return Err(CoreError::Acquisition(format!(
                "no search result for {query:?}"
            )));
        }

        Ok(())
    }
}
