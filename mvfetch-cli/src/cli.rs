// mvfetch-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use mvfetch_core::QualityLevel;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mvfetch: background music videos for song libraries",
    long_about = "Searches, downloads, and conforms a muted background music video \
                  for every song folder in a library, via yt-dlp and ffmpeg."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Adds a muted, trimmed music video to every eligible song folder
    Augment(AugmentArgs),
}

#[derive(Parser, Debug)]
pub struct AugmentArgs {
    /// Library root containing one song folder per track
    #[arg(required = true, value_name = "LIBRARY_DIR")]
    pub library_dir: PathBuf,

    /// Optional: scratch directory for in-flight downloads
    /// (defaults to "mvfetch" under the system temp directory)
    #[arg(short, long, value_name = "WORK_DIR")]
    pub work_dir: Option<PathBuf>,

    /// Quality level for codec normalization re-encodes
    #[arg(short, long, value_name = "LEVEL", default_value = "medium")]
    pub quality: QualityLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_augment_basic_args() {
        let cli = Cli::parse_from(["mvfetch", "augment", "songs_dir"]);

        match cli.command {
            Commands::Augment(args) => {
                assert_eq!(args.library_dir, PathBuf::from("songs_dir"));
                assert!(args.work_dir.is_none());
                assert_eq!(args.quality, QualityLevel::Medium);
            }
        }
    }

    #[test]
    fn test_parse_augment_with_overrides() {
        let cli = Cli::parse_from([
            "mvfetch",
            "augment",
            "songs_dir",
            "--work-dir",
            "scratch",
            "--quality",
            "high",
        ]);

        match cli.command {
            Commands::Augment(args) => {
                assert_eq!(args.work_dir, Some(PathBuf::from("scratch")));
                assert_eq!(args.quality, QualityLevel::High);
            }
        }
    }

    #[test]
    fn test_parse_rejects_unknown_quality() {
        let result = Cli::try_parse_from(["mvfetch", "augment", "songs", "--quality", "ultra"]);
        assert!(result.is_err());
    }
}
