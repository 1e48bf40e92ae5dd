// mvfetch-cli/src/main.rs
//
// Command-line entry point for the mvfetch music-video augmentation tool.
//
// Responsibilities:
// - Parsing CLI arguments (see cli.rs).
// - Initializing env_logger (RUST_LOG, default "info").
// - Checking the external tools (ffmpeg, ffprobe, yt-dlp) before the run.
// - Invoking the core pipeline (`mvfetch_core::process_library`).
// - Printing the run summary and mapping outcomes to the exit code:
//   0 = all folders succeeded or were skipped, 1 = at least one folder
//   failed, 2 = run-fatal error.

use clap::Parser;
use console::style;
use env_logger::Env;
use mvfetch_core::external::{FfmpegTranscoder, FfprobeProbe, YtdlpProvider};
use mvfetch_core::{Collaborators, CoreConfig, FolderOutcome, RunReport, check_external_tools};
use std::process;

mod cli;

use cli::{AugmentArgs, Cli, Commands};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let exit_code = match cli.command {
        Commands::Augment(args) => run_augment(args),
    };
    process::exit(exit_code);
}

fn run_augment(args: AugmentArgs) -> i32 {
    println!("{}", style("========================================").cyan());
    println!(
        "{} {}",
        style("mvfetch run started:").bold(),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "{} {}",
        style("Library:").bold(),
        args.library_dir.display()
    );
    println!("{}", style("========================================").cyan());

    if let Err(e) = check_external_tools() {
        eprintln!("{} {e}", style("Error:").red().bold());
        return 2;
    }

    let config = CoreConfig {
        library_dir: args.library_dir,
        work_dir: args.work_dir,
        quality: args.quality,
    };
    log::debug!(
        "Quality: {:?}, scratch dir: {}",
        config.quality,
        config.effective_work_dir().display()
    );

    let provider = YtdlpProvider::new();
    let probe = FfprobeProbe::new();
    let transcoder = FfmpegTranscoder::new();
    let collaborators = Collaborators {
        provider: &provider,
        probe: &probe,
        transcoder: &transcoder,
    };

    match mvfetch_core::process_library(&collaborators, &config) {
        Ok(report) => {
            print_summary(&report);
            i32::from(report.has_failures())
        }
        Err(e) => {
            eprintln!("{} {e}", style("Fatal:").red().bold());
            2
        }
    }
}

fn print_summary(report: &RunReport) {
    println!("{}", style("========================================").cyan());
    println!("{}", style("Run summary:").bold());
    println!(
        "  Added:   {}",
        style(report.conformed_count()).green().bold()
    );
    println!("  Skipped: {}", report.skipped_count());
    println!("  Failed:  {}", style(report.failed_count()).red().bold());

    for outcome in &report.outcomes {
        if let FolderOutcome::Failed { folder, error } = outcome {
            println!("  {} {folder}: {error}", style("[FAIL]").red());
        }
    }
    println!("{}", style("========================================").cyan());
}
