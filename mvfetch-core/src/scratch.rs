//! Scratch directory management for in-flight downloads and re-encodes.
//!
//! The scratch directory is created before the run and cleared after it,
//! regardless of how many folders failed. Clearing removes files only; the
//! directory itself is kept for the next run.

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};

use std::fs;
use std::path::{Path, PathBuf};

/// Creates the scratch directory for a run, if absent.
pub fn prepare_scratch_dir(config: &CoreConfig) -> CoreResult<PathBuf> {
    let dir = config.effective_work_dir();
    fs::create_dir_all(&dir).map_err(|e| CoreError::ScratchSetup(dir.clone(), e))?;
    Ok(dir)
}

/// Removes every file in the scratch directory.
pub fn clear_scratch_dir(dir: &Path) -> CoreResult<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}
