use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};

use super::{copy_file, make_executable};
use crate::project::Project;

#[derive(Debug, Default)]
pub struct StageOutcome {
    /// Staged copies of the scripts.
    pub scripts: Vec<PathBuf>,
    /// Number of data file entries checked.
    pub data_files: usize,
}

/// Copy the scripts into `<build_dir>/scripts` and check that every
/// declared data file exists.
pub fn stage_package(project: &Project) -> Result<StageOutcome> {
    let config = &project.config;
    let scripts_dir = project.scripts_build_dir();
    fs::create_dir_all(&scripts_dir)
        .with_context(|| format!("Failed to create directory: {}", scripts_dir.display()))?;

    let mut outcome = StageOutcome::default();

    for script in &config.scripts {
        let src = project.path(script);
        if !src.is_file() {
            bail!("Script not found: {}", script);
        }
        let Some(file_name) = src.file_name() else {
            bail!("Invalid script path: {}", script);
        };
        let dest = scripts_dir.join(file_name);
        copy_file(&src, &dest)?;
        make_executable(&dest)?;
        outcome.scripts.push(dest);
    }

    for group in &config.data_files {
        for file in &group.files {
            if !project.path(file).exists() {
                bail!("Data file not found: {} (target {})", file, group.target);
            }
            outcome.data_files += 1;
        }
    }

    Ok(outcome)
}
