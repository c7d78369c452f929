use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use super::{StageOutcome, copy_file, make_executable};
use crate::project::Project;

#[derive(Debug, Default)]
pub struct InstallOutcome {
    pub scripts: Vec<PathBuf>,
    pub data_files: Vec<PathBuf>,
}

/// Install staged scripts into `<root><prefix>/bin` and the data files
/// into their target directories under `root`.
pub fn install_package(
    project: &Project,
    staged: &StageOutcome,
    root: &Path,
) -> Result<InstallOutcome> {
    let mut outcome = InstallOutcome::default();

    let bin_dir = project.bin_dir(root);
    for script in &staged.scripts {
        let Some(file_name) = script.file_name() else {
            continue;
        };
        let dest = bin_dir.join(file_name);
        copy_file(script, &dest)?;
        make_executable(&dest)?;
        outcome.scripts.push(dest);
    }

    for group in &project.config.data_files {
        let target = project.data_dir(root, &group.target);
        for file in &group.files {
            let src = project.path(file);
            if src.is_dir() {
                install_dir(&src, &target, &mut outcome.data_files)?;
            } else if let Some(file_name) = src.file_name() {
                let dest = target.join(file_name);
                copy_file(&src, &dest)?;
                outcome.data_files.push(dest);
            }
        }
    }

    Ok(outcome)
}

/// Copy the tree at `src` to `<target>/<src name>/...`.
///
/// Symlinks are followed and installed as regular copies of their targets.
fn install_dir(src: &Path, target: &Path, installed: &mut Vec<PathBuf>) -> Result<()> {
    let base = src.parent().unwrap_or(src);
    for entry in WalkDir::new(src).follow_links(true).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to read {}", src.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(base)
            .with_context(|| format!("Unexpected path {}", entry.path().display()))?;
        let dest = target.join(relative);
        copy_file(entry.path(), &dest)?;
        installed.push(dest);
    }
    Ok(())
}
