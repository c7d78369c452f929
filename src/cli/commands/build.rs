use anyhow::Result;

use super::super::args::BuildCommand;
use super::{BuildSummary, CommandResult, CommandSummary};
use crate::{package::stage_package, project::Project};

pub fn build(cmd: BuildCommand) -> Result<CommandResult> {
    let project = Project::discover(&cmd.common.start_dir(), cmd.common.verbose)?;
    let summary = run_build(&project)?;
    Ok(CommandResult::new(CommandSummary::Build(summary)))
}

/// The base build step, also run ahead of `build-po`.
pub(super) fn run_build(project: &Project) -> Result<BuildSummary> {
    let staged = stage_package(project)?;
    Ok(build_summary(project, staged.scripts.len(), staged.data_files))
}

pub(super) fn build_summary(
    project: &Project,
    scripts_staged: usize,
    data_files_checked: usize,
) -> BuildSummary {
    let build_dir = project.scripts_build_dir();
    let build_dir = build_dir
        .strip_prefix(&project.root)
        .unwrap_or(build_dir.as_path())
        .to_path_buf();
    BuildSummary {
        scripts_staged,
        data_files_checked,
        build_dir,
    }
}
