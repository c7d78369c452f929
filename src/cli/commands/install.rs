use anyhow::Result;

use super::super::{args::InstallCommand, report::print_catalog_event};
use super::build::build_summary;
use super::{CommandResult, CommandSummary, InstallSummary};
use crate::{
    catalog::install_catalogs,
    package::{install_package, stage_package},
    project::Project,
};

pub fn install(cmd: InstallCommand) -> Result<CommandResult> {
    let project = Project::discover(&cmd.common.start_dir(), cmd.common.verbose)?;
    let root = cmd.root;

    let staged = stage_package(&project)?;
    let build = build_summary(&project, staged.scripts.len(), staged.data_files);

    let installed = install_package(&project, &staged, &root)?;
    let catalogs = install_catalogs(&project, &root, print_catalog_event)?;

    Ok(CommandResult::new(CommandSummary::Install(InstallSummary {
        build,
        root,
        scripts: installed.scripts,
        data_files: installed.data_files,
        catalogs,
    })))
}
