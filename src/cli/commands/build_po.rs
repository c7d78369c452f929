use anyhow::Result;

use super::super::{args::BuildPoCommand, report::print_catalog_event};
use super::build::run_build;
use super::{BuildPoSummary, CommandResult, CommandSummary};
use crate::{catalog::build_catalogs, project::Project};

pub fn build_po(cmd: BuildPoCommand) -> Result<CommandResult> {
    let project = Project::discover(&cmd.common.start_dir(), cmd.common.verbose)?;

    let build = run_build(&project)?;
    let outcome = build_catalogs(&project, print_catalog_event)?;

    Ok(CommandResult::new(CommandSummary::BuildPo(BuildPoSummary {
        build,
        template: outcome.template,
        updated: outcome.updated,
    })))
}
