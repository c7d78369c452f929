use anyhow::Result;

use super::super::args::InfoCommand;
use super::{CommandResult, CommandSummary, InfoSummary};
use crate::project::Project;

pub fn info(cmd: InfoCommand) -> Result<CommandResult> {
    let project = Project::discover(&cmd.common.start_dir(), cmd.common.verbose)?;
    Ok(CommandResult::new(CommandSummary::Info(InfoSummary {
        fields: project.config.metadata(),
    })))
}
