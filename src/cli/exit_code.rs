use super::commands::{CommandResult, CommandSummary, InitSummary};
use super::exit_status::ExitStatus;

pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    match result.summary {
        CommandSummary::Init(InitSummary { created: false }) => ExitStatus::Failure,
        _ => ExitStatus::Success,
    }
}
