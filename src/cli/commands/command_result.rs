use std::path::PathBuf;

use crate::catalog::InstalledCatalog;

#[derive(Debug)]
pub enum CommandSummary {
    Build(BuildSummary),
    BuildPo(BuildPoSummary),
    Install(InstallSummary),
    Init(InitSummary),
    Info(InfoSummary),
}

#[derive(Debug)]
pub struct BuildSummary {
    pub scripts_staged: usize,
    pub data_files_checked: usize,
    /// Staging directory, relative to the project root when possible.
    pub build_dir: PathBuf,
}

#[derive(Debug)]
pub struct BuildPoSummary {
    pub build: BuildSummary,
    pub template: PathBuf,
    pub updated: Vec<String>,
}

#[derive(Debug)]
pub struct InstallSummary {
    pub build: BuildSummary,
    pub root: PathBuf,
    pub scripts: Vec<PathBuf>,
    pub data_files: Vec<PathBuf>,
    pub catalogs: Vec<InstalledCatalog>,
}

#[derive(Debug)]
pub struct InfoSummary {
    /// Labelled metadata values, in display order.
    pub fields: Vec<(&'static str, String)>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running podist commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self { summary }
    }
}
