//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: stage scripts and check data files
//! - `build-po`: `build`, then regenerate the template and merge catalogs
//! - `install`: `build`, install scripts and data files, then compile and
//!   install the translation catalogs
//! - `init`: write a default configuration file
//! - `info`: show the package metadata

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by the packaging commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project directory (defaults to the current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Echo every tool invocation
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn start_dir(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct BuildPoCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InstallCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Install everything relative to this directory
    #[arg(long, env = "PODIST_ROOT", default_value = "/")]
    pub root: PathBuf,
}

#[derive(Debug, Args)]
pub struct InfoCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Stage scripts into the build directory
    Build(BuildCommand),
    /// Build, then regenerate the translation template and merge it into every catalog
    BuildPo(BuildPoCommand),
    /// Build, then install scripts, data files and compiled translations
    Install(InstallCommand),
    /// Initialize a new .podistrc.json configuration file
    Init,
    /// Show the package metadata
    Info(InfoCommand),
}
