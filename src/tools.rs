//! Invocation of the external gettext tools.
//!
//! The tools are black boxes: they get project-relative paths, run with the
//! project root as working directory, and inherit stdout/stderr so their
//! diagnostics reach the user unchanged. Any non-zero exit is an error.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::config::ToolsConfig;

#[derive(Debug, Clone)]
pub struct Toolchain {
    working_dir: PathBuf,
    xgettext: String,
    msgmerge: String,
    msgfmt: String,
    verbose: bool,
}

impl Toolchain {
    pub fn new(working_dir: &Path, tools: &ToolsConfig, verbose: bool) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            xgettext: tools.xgettext.clone(),
            msgmerge: tools.msgmerge.clone(),
            msgfmt: tools.msgfmt.clone(),
            verbose,
        }
    }

    /// Regenerate `output` from `sources`.
    pub fn extract(
        &self,
        language: &str,
        keyword: &str,
        output: &Path,
        sources: &[String],
    ) -> Result<()> {
        let mut args = vec![
            "-L".to_string(),
            language.to_string(),
            format!("--keyword={}", keyword),
            format!("--output={}", output.display()),
        ];
        args.extend(sources.iter().cloned());
        self.run(&self.xgettext, &args)
    }

    /// Merge `template` into `catalog` in place.
    pub fn merge(&self, catalog: &Path, template: &Path) -> Result<()> {
        self.run(
            &self.msgmerge,
            [
                OsStr::new("--update"),
                OsStr::new("--backup=off"),
                OsStr::new("--no-wrap"),
                OsStr::new("--sort-by-file"),
                catalog.as_os_str(),
                template.as_os_str(),
            ],
        )
    }

    /// Compile `catalog` into `output`.
    pub fn compile(&self, catalog: &Path, output: &Path) -> Result<()> {
        self.run(
            &self.msgfmt,
            [
                catalog.as_os_str(),
                OsStr::new("-o"),
                output.as_os_str(),
            ],
        )
    }

    fn run<I, S>(&self, program: &str, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<S> = args.into_iter().collect();

        if self.verbose {
            let line = std::iter::once(program.to_string())
                .chain(args.iter().map(|a| a.as_ref().to_string_lossy().into_owned()))
                .collect::<Vec<_>>()
                .join(" ");
            eprintln!("  {} {}", "running".dimmed(), line.dimmed());
        }

        let status = Command::new(program)
            .args(&args)
            .current_dir(&self.working_dir)
            .status()
            .with_context(|| format!("Failed to run `{}`", program))?;

        if !status.success() {
            match status.code() {
                Some(code) => bail!("`{}` exited with status {}", program, code),
                None => bail!("`{}` was terminated by a signal", program),
            }
        }

        Ok(())
    }
}
