//! Project context: configuration plus the resolved project layout.
//!
//! Every command starts by building a [`Project`]. All project-relative
//! paths from the configuration are resolved against [`Project::root`],
//! which is also the working directory for the gettext tools.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{Config, load_config};
use crate::tools::Toolchain;

#[derive(Debug)]
pub struct Project {
    /// Directory holding the config file, or the start directory when
    /// running on defaults.
    pub root: PathBuf,
    pub config: Config,
    pub config_path: Option<PathBuf>,
    pub verbose: bool,
}

impl Project {
    /// Load the project containing `start_dir`.
    pub fn discover(start_dir: &Path, verbose: bool) -> Result<Self> {
        let start_dir = start_dir
            .canonicalize()
            .with_context(|| format!("Project directory not found: {:?}", start_dir))?;

        let loaded = load_config(&start_dir)?;

        if verbose && !loaded.from_file() {
            eprintln!("Note: No .podistrc.json found, using default configuration");
        }

        let root = match loaded.path.as_deref().and_then(Path::parent) {
            Some(dir) => dir.to_path_buf(),
            None => start_dir,
        };

        Ok(Self {
            root,
            config: loaded.config,
            config_path: loaded.path,
            verbose,
        })
    }

    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
            config_path: None,
            verbose: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Resolve a project-relative path.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Translation directory, relative to the project root.
    pub fn po_dir(&self) -> &Path {
        Path::new(&self.config.po_dir)
    }

    /// Template path, relative to the project root.
    pub fn template(&self) -> PathBuf {
        self.po_dir().join(format!("{}.pot", self.config.name))
    }

    pub fn scripts_build_dir(&self) -> PathBuf {
        self.path(&self.config.build_dir).join("scripts")
    }

    pub fn toolchain(&self) -> Toolchain {
        Toolchain::new(&self.root, &self.config.tools, self.verbose)
    }

    /// Directory receiving `<lang>.mo` under `root`.
    pub fn locale_dest_dir(&self, root: &Path, lang: &str) -> PathBuf {
        under_root(root, &self.config.locale_dir)
            .join(lang)
            .join("LC_MESSAGES")
    }

    /// Installed path of the compiled catalog for `lang`.
    pub fn locale_dest_file(&self, root: &Path, lang: &str) -> PathBuf {
        self.locale_dest_dir(root, lang)
            .join(format!("{}.mo", self.config.name))
    }

    pub fn bin_dir(&self, root: &Path) -> PathBuf {
        under_root(root, &self.config.prefix).join("bin")
    }

    /// Data file targets: absolute ones are re-rooted, relative ones land
    /// under the prefix.
    pub fn data_dir(&self, root: &Path, target: &str) -> PathBuf {
        if Path::new(target).has_root() {
            under_root(root, target)
        } else {
            under_root(root, &self.config.prefix).join(target)
        }
    }
}

/// Join `path` below `root`, dropping any root or prefix component of `path`.
///
/// `under_root("/tmp/x", "/usr/share")` is `/tmp/x/usr/share`.
pub fn under_root(root: &Path, path: impl AsRef<Path>) -> PathBuf {
    let mut joined = root.to_path_buf();
    for component in path.as_ref().components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            other => joined.push(other),
        }
    }
    joined
}
