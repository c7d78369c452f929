//! Translation catalogs: discovery, merging and installation.
//!
//! - `builder`: regenerate the template and merge it into every catalog
//! - `installer`: compile every catalog and install it into the locale tree

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::{Pattern, glob};

use crate::project::Project;

pub mod builder;
pub mod installer;

pub use builder::{BuildPoOutcome, build_catalogs};
pub use installer::{InstalledCatalog, install_catalogs};

/// One per-language translation file, `<po_dir>/<lang>.po`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub lang: String,
    /// Relative to the project root.
    pub path: PathBuf,
}

impl Catalog {
    /// Scratch location of the compiled catalog, next to the source.
    pub fn compiled(&self) -> PathBuf {
        self.path.with_extension("mo")
    }

    pub fn file_name(&self) -> String {
        format!("{}.po", self.lang)
    }
}

/// Progress notifications emitted while processing catalogs.
#[derive(Debug, Clone, Copy)]
pub enum CatalogEvent<'a> {
    Extracting { template: &'a Path },
    Updating { catalog: &'a Catalog },
    Installing { catalog: &'a Catalog },
    Installed { catalog: &'a Catalog, dest: &'a Path },
}

/// List the translation files of `project` in directory listing order.
///
/// A missing translation directory yields no catalogs.
pub fn discover_catalogs(project: &Project) -> Result<Vec<Catalog>> {
    let po_dir = project.po_dir();
    let abs_dir = project.path(po_dir);
    let pattern = format!(
        "{}/*.po",
        Pattern::escape(&abs_dir.to_string_lossy())
    );

    let entries =
        glob(&pattern).with_context(|| format!("Invalid catalog pattern: {}", pattern))?;

    let mut catalogs = Vec::new();
    for entry in entries {
        let path = entry.with_context(|| format!("Failed to list {}", abs_dir.display()))?;
        if !path.is_file() {
            continue;
        }
        let Some(lang) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if lang.is_empty() {
            continue;
        }
        catalogs.push(Catalog {
            lang: lang.to_string(),
            path: po_dir.join(format!("{}.po", lang)),
        });
    }

    Ok(catalogs)
}
