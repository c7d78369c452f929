use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{CatalogEvent, discover_catalogs};
use crate::project::Project;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledCatalog {
    pub lang: String,
    pub dest: PathBuf,
}

/// Compile every catalog and install it as
/// `<root>/<locale_dir>/<lang>/LC_MESSAGES/<name>.mo`.
///
/// The compiled file is removed from the translation directory once
/// copied. The first failure aborts; languages installed before it stay in
/// place and later ones are not attempted.
pub fn install_catalogs(
    project: &Project,
    root: &Path,
    mut on_event: impl FnMut(CatalogEvent<'_>),
) -> Result<Vec<InstalledCatalog>> {
    let toolchain = project.toolchain();
    let mut installed = Vec::new();

    for catalog in discover_catalogs(project)? {
        on_event(CatalogEvent::Installing { catalog: &catalog });

        let compiled = catalog.compiled();
        toolchain
            .compile(&catalog.path, &compiled)
            .with_context(|| format!("Failed to compile {}", catalog.path.display()))?;

        let dest_dir = project.locale_dest_dir(root, &catalog.lang);
        fs::create_dir_all(&dest_dir)
            .with_context(|| format!("Failed to create directory: {}", dest_dir.display()))?;

        let dest = project.locale_dest_file(root, &catalog.lang);
        let local = project.path(&compiled);
        fs::copy(&local, &dest).with_context(|| {
            format!("Failed to copy {} to {}", local.display(), dest.display())
        })?;
        fs::remove_file(&local)
            .with_context(|| format!("Failed to remove {}", local.display()))?;

        on_event(CatalogEvent::Installed {
            catalog: &catalog,
            dest: &dest,
        });
        installed.push(InstalledCatalog {
            lang: catalog.lang,
            dest,
        });
    }

    Ok(installed)
}
