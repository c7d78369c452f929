use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use super::{CatalogEvent, discover_catalogs};
use crate::project::Project;

#[derive(Debug)]
pub struct BuildPoOutcome {
    /// Relative to the project root.
    pub template: PathBuf,
    /// Languages whose catalogs were merged, in processing order.
    pub updated: Vec<String>,
}

/// Regenerate the template from the sources, then merge it into every
/// catalog in place.
///
/// The template is overwritten on every run. The first tool failure aborts
/// the build; catalogs merged before it keep their changes.
pub fn build_catalogs(
    project: &Project,
    mut on_event: impl FnMut(CatalogEvent<'_>),
) -> Result<BuildPoOutcome> {
    let config = &project.config;
    let toolchain = project.toolchain();
    let template = project.template();

    let po_dir = project.path(project.po_dir());
    fs::create_dir_all(&po_dir)
        .with_context(|| format!("Failed to create {}", po_dir.display()))?;

    on_event(CatalogEvent::Extracting {
        template: &template,
    });
    toolchain
        .extract(
            &config.source_language,
            &config.keyword,
            &template,
            &config.source_files(),
        )
        .with_context(|| format!("Failed to generate {}", template.display()))?;

    let mut updated = Vec::new();
    for catalog in discover_catalogs(project)? {
        on_event(CatalogEvent::Updating { catalog: &catalog });
        toolchain
            .merge(&catalog.path, &template)
            .with_context(|| format!("Failed to update {}", catalog.path.display()))?;
        updated.push(catalog.lang);
    }

    Ok(BuildPoOutcome { template, updated })
}
