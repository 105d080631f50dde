//! Project scaffolding for `ccw init`.
//!
//! Creates the `.cc/` directory layout, seeds the default data files, and
//! writes a rendered workspace config.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use ccwlib::ProjectContext;

use crate::templates;

/// Config file name inside `.cc/`.
pub const CONFIG_FILE_NAME: &str = "codecompanion.yaml";

const CONVENTIONS_FILE_NAME: &str = "CONVENTIONS.md";

const CONVENTIONS_CONTENT: &str = "# Project Conventions

## Overview
This document outlines the key conventions and guidelines for this project.

## Structure
- `.cc/` - CodeCompanion workspace files
  - `data/` - Additional documentation and resources
  - `codecompanion.yaml` - Workspace configuration
- `codecompanion-workspace.json` - Compiled workspace configuration

## Guidelines
1. Keep documentation up to date
2. Follow the project's coding standards
3. Update this file as conventions evolve
";

/// Create the `.cc/` directory structure and seed default data files.
///
/// Returns the `.cc` and `.cc/data` paths. Existing files are left alone.
pub fn ensure_cc_structure(project: &Path) -> anyhow::Result<(PathBuf, PathBuf)> {
    let cc_dir = project.join(ccwlib::CC_DIR_NAME);
    let data_dir = cc_dir.join("data");
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create {}", data_dir.display()))?;

    let conventions = data_dir.join(CONVENTIONS_FILE_NAME);
    if !conventions.exists() {
        fs::write(&conventions, CONVENTIONS_CONTENT)
            .with_context(|| format!("failed to write {}", conventions.display()))?;
    }

    Ok((cc_dir, data_dir))
}

/// Initialize a workspace at `project`: scaffold `.cc/`, render the chosen
/// template, and write the config file.
///
/// Returns the config path and the `.cc` directory.
pub fn init_workspace(
    project: &Path,
    template_name: Option<&str>,
) -> anyhow::Result<(PathBuf, PathBuf)> {
    let (cc_dir, _data_dir) = ensure_cc_structure(project)?;

    let requested = template_name.unwrap_or("default");
    let template = templates::get(requested).ok_or_else(|| {
        anyhow!(
            "Template '{}' not found. Available templates: {}",
            requested,
            templates::names().join(", ")
        )
    })?;

    let canonical = project.canonicalize().unwrap_or_else(|_| project.to_path_buf());
    let context = ProjectContext::from_dir(&canonical);
    let rendered = template.render(&context)?;

    let config_path = cc_dir.join(CONFIG_FILE_NAME);
    fs::write(&config_path, rendered)
        .with_context(|| format!("failed to write {}", config_path.display()))?;

    Ok((config_path, cc_dir))
}
