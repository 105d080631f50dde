//! File discovery: expand file specs against the project tree.
//!
//! Each [`FileSpec`] resolves to zero or more [`ResolvedFile`]s. Glob
//! patterns are expanded with a walkdir traversal; explicit paths are
//! checked literally. Both kinds share the ignore filter and the
//! empty-file and symlink exclusion rules, and results are sorted by path
//! so output is deterministic across platforms and re-runs.

use std::path::{Component, Path};

use glob::Pattern;
use walkdir::WalkDir;

use crate::config::{FileKind, FileSpec};
use crate::context::ProjectContext;
use crate::error::CcwError;
use crate::ignore::{match_options, EffectiveIgnoreSet};
use crate::Result;

/// A discovered file: project-relative path plus rendered description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Path relative to the project root, forward slashes
    pub path: String,
    pub description: String,
}

/// Convert a path under `base` to a forward-slash relative string.
fn relative_str(path: &Path, base: &Path) -> Option<String> {
    let rel = path.strip_prefix(base).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Reject specs that try to leave the project root.
fn check_within_root(path: &str) -> Result<()> {
    let p = Path::new(path);
    let escapes = p.is_absolute()
        || p.components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
    if escapes {
        return Err(CcwError::OutsideRoot(p.to_path_buf()));
    }
    Ok(())
}

/// Expand one file spec against the tree rooted at `base_dir`.
///
/// Rejected candidates: ignore-set matches, empty files, symlinks (never
/// followed), and directories. Missing `explicit` files are not an error;
/// they resolve to nothing.
pub fn discover(
    base_dir: impl AsRef<Path>,
    spec: &FileSpec,
    ignores: &EffectiveIgnoreSet,
    context: &ProjectContext,
) -> Result<Vec<ResolvedFile>> {
    let base_dir = base_dir.as_ref();
    if !base_dir.exists() {
        return Err(CcwError::PathNotFound(base_dir.to_path_buf()));
    }
    check_within_root(&spec.path)?;

    // Render before touching the tree so a bad placeholder fails fast.
    let description = context.render(&spec.description)?;

    match spec.kind {
        FileKind::Pattern => discover_pattern(base_dir, spec, ignores, description),
        FileKind::Explicit => discover_explicit(base_dir, spec, ignores, description),
    }
}

fn discover_pattern(
    base_dir: &Path,
    spec: &FileSpec,
    ignores: &EffectiveIgnoreSet,
    description: String,
) -> Result<Vec<ResolvedFile>> {
    let pattern = Pattern::new(&spec.path).map_err(|e| CcwError::InvalidGlob {
        pattern: spec.path.clone(),
        message: e.to_string(),
    })?;
    let options = match_options();

    let mut files = Vec::new();
    for entry in WalkDir::new(base_dir).follow_links(false) {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.depth() == 0 || entry.path_is_symlink() || !entry.file_type().is_file() {
            continue;
        }
        let Some(rel) = relative_str(entry.path(), base_dir) else {
            continue;
        };
        if !pattern.matches_with(&rel, options) || ignores.is_ignored(&rel) {
            continue;
        }
        let metadata = entry.metadata().map_err(std::io::Error::from)?;
        if metadata.len() == 0 {
            continue;
        }
        files.push(ResolvedFile {
            path: rel,
            description: description.clone(),
        });
    }

    // Filesystem order is not guaranteed; sort for deterministic output.
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

fn discover_explicit(
    base_dir: &Path,
    spec: &FileSpec,
    ignores: &EffectiveIgnoreSet,
    description: String,
) -> Result<Vec<ResolvedFile>> {
    let rel = spec.path.replace('\\', "/");
    let full = base_dir.join(&spec.path);

    // Explicit entries are "nice to have": a missing path resolves to nothing.
    let Ok(metadata) = full.symlink_metadata() else {
        return Ok(Vec::new());
    };
    if metadata.file_type().is_symlink()
        || !metadata.is_file()
        || metadata.len() == 0
        || ignores.is_ignored(&rel)
    {
        return Ok(Vec::new());
    }

    Ok(vec![ResolvedFile {
        path: rel,
        description,
    }])
}
