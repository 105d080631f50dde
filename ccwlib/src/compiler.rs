//! Workspace compilation: the orchestration layer.
//!
//! Resolves the ignore set once, runs discovery for every file spec in
//! config order, deduplicates per group, and assembles the output document.
//! [`compile_file`] is the entry point the CLI invokes: it loads the YAML,
//! compiles, and atomically replaces the JSON artifact.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::WorkspaceConfig;
use crate::context::ProjectContext;
use crate::discover::discover;
use crate::document::{DocumentFile, DocumentGroup, WorkspaceDocument};
use crate::error::CcwError;
use crate::ignore::EffectiveIgnoreSet;
use crate::Result;

/// Name of the compiled artifact the editor integration looks for.
pub const OUTPUT_FILE_NAME: &str = "codecompanion-workspace.json";

/// Directory holding workspace-internal files.
pub const CC_DIR_NAME: &str = ".cc";

/// Compile a loaded config against the project tree at `base_dir`.
///
/// The ignore set is resolved once and shared by every group. Within a
/// group, results are concatenated in file-spec order and deduplicated by
/// path, first occurrence winning, so overlapping patterns never produce
/// repeated entries.
pub fn compile(
    config: &WorkspaceConfig,
    base_dir: impl AsRef<Path>,
    context: &ProjectContext,
) -> Result<WorkspaceDocument> {
    let base_dir = base_dir.as_ref();
    let ignores = EffectiveIgnoreSet::resolve(&config.ignore)?;

    let mut groups = Vec::with_capacity(config.groups.len());
    for group in &config.groups {
        let mut seen: HashSet<String> = HashSet::new();
        let mut files = Vec::new();
        for spec in &group.files {
            for resolved in discover(base_dir, spec, &ignores, context)? {
                if seen.insert(resolved.path.clone()) {
                    files.push(DocumentFile {
                        path: resolved.path,
                        description: resolved.description,
                    });
                }
            }
        }
        groups.push(DocumentGroup {
            name: group.name.clone(),
            description: group.description.clone(),
            files,
        });
    }

    Ok(WorkspaceDocument {
        name: config.name.clone(),
        description: config.description.clone(),
        system_prompt: config.system_prompt.clone(),
        groups,
    })
}

/// Default output location for a given config file.
///
/// A config living in a `.cc/` directory compiles to
/// `codecompanion-workspace.json` next to `.cc/`; anything else compiles to
/// a sibling of the config file.
pub fn default_output_path(config_path: &Path) -> PathBuf {
    let parent = match config_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let root = if parent.file_name().is_some_and(|n| n == CC_DIR_NAME) {
        parent.parent().unwrap_or(parent)
    } else {
        parent
    };
    root.join(OUTPUT_FILE_NAME)
}

/// Project root a config file describes: the directory above `.cc/`, or the
/// config's own directory.
pub fn project_root(config_path: &Path) -> PathBuf {
    let output = default_output_path(config_path);
    output
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Compile a YAML config file to the JSON artifact.
///
/// The sole entry point for the CLI layer: loads and validates the YAML,
/// compiles against the project tree, and writes the document atomically
/// (temp file + rename). On any error the previous artifact is left
/// untouched. Returns the path written.
pub fn compile_file(config_path: impl AsRef<Path>, output: Option<&Path>) -> Result<PathBuf> {
    let config_path = config_path.as_ref();
    let config = WorkspaceConfig::load(config_path)?;

    let base_dir = project_root(config_path);
    let context = ProjectContext::from_dir(
        base_dir
            .canonicalize()
            .unwrap_or_else(|_| base_dir.clone()),
    );

    let document = compile(&config, &base_dir, &context)?;
    let json = document.to_json()?;

    let output_path = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| default_output_path(config_path));
    write_atomic(&output_path, &json)?;

    Ok(output_path)
}

/// Write `content` to `path` via a temp file in the same directory, then
/// rename over the destination. Readers never observe a half-written file.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.persist(path).map_err(|e| CcwError::Io(e.error))?;
    Ok(())
}
