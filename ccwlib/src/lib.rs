//! # ccwlib
//!
//! Compiles CodeCompanion workspace configs: a human-authored YAML
//! description of a project goes in, the `codecompanion-workspace.json`
//! artifact the editor integration consumes comes out.
//!
//! ## Overview
//!
//! A workspace config names groups of files, where each entry is either a
//! glob pattern or an explicit path, plus an ignore section built from a
//! fixed catalog of categories (dependency directories, IDE metadata, build
//! artifacts, ...). Compilation:
//!
//! 1. Loads and validates the YAML into a typed [`WorkspaceConfig`]
//! 2. Resolves the ignore section into one [`EffectiveIgnoreSet`]
//! 3. Expands every file spec against the project tree, dropping ignored,
//!    empty, and symlinked candidates
//! 4. Assembles a [`WorkspaceDocument`] and writes it atomically
//!
//! Output is deterministic: discovery results are sorted by path and
//! duplicate matches within a group keep their first occurrence, so the
//! same config against the same tree always produces identical bytes.
//!
//! ## Example
//!
//! ```rust
//! use ccwlib::compile_file;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("src")).unwrap();
//! fs::write(dir.path().join("src/main.py"), "print('hi')").unwrap();
//! fs::write(
//!     dir.path().join("workspace.yaml"),
//!     "name: demo\ngroups:\n  - name: Source\n    files:\n      - path: \"src/**/*.py\"\n",
//! )
//! .unwrap();
//!
//! let output = compile_file(dir.path().join("workspace.yaml"), None).unwrap();
//! assert!(output.ends_with("codecompanion-workspace.json"));
//! ```

pub mod compiler;
pub mod config;
pub mod context;
pub mod discover;
pub mod document;
pub mod error;
pub mod ignore;

pub use compiler::{
    compile, compile_file, default_output_path, project_root, CC_DIR_NAME, OUTPUT_FILE_NAME,
};
pub use config::{FileKind, FileSpec, Group, IgnoreSpec, WorkspaceConfig};
pub use context::ProjectContext;
pub use discover::{discover, ResolvedFile};
pub use document::{DocumentFile, DocumentGroup, WorkspaceDocument};
pub use error::CcwError;
pub use ignore::{category_defaults, category_names, EffectiveIgnoreSet, CATALOG};

/// Result type for ccwlib operations
pub type Result<T> = std::result::Result<T, CcwError>;
