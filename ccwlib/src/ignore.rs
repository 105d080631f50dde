//! Built-in ignore category catalog and ignore-rule resolution.
//!
//! Categories are a fixed table of named default pattern bundles. A config
//! activates categories, overrides a category's patterns wholesale, or adds
//! free-form patterns; resolution merges all of that into one
//! [`EffectiveIgnoreSet`] used for the entire compile.

use std::collections::BTreeSet;

use glob::{MatchOptions, Pattern};

use crate::config::IgnoreSpec;
use crate::error::CcwError;
use crate::Result;

/// The built-in category catalog: name → default glob patterns.
///
/// Fixed at compile time; configs can override a category's patterns but
/// cannot introduce new category names.
pub const CATALOG: &[(&str, &[&str])] = &[
    (
        "dependencies",
        &[
            "**/node_modules/**",
            "**/.venv/**",
            "**/venv/**",
            "**/site-packages/**",
            "**/vendor/**",
        ],
    ),
    (
        "ide",
        &["**/.idea/**", "**/.vscode/**", "**/*.swp", "**/.DS_Store"],
    ),
    (
        "temp",
        &[
            "**/__pycache__/**",
            "**/*.pyc",
            "**/tmp/**",
            "**/*.tmp",
            "**/*.log",
        ],
    ),
    (
        "build",
        &[
            "**/build/**",
            "**/dist/**",
            "**/target/**",
            "**/*.egg-info/**",
            "**/.pytest_cache/**",
            "**/.mypy_cache/**",
        ],
    ),
    ("vcs", &["**/.git/**", "**/.hg/**", "**/.svn/**"]),
    (
        "workspace",
        &["codecompanion-workspace.json", "**/.cc/codecompanion.yaml"],
    ),
    (
        "lock_files",
        &[
            "**/*.lock",
            "**/package-lock.json",
            "**/yarn.lock",
            "**/pnpm-lock.yaml",
        ],
    ),
];

/// Names of all built-in categories, in catalog order.
pub fn category_names() -> Vec<&'static str> {
    CATALOG.iter().map(|(name, _)| *name).collect()
}

/// Look up a category's built-in default patterns.
pub fn category_defaults(name: &str) -> Option<&'static [&'static str]> {
    CATALOG
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, patterns)| *patterns)
}

/// Match options shared by ignore filtering and file discovery.
///
/// Case-sensitive, and `*`/`?` never cross a `/` (only `**` does), so
/// `docs/*/*.md` matches exactly one directory level.
pub(crate) fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}

fn compile_pattern(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| CcwError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

fn unknown_category(name: &str) -> CcwError {
    CcwError::UnknownCategory {
        name: name.to_string(),
        known: category_names().join(", "),
    }
}

/// The flattened set of ignore patterns for one compile run.
///
/// Built once per compile by [`EffectiveIgnoreSet::resolve`] and never
/// mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct EffectiveIgnoreSet {
    patterns: Vec<Pattern>,
}

impl EffectiveIgnoreSet {
    /// Merge built-in defaults, category overrides, and additional patterns
    /// into the effective set.
    ///
    /// Category names are validated against the catalog first, so an unknown
    /// identifier fails before any filesystem I/O. When `spec.enabled` is
    /// false the result is empty and nothing gets filtered.
    pub fn resolve(spec: &IgnoreSpec) -> Result<Self> {
        // Validate names even when disabled: a typo'd category is a config
        // bug regardless of the toggle.
        if let Some(categories) = &spec.categories {
            for name in categories {
                if category_defaults(name).is_none() {
                    return Err(unknown_category(name));
                }
            }
        }
        for name in spec.patterns.keys() {
            if category_defaults(name).is_none() {
                return Err(unknown_category(name));
            }
        }

        if !spec.enabled {
            return Ok(Self::default());
        }

        let active: Vec<&str> = match &spec.categories {
            Some(categories) => categories.iter().map(|s| s.as_str()).collect(),
            None => category_names(),
        };

        let mut merged = BTreeSet::new();
        for name in active {
            match spec.patterns.get(name) {
                Some(overrides) => merged.extend(overrides.iter().cloned()),
                None => merged.extend(
                    category_defaults(name)
                        .unwrap_or_default()
                        .iter()
                        .map(|p| p.to_string()),
                ),
            }
        }
        merged.extend(spec.additional.iter().cloned());

        let patterns = merged
            .iter()
            .map(|p| compile_pattern(p))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Check a forward-slash path (relative to the project root) against
    /// the set.
    pub fn is_ignored(&self, rel_path: &str) -> bool {
        let options = match_options();
        self.patterns
            .iter()
            .any(|p| p.matches_with(rel_path, options))
    }

    /// True when the set contains no patterns (ignoring disabled).
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The merged pattern strings, sorted.
    pub fn pattern_strings(&self) -> Vec<String> {
        self.patterns.iter().map(|p| p.as_str().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn spec() -> IgnoreSpec {
        IgnoreSpec::default()
    }

    #[test]
    fn test_default_spec_activates_whole_catalog() {
        let set = EffectiveIgnoreSet::resolve(&spec()).unwrap();
        assert!(set.is_ignored("node_modules/package.json"));
        assert!(set.is_ignored("src/__pycache__/x.pyc"));
        assert!(set.is_ignored(".git/config"));
        assert!(set.is_ignored("codecompanion-workspace.json"));
        assert!(!set.is_ignored("src/main.py"));
        assert!(!set.is_ignored(".cc/data/CONVENTIONS.md"));
    }

    #[test]
    fn test_disabled_yields_empty_set() {
        let mut s = spec();
        s.enabled = false;
        s.additional = vec!["**/*.py".to_string()];
        let set = EffectiveIgnoreSet::resolve(&s).unwrap();
        assert!(set.is_empty());
        assert!(!set.is_ignored("node_modules/package.json"));
        assert!(!set.is_ignored("src/main.py"));
    }

    #[test]
    fn test_unlisted_categories_contribute_nothing() {
        let mut s = spec();
        s.categories = Some(vec!["vcs".to_string()]);
        let set = EffectiveIgnoreSet::resolve(&s).unwrap();
        assert!(set.is_ignored(".git/config"));
        assert!(!set.is_ignored("node_modules/package.json"));
        assert!(!set.is_ignored("src/__pycache__/x.pyc"));
    }

    #[test]
    fn test_empty_category_list_disables_all_categories() {
        let mut s = spec();
        s.categories = Some(vec![]);
        s.additional = vec!["**/*.secret".to_string()];
        let set = EffectiveIgnoreSet::resolve(&s).unwrap();
        assert!(!set.is_ignored(".git/config"));
        assert!(set.is_ignored("a/b.secret"));
    }

    #[test]
    fn test_override_replaces_builtin_patterns() {
        let mut s = spec();
        s.categories = Some(vec!["temp".to_string()]);
        let mut patterns = BTreeMap::new();
        patterns.insert("temp".to_string(), vec!["**/*.bak".to_string()]);
        s.patterns = patterns;
        let set = EffectiveIgnoreSet::resolve(&s).unwrap();
        // Exactly the override, none of temp's defaults
        assert_eq!(set.pattern_strings(), vec!["**/*.bak".to_string()]);
        assert!(set.is_ignored("src/old.bak"));
        assert!(!set.is_ignored("src/__pycache__/x.pyc"));
    }

    #[test]
    fn test_additional_applies_alongside_categories() {
        let mut s = spec();
        s.categories = Some(vec!["vcs".to_string()]);
        s.additional = vec!["**/generated/**".to_string()];
        let set = EffectiveIgnoreSet::resolve(&s).unwrap();
        assert!(set.is_ignored(".git/config"));
        assert!(set.is_ignored("src/generated/api.py"));
    }

    #[test]
    fn test_duplicate_patterns_are_merged() {
        let mut s = spec();
        s.categories = Some(vec!["vcs".to_string()]);
        s.additional = vec!["**/.git/**".to_string(), "**/.git/**".to_string()];
        let set = EffectiveIgnoreSet::resolve(&s).unwrap();
        let strings = set.pattern_strings();
        let git_count = strings.iter().filter(|p| *p == "**/.git/**").count();
        assert_eq!(git_count, 1);
    }

    #[test]
    fn test_unknown_category_in_categories() {
        let mut s = spec();
        s.categories = Some(vec!["nonexistent".to_string()]);
        let err = EffectiveIgnoreSet::resolve(&s).unwrap_err();
        match err {
            CcwError::UnknownCategory { name, .. } => assert_eq!(name, "nonexistent"),
            other => panic!("expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_category_in_overrides() {
        let mut s = spec();
        let mut patterns = BTreeMap::new();
        patterns.insert("typo".to_string(), vec!["**/*.bak".to_string()]);
        s.patterns = patterns;
        let err = EffectiveIgnoreSet::resolve(&s).unwrap_err();
        assert!(matches!(err, CcwError::UnknownCategory { name, .. } if name == "typo"));
    }

    #[test]
    fn test_unknown_category_rejected_even_when_disabled() {
        let mut s = spec();
        s.enabled = false;
        s.categories = Some(vec!["nope".to_string()]);
        assert!(EffectiveIgnoreSet::resolve(&s).is_err());
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let mut s = spec();
        s.additional = vec!["[invalid".to_string()];
        let err = EffectiveIgnoreSet::resolve(&s).unwrap_err();
        assert!(matches!(err, CcwError::InvalidGlob { pattern, .. } if pattern == "[invalid"));
    }

    #[test]
    fn test_star_does_not_cross_separators() {
        let mut s = spec();
        s.categories = Some(vec![]);
        s.additional = vec!["docs/*/*.md".to_string()];
        let set = EffectiveIgnoreSet::resolve(&s).unwrap();
        assert!(set.is_ignored("docs/api/overview.md"));
        assert!(!set.is_ignored("docs/api/reference/details.md"));
        assert!(!set.is_ignored("docs/index.md"));
    }

    #[test]
    fn test_recursive_star_matches_zero_components() {
        let mut s = spec();
        s.categories = Some(vec![]);
        s.additional = vec!["**/*.pyc".to_string()];
        let set = EffectiveIgnoreSet::resolve(&s).unwrap();
        assert!(set.is_ignored("x.pyc"));
        assert!(set.is_ignored("a/b/x.pyc"));
    }
}
