//! Built-in workspace templates.
//!
//! Templates are YAML workspace configs with `{project_name}`-style
//! placeholders, stored as an immutable static table. Rendering substitutes
//! placeholders and validates the result through the normal config loader
//! before anything is written to disk.

use anyhow::Context;
use ccwlib::{ProjectContext, WorkspaceConfig};

/// A named workspace config template.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub content: &'static str,
}

impl Template {
    /// Render the template with the project context and validate the
    /// resulting YAML. Returns the YAML text ready to write.
    pub fn render(&self, context: &ProjectContext) -> anyhow::Result<String> {
        let rendered = context
            .render(self.content)
            .with_context(|| format!("failed to render template '{}'", self.name))?;
        WorkspaceConfig::from_yaml(&rendered)
            .with_context(|| format!("template '{}' produced an invalid config", self.name))?;
        Ok(rendered)
    }
}

const DEFAULT_TEMPLATE: &str = r#"name: "{project_name}"
description: "CodeCompanion workspace for {project_name}"
system_prompt: |
  You are a development assistant for the {project_name} project.
  Please follow the conventions in .cc/data/CONVENTIONS.md.
groups:
  - name: Documentation
    description: Project documentation and conventions
    files:
      - path: .cc/data/CONVENTIONS.md
        description: Project conventions and guidelines
        kind: explicit
      - path: README.md
        description: Project overview and setup instructions
        kind: explicit
  - name: Source
    description: Main source code
    files:
      - path: "src/**/*"
        description: "Source file in {project_name}"
  - name: Tests
    description: Test suite
    files:
      - path: "tests/**/*"
        description: Test file
"#;

/// The built-in template library.
pub const TEMPLATES: &[Template] = &[Template {
    name: "default",
    description: "Feature-complete minimal template",
    content: DEFAULT_TEMPLATE,
}];

/// Look up a template by name.
pub fn get(name: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.name == name)
}

/// Names of all built-in templates.
pub fn names() -> Vec<&'static str> {
    TEMPLATES.iter().map(|t| t.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_exists() {
        assert!(get("default").is_some());
        assert_eq!(names(), vec!["default"]);
    }

    #[test]
    fn test_unknown_template_lookup() {
        assert!(get("nonexistent").is_none());
    }

    #[test]
    fn test_default_template_renders_to_valid_config() {
        let context = ProjectContext::new().with_var("project_name", "demo");
        let yaml = get("default").unwrap().render(&context).unwrap();
        let config = WorkspaceConfig::from_yaml(&yaml).unwrap();
        assert_eq!(config.name, "demo");
        assert_eq!(config.groups.len(), 3);
        assert!(config
            .system_prompt
            .as_deref()
            .unwrap()
            .contains("demo project"));
    }

    #[test]
    fn test_render_without_context_fails() {
        let err = get("default").unwrap().render(&ProjectContext::new());
        assert!(err.is_err());
    }
}
