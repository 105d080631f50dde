//! Project context: placeholder variables for description rendering.
//!
//! Description templates in a config may reference `{project_name}`-style
//! placeholders. The surrounding CLI builds a [`ProjectContext`] from the
//! project directory and the compiler threads it through discovery.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::CcwError;
use crate::Result;

/// Placeholder variables available to description templates.
#[derive(Debug, Clone, Default)]
pub struct ProjectContext {
    vars: BTreeMap<String, String>,
}

impl ProjectContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a context from a project directory.
    ///
    /// Sets `project_name` to the directory's name and `package_name` to a
    /// lowercased, underscore-separated form of it.
    pub fn from_dir(path: impl AsRef<Path>) -> Self {
        let name = path
            .as_ref()
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "project".to_string());
        let package = name.to_lowercase().replace(['-', ' '], "_");
        Self::new()
            .with_var("project_name", name)
            .with_var("package_name", package)
    }

    /// Builder: add a variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Look up a variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(|s| s.as_str())
    }

    /// Render a template, substituting `{name}` placeholders.
    ///
    /// `{{` and `}}` escape to literal braces. An unknown placeholder (or an
    /// unterminated one) is a render error naming the placeholder.
    pub fn render(&self, template: &str) -> Result<String> {
        let mut out = String::with_capacity(template.len());
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    out.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    out.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => {
                                return Err(CcwError::Render {
                                    placeholder: name,
                                    template: template.to_string(),
                                })
                            }
                        }
                    }
                    match self.vars.get(&name) {
                        Some(value) => out.push_str(value),
                        None => {
                            return Err(CcwError::Render {
                                placeholder: name,
                                template: template.to_string(),
                            })
                        }
                    }
                }
                c => out.push(c),
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dir_names() {
        let ctx = ProjectContext::from_dir("/tmp/My-Cool Project");
        assert_eq!(ctx.get("project_name"), Some("My-Cool Project"));
        assert_eq!(ctx.get("package_name"), Some("my_cool_project"));
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let ctx = ProjectContext::new().with_var("project_name", "demo");
        let out = ctx.render("Main module for {project_name}").unwrap();
        assert_eq!(out, "Main module for demo");
    }

    #[test]
    fn test_render_no_placeholders_passthrough() {
        let ctx = ProjectContext::new();
        assert_eq!(ctx.render("plain text").unwrap(), "plain text");
    }

    #[test]
    fn test_render_escaped_braces() {
        let ctx = ProjectContext::new().with_var("x", "1");
        assert_eq!(ctx.render("{{literal}} and {x}").unwrap(), "{literal} and 1");
    }

    #[test]
    fn test_render_unknown_placeholder() {
        let ctx = ProjectContext::new();
        let err = ctx.render("files for {unknown_var}").unwrap_err();
        assert!(matches!(err, CcwError::Render { placeholder, .. } if placeholder == "unknown_var"));
    }

    #[test]
    fn test_render_unterminated_placeholder() {
        let ctx = ProjectContext::new().with_var("x", "1");
        assert!(ctx.render("oops {x").is_err());
    }
}
