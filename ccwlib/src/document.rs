//! The compiled workspace document: the JSON model the editor
//! integration consumes.
//!
//! Field order in these structs is the key order in the emitted JSON, so
//! output is byte-reproducible for identical inputs.

use serde::{Deserialize, Serialize};

/// One file entry in a compiled group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFile {
    pub path: String,
    pub description: String,
}

/// One compiled group: name, description, and its deduplicated files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentGroup {
    pub name: String,
    pub description: String,
    pub files: Vec<DocumentFile>,
}

/// The complete compiled workspace document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceDocument {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    pub groups: Vec<DocumentGroup>,
}

impl WorkspaceDocument {
    /// Serialize to the canonical two-space-indented JSON form.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WorkspaceDocument {
        WorkspaceDocument {
            name: "demo".to_string(),
            description: "A demo".to_string(),
            system_prompt: None,
            groups: vec![DocumentGroup {
                name: "Source".to_string(),
                description: "Code".to_string(),
                files: vec![DocumentFile {
                    path: "src/a.py".to_string(),
                    description: "Main".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn test_stable_key_order() {
        let json = sample().to_json().unwrap();
        let name_pos = json.find("\"name\"").unwrap();
        let desc_pos = json.find("\"description\"").unwrap();
        let groups_pos = json.find("\"groups\"").unwrap();
        assert!(name_pos < desc_pos && desc_pos < groups_pos);
    }

    #[test]
    fn test_system_prompt_omitted_when_absent() {
        let json = sample().to_json().unwrap();
        assert!(!json.contains("system_prompt"));
    }

    #[test]
    fn test_system_prompt_included_when_present() {
        let mut doc = sample();
        doc.system_prompt = Some("You are helpful".to_string());
        let json = doc.to_json().unwrap();
        assert!(json.contains("\"system_prompt\": \"You are helpful\""));
    }

    #[test]
    fn test_round_trips_through_json() {
        let doc = sample();
        let parsed: WorkspaceDocument = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }
}
