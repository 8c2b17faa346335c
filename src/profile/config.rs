//! Profile configuration files
//!
//! A YAML or JSON document that extends one of the built-in profiles:
//!
//! ```yaml
//! extends: html
//! name: my-html
//! indent: "    "
//! numbering: { base: 0, padding: 2 }
//! self_closing: xhtml
//! implicit_tags: { menu: li }
//! snippets:
//!   btn: { tag: button, attributes: { type: button } }
//! ```

use super::{Numbering, Profile, SelfClosing, Snippet, SyntaxProfile, registry};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a profile file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error while reading the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document.
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed YAML document.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// `extends` names a profile that is not built in.
    #[error("Unknown base profile: {0}")]
    UnknownBase(String),

    /// File extension is neither JSON nor YAML.
    #[error("Unsupported profile format: {0}")]
    UnsupportedFormat(String),
}

impl ConfigError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a YAML error.
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }
}

/// Numbering overrides
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumberingConfig {
    pub base: Option<usize>,
    pub padding: Option<usize>,
}

/// A snippet definition
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnippetConfig {
    pub tag: String,
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
    pub text: Option<String>,
}

impl From<SnippetConfig> for Snippet {
    fn from(config: SnippetConfig) -> Self {
        let mut snippet = Snippet::new(&config.tag);
        snippet.attributes = config.attributes;
        snippet.text = config.text;
        snippet
    }
}

/// A profile document; every field is optional and overrides the base
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    /// Built-in profile to start from (default `html`)
    pub extends: Option<String>,
    pub name: Option<String>,
    pub implicit_tag: Option<String>,
    pub indent: Option<String>,
    pub numbering: Option<NumberingConfig>,
    pub self_closing: Option<SelfClosing>,
    #[serde(default)]
    pub void_elements: Vec<String>,
    /// parent tag → implicit child tag
    #[serde(default)]
    pub implicit_tags: IndexMap<String, String>,
    #[serde(default)]
    pub snippets: IndexMap<String, SnippetConfig>,
}

impl ProfileConfig {
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(input).map_err(|e| ConfigError::json(e.to_string()))
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(input).map_err(|e| ConfigError::yaml(e.to_string()))
    }

    /// Apply this document on top of its base profile
    pub fn into_profile(self) -> Result<Profile, ConfigError> {
        let base_name = self.extends.as_deref().unwrap_or("html");
        let mut profile = registry::get(base_name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownBase(base_name.to_string()))?;

        if let Some(name) = &self.name {
            profile = profile.with_name(name);
        }
        if let Some(tag) = &self.implicit_tag {
            profile = profile.with_implicit_tag(Some(tag));
        }
        if let Some(indent) = self.indent {
            profile = profile.with_indent(indent);
        }
        if let Some(numbering) = &self.numbering {
            let current = profile.numbering();
            profile = profile.with_numbering(Numbering {
                base: numbering.base.unwrap_or(current.base),
                padding: numbering.padding.unwrap_or(current.padding),
            });
        }
        if let Some(style) = self.self_closing {
            profile = profile.with_self_closing(style);
        }
        profile = profile.with_void_elements(self.void_elements.iter().map(String::as_str));
        for (parent, child) in &self.implicit_tags {
            profile = profile.with_implicit_child(parent, child);
        }
        for (name, snippet) in self.snippets {
            if profile.insert_snippet(&name, snippet.into()).is_some() {
                tracing::warn!(profile = profile.name(), snippet = %name, "snippet overrides a built-in definition");
            }
        }

        tracing::debug!(
            profile = profile.name(),
            base = base_name,
            snippets = profile.snippet_count(),
            "loaded profile configuration"
        );
        Ok(profile)
    }
}

/// Load a profile file, choosing the format from its extension
/// (`.json`, `.yaml` or `.yml`)
pub fn load_profile(path: impl AsRef<Path>) -> Result<Profile, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let config = match extension.as_str() {
        "json" => ProfileConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        "yaml" | "yml" => ProfileConfig::from_yaml_str(&std::fs::read_to_string(path)?)?,
        _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    };
    config.into_profile()
}
