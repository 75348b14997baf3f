//! Parsed template descriptors.

use std::path::{Path, PathBuf};

use serde_json::Value;

/// The parsed schema of one template, bound to its asset directory.
///
/// A descriptor is created once at load time and never mutated. The
/// declaration content is held verbatim as structured JSON: its shape is
/// template-specific and only the render engine interprets it in full.
/// The identifier comes from the registration key (normally the source
/// subdirectory name), never from the declaration itself.
#[derive(Debug, Clone)]
pub struct TemplateDescriptor {
    id: String,
    asset_root: PathBuf,
    schema: Value,
}

impl TemplateDescriptor {
    /// Create a descriptor from an already-parsed declaration.
    pub fn new(id: impl Into<String>, asset_root: impl Into<PathBuf>, schema: Value) -> Self {
        Self {
            id: id.into(),
            asset_root: asset_root.into(),
            schema,
        }
    }

    /// The identifier this template is registered under.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Directory containing the declaration file and static assets.
    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }

    /// The declaration content, verbatim.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Alternate names declared under the optional `alias` key.
    pub fn aliases(&self) -> Vec<&str> {
        match self.schema.get("alias") {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Whether the declaration opts out of public listings (`hidden` key).
    pub fn is_hidden(&self) -> bool {
        self.schema
            .get("hidden")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}
