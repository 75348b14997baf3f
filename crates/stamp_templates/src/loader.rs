//! Template loading functionality.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::descriptor::TemplateDescriptor;
use crate::error::{TemplateError, TemplateResult};

/// Conventional declaration file name inside a template directory.
pub const DECLARATION_FILE: &str = "data.json";

/// Reads template directories into [`TemplateDescriptor`]s.
///
/// A directory is a template when it carries a declaration file
/// ([`DECLARATION_FILE`] by convention) at its top level. Everything else
/// in the directory is treated as static assets for the render engine.
pub struct TemplateLoader {
    declaration_file: String,
}

impl Default for TemplateLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateLoader {
    /// Create a loader using the conventional declaration file name.
    pub fn new() -> Self {
        Self {
            declaration_file: DECLARATION_FILE.to_string(),
        }
    }

    /// Create a loader with a custom declaration file name.
    pub fn with_declaration_file(name: impl Into<String>) -> Self {
        Self {
            declaration_file: name.into(),
        }
    }

    /// Path of the declaration file inside a template directory.
    pub fn declaration_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.declaration_file)
    }

    /// Load the template at `dir`, registering it under `id`.
    ///
    /// Fails with [`TemplateError::NotFound`] when the directory or its
    /// declaration file is missing, and [`TemplateError::Parse`] when the
    /// declaration is not well-formed JSON.
    pub fn load(&self, dir: &Path, id: impl Into<String>) -> TemplateResult<TemplateDescriptor> {
        let id = id.into();
        let declaration = self.declaration_path(dir);

        if !dir.is_dir() || !declaration.is_file() {
            return Err(TemplateError::NotFound(format!(
                "No {} found in {:?}",
                self.declaration_file, dir
            )));
        }

        debug!("Loading declaration from {:?}", declaration);
        let content = fs::read_to_string(&declaration)?;
        let schema = serde_json::from_str(&content).map_err(|source| TemplateError::Parse {
            template: id.clone(),
            source,
        })?;

        Ok(TemplateDescriptor::new(id, dir, schema))
    }

    /// Enumerate the template directories directly under `parent`.
    ///
    /// Returns `(identifier, path)` pairs, where the identifier is the
    /// subdirectory base name. The scan is non-recursive; entries without a
    /// declaration file are skipped. Results are sorted by file name so
    /// repeated scans of the same tree are deterministic.
    pub fn discover(&self, parent: &Path) -> TemplateResult<Vec<(String, PathBuf)>> {
        if !parent.is_dir() {
            return Err(TemplateError::NotFound(format!(
                "Template root is not a directory: {:?}",
                parent
            )));
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(parent)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_dir() || !self.declaration_path(path).is_file() {
                continue;
            }
            match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => found.push((name.to_string(), path.to_path_buf())),
                None => warn!("Skipping template with non-UTF-8 name: {:?}", path),
            }
        }
        Ok(found)
    }
}
