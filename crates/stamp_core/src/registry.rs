//! Template registry mapping identifiers to builders.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use stamp_templates::{TemplateError, TemplateLoader};
use tracing::{debug, info, warn};

use crate::builder::TemplateBuilder;
use crate::engine::RenderEngine;
use crate::error::{CoreError, CoreResult};

/// One template that failed to load during a directory scan.
#[derive(Debug)]
pub struct ScanFailure {
    /// Identifier the template would have registered under.
    pub id: String,
    pub error: TemplateError,
}

/// Outcome of a directory scan: what registered and what failed.
///
/// Nothing is silently dropped: every subdirectory carrying a declaration
/// file lands on exactly one side of the report.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub registered: Vec<Arc<TemplateBuilder>>,
    pub failures: Vec<ScanFailure>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A registry of template builders.
///
/// The registry maps template identifiers to [`TemplateBuilder`]s, all
/// sharing one render engine. Identifiers come from the registration call
/// (for directory scans, the subdirectory base name); re-registering an
/// identifier replaces the previous entry, and callers still holding the
/// old builder keep a working handle to it.
///
/// The map is guarded for concurrent use: registrations and lookups may
/// race freely, and a lookup observes either the pre- or post-registration
/// state of a key, never anything in between.
pub struct TemplateRegistry {
    builders: Arc<RwLock<HashMap<String, Arc<TemplateBuilder>>>>,
    loader: TemplateLoader,
    engine: Arc<dyn RenderEngine>,
}

impl TemplateRegistry {
    /// Create an empty registry using the conventional declaration file.
    pub fn new(engine: Arc<dyn RenderEngine>) -> Self {
        Self::with_loader(engine, TemplateLoader::new())
    }

    /// Create an empty registry with a custom loader.
    pub fn with_loader(engine: Arc<dyn RenderEngine>, loader: TemplateLoader) -> Self {
        Self {
            builders: Arc::new(RwLock::new(HashMap::new())),
            loader,
            engine,
        }
    }

    /// Load the template at `dir` and register it under `id`.
    ///
    /// Replaces any previous entry for `id`. Load failures surface to the
    /// caller; the registry is left untouched by a failed registration.
    pub fn add_path(&self, id: impl Into<String>, dir: &Path) -> CoreResult<Arc<TemplateBuilder>> {
        let id = id.into();
        let descriptor = self.loader.load(dir, id.clone())?;
        debug!("Registering template: {}", id);

        let builder = Arc::new(TemplateBuilder::new(descriptor, Arc::clone(&self.engine)));
        self.builders.write().insert(id, Arc::clone(&builder));
        Ok(builder)
    }

    /// Scan `parent` and register every template subdirectory in it.
    ///
    /// Immediate subdirectories without a declaration file are not
    /// templates and are skipped; a template whose declaration fails to
    /// load is recorded in the report's failures while the rest still
    /// register (continue-on-error). An unreadable `parent` fails the
    /// whole call.
    pub fn add_paths(&self, parent: &Path) -> CoreResult<ScanReport> {
        let mut report = ScanReport::default();

        for (id, dir) in self.loader.discover(parent)? {
            match self.add_path(id.clone(), &dir) {
                Ok(builder) => {
                    info!("Loaded template: {}", id);
                    report.registered.push(builder);
                }
                Err(CoreError::Template(error)) => {
                    warn!("Failed to load template {}: {}", id, error);
                    report.failures.push(ScanFailure { id, error });
                }
                Err(other) => return Err(other),
            }
        }

        Ok(report)
    }

    /// Get a builder by identifier.
    pub fn get(&self, id: &str) -> Option<Arc<TemplateBuilder>> {
        self.builders.read().get(id).cloned()
    }

    /// Get a builder by identifier, failing when it is not registered.
    pub fn get_builder(&self, id: &str) -> CoreResult<Arc<TemplateBuilder>> {
        self.get(id)
            .ok_or_else(|| CoreError::TemplateNotRegistered(id.to_string()))
    }

    /// Check whether an identifier is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.builders.read().contains_key(id)
    }

    /// All registered identifiers, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.builders.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.builders.read().len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.builders.read().is_empty()
    }

    /// Remove a template, returning its builder if it was registered.
    pub fn remove(&self, id: &str) -> Option<Arc<TemplateBuilder>> {
        debug!("Unregistering template: {}", id);
        self.builders.write().remove(id)
    }
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("templates", &self.names())
            .finish()
    }
}
