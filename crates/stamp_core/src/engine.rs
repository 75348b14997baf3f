//! Render engine seam.

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use crate::bind::BoundPayload;

/// Raw output of a render engine invocation.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// Encoded image or animation bytes.
    pub bytes: Vec<u8>,
    /// Engine-native encoding tag, mapped by the orchestrator.
    pub format_tag: String,
}

impl RenderOutput {
    pub fn new(bytes: Vec<u8>, format_tag: impl Into<String>) -> Self {
        Self {
            bytes,
            format_tag: format_tag.into(),
        }
    }
}

/// The external rendering engine.
///
/// This is the single seam between the orchestration core and everything
/// pixel-shaped: compositing, animation encoding, font rendering, and the
/// fetching of avatar bytes all live behind it. The core hands over the
/// template schema verbatim together with the asset root and the bound
/// payload, and gets back encoded bytes plus a format tag.
///
/// Engines may perform network and file I/O of unbounded latency, so the
/// operation is async and implementations must be `Send + Sync` to allow
/// concurrent builds over one shared engine.
#[async_trait]
pub trait RenderEngine: Send + Sync {
    /// Engine name for diagnostics.
    fn name(&self) -> &str;

    /// Render one bound request against a template.
    ///
    /// Failures are engine-specific and surface to the caller unchanged;
    /// retry policy, if any, belongs to the caller.
    async fn render(
        &self,
        schema: &Value,
        asset_root: &Path,
        payload: &BoundPayload,
    ) -> anyhow::Result<RenderOutput>;
}
