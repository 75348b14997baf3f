//! Build orchestration for one template.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use stamp_templates::TemplateDescriptor;
use tracing::debug;

use crate::bind::DataBinder;
use crate::engine::RenderEngine;
use crate::error::{CoreError, CoreResult};
use crate::format::ResultFormat;
use crate::request::RequestData;

/// A finished build: encoded bytes plus the mapped format.
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub bytes: Vec<u8>,
    pub format: ResultFormat,
}

/// Owns one template descriptor and drives builds against it.
///
/// A builder holds no per-request state: each [`TemplateBuilder::build`]
/// call binds a fresh payload, awaits the engine, and maps the result.
/// Concurrent builds on the same builder are independent, and a caller
/// cancelling or timing out a build leaves nothing to clean up.
pub struct TemplateBuilder {
    descriptor: Arc<TemplateDescriptor>,
    engine: Arc<dyn RenderEngine>,
}

impl std::fmt::Debug for TemplateBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateBuilder")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

impl TemplateBuilder {
    pub fn new(descriptor: TemplateDescriptor, engine: Arc<dyn RenderEngine>) -> Self {
        Self {
            descriptor: Arc::new(descriptor),
            engine,
        }
    }

    /// The descriptor this builder renders.
    pub fn descriptor(&self) -> &TemplateDescriptor {
        &self.descriptor
    }

    /// Bind `data` against the template and render it.
    ///
    /// Fails with [`CoreError::MalformedRequest`] from binding,
    /// [`CoreError::Engine`] when the engine reports a failure, and
    /// [`CoreError::UnknownResultFormat`] when the engine returns a tag
    /// outside the known set; there is no fallback encoding.
    pub async fn build(&self, data: &RequestData) -> CoreResult<RenderResult> {
        let payload = DataBinder::bind(&self.descriptor, data)?;

        let started = Instant::now();
        let output = self
            .engine
            .render(self.descriptor.schema(), self.descriptor.asset_root(), &payload)
            .await
            .map_err(CoreError::Engine)?;
        debug!(
            "Engine {} rendered {} in {:?}",
            self.engine.name(),
            self.descriptor.id(),
            started.elapsed()
        );

        let format = ResultFormat::from_tag(&output.format_tag)
            .ok_or_else(|| CoreError::UnknownResultFormat(output.format_tag.clone()))?;

        Ok(RenderResult {
            bytes: output.bytes,
            format,
        })
    }

    /// Decompose an untyped JSON payload and build it.
    pub async fn build_value(&self, value: Value) -> CoreResult<RenderResult> {
        let data = RequestData::from_value(value)?;
        self.build(&data).await
    }

    /// Decompose a JSON string payload and build it.
    pub async fn build_json(&self, json: &str) -> CoreResult<RenderResult> {
        let data = RequestData::from_json(json)?;
        self.build(&data).await
    }
}
