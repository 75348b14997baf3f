//! Mock render engine for testing.
//!
//! Provides a configurable implementation of the [`RenderEngine`] trait so
//! orchestration behavior can be exercised without any real compositing.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;

use crate::bind::BoundPayload;
use crate::engine::{RenderEngine, RenderOutput};
use crate::format::{GIF_TAG, PNG_TAG};

/// Predefined mock response for one render call.
#[derive(Debug, Clone)]
pub struct MockRender {
    pub bytes: Vec<u8>,
    pub format_tag: String,
}

impl MockRender {
    /// A static-image response.
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            format_tag: PNG_TAG.to_string(),
        }
    }

    /// An animated response.
    pub fn gif(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            format_tag: GIF_TAG.to_string(),
        }
    }

    /// A response with an arbitrary format tag.
    pub fn with_tag(bytes: Vec<u8>, tag: impl Into<String>) -> Self {
        Self {
            bytes,
            format_tag: tag.into(),
        }
    }
}

/// Captured render call for verification.
#[derive(Debug, Clone)]
pub struct CapturedRender {
    pub schema: Value,
    pub asset_root: PathBuf,
    pub payload: BoundPayload,
}

/// Mock render engine.
///
/// Captures every call and returns predefined responses, cycling through
/// them when more calls arrive than responses were scripted. With no
/// scripted responses it answers with an empty PNG.
#[derive(Clone)]
pub struct MockEngine {
    responses: Arc<RwLock<Vec<MockRender>>>,
    response_index: Arc<AtomicUsize>,
    captured_calls: Arc<RwLock<Vec<CapturedRender>>>,
    simulate_failure: Arc<RwLock<Option<String>>>,
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEngine {
    /// Create a mock engine that answers every call with an empty PNG.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(Vec::new())),
            response_index: Arc::new(AtomicUsize::new(0)),
            captured_calls: Arc::new(RwLock::new(Vec::new())),
            simulate_failure: Arc::new(RwLock::new(None)),
        }
    }

    /// Add a response for the next render call.
    pub fn add_response(self, response: MockRender) -> Self {
        self.responses.write().push(response);
        self
    }

    /// Replace all scripted responses.
    pub fn with_responses(self, responses: Vec<MockRender>) -> Self {
        *self.responses.write() = responses;
        self
    }

    /// Make every subsequent render call fail with this message.
    pub fn simulate_failure(self, message: impl Into<String>) -> Self {
        *self.simulate_failure.write() = Some(message.into());
        self
    }

    /// All captured calls, in invocation order.
    pub fn calls(&self) -> Vec<CapturedRender> {
        self.captured_calls.read().clone()
    }

    /// Number of render calls made.
    pub fn call_count(&self) -> usize {
        self.captured_calls.read().len()
    }

    /// Drop all captured calls.
    pub fn clear_calls(&self) {
        self.captured_calls.write().clear();
    }

    fn next_response(&self) -> MockRender {
        let responses = self.responses.read();
        if responses.is_empty() {
            return MockRender::png(Vec::new());
        }
        let index = self.response_index.fetch_add(1, Ordering::SeqCst);
        responses
            .get(index % responses.len())
            .cloned()
            .unwrap_or_else(|| MockRender::png(Vec::new()))
    }
}

#[async_trait]
impl RenderEngine for MockEngine {
    fn name(&self) -> &str {
        "mock-engine"
    }

    async fn render(
        &self,
        schema: &Value,
        asset_root: &Path,
        payload: &BoundPayload,
    ) -> anyhow::Result<RenderOutput> {
        self.captured_calls.write().push(CapturedRender {
            schema: schema.clone(),
            asset_root: asset_root.to_path_buf(),
            payload: payload.clone(),
        });

        if let Some(message) = self.simulate_failure.read().clone() {
            anyhow::bail!(message);
        }

        let response = self.next_response();
        Ok(RenderOutput::new(response.bytes, response.format_tag))
    }
}
