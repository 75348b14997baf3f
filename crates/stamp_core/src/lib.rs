//! # stamp_core
//!
//! Request binding and build orchestration for MemeStamp.
//!
//! This crate turns registered templates plus caller-supplied request data
//! into rendered results. It owns the binding and orchestration pipeline
//! only; the pixel work lives behind the [`RenderEngine`] seam.
//!
//! # Architecture
//!
//! - **Requests**: avatar references and text values for one build
//! - **Binder**: validates shape and resolves placeholder defaults
//! - **Builders**: one per template, drive bind → render → format mapping
//! - **Registry**: maps identifiers to builders, scans template roots
//! - **Engine seam**: async trait the external renderer implements
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stamp_core::{RequestData, TemplateRegistry};
//!
//! let registry = TemplateRegistry::new(engine);
//! registry.add_paths(Path::new("./data"))?;
//!
//! let builder = registry.get_builder("petpet")?;
//! let data = RequestData::new().with_to_avatar("https://example.com/a.png");
//! let result = builder.build(&data).await?;
//! std::fs::write(format!("out.{}", result.format), result.bytes)?;
//! ```

pub mod bind;
pub mod builder;
pub mod engine;
pub mod error;
pub mod format;
pub mod mock;
pub mod registry;
pub mod request;

// Re-export main types for convenience
pub use bind::{BoundPayload, DataBinder, TextValues};
pub use builder::{RenderResult, TemplateBuilder};
pub use engine::{RenderEngine, RenderOutput};
pub use error::{CoreError, CoreResult};
pub use format::ResultFormat;
pub use mock::{CapturedRender, MockEngine, MockRender};
pub use registry::{ScanFailure, ScanReport, TemplateRegistry};
pub use request::{AvatarRefs, RequestData, TextRequest};
