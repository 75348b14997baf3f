//! # stamp_templates
//!
//! Template discovery and declaration parsing for MemeStamp.
//!
//! A template is a directory holding a `data.json` declaration plus the
//! static assets (backgrounds, fonts) its renderer needs. This crate reads
//! declarations into [`TemplateDescriptor`]s; it never interprets the
//! declaration beyond a few well-known listing keys; the full schema is
//! carried verbatim for the render engine.
//!
//! ## Example
//!
//! ```rust,no_run
//! use stamp_templates::TemplateLoader;
//! use std::path::Path;
//!
//! let loader = TemplateLoader::new();
//! let descriptor = loader.load(Path::new("data/petpet"), "petpet").unwrap();
//! assert_eq!(descriptor.id(), "petpet");
//! ```

pub mod descriptor;
pub mod error;
pub mod loader;

pub use descriptor::TemplateDescriptor;
pub use error::{TemplateError, TemplateResult};
pub use loader::{TemplateLoader, DECLARATION_FILE};
