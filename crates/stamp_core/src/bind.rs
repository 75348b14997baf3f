//! Request validation and default resolution.

use serde::{Deserialize, Serialize};
use stamp_templates::TemplateDescriptor;
use tracing::debug;

use crate::error::CoreResult;
use crate::request::{AvatarRefs, RequestData};

/// Placeholder used when a request omits the sender text.
pub const DEFAULT_FROM_TEXT: &str = "from";
/// Placeholder used when a request omits the target text.
pub const DEFAULT_TO_TEXT: &str = "to";
/// Placeholder used when a request omits the group text.
pub const DEFAULT_GROUP_TEXT: &str = "group";

/// Text values after default resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValues {
    pub from: String,
    pub to: String,
    pub group: String,
    #[serde(rename = "textList")]
    pub text_list: Vec<String>,
}

impl Default for TextValues {
    fn default() -> Self {
        Self {
            from: DEFAULT_FROM_TEXT.to_string(),
            to: DEFAULT_TO_TEXT.to_string(),
            group: DEFAULT_GROUP_TEXT.to_string(),
            text_list: Vec::new(),
        }
    }
}

/// Request data merged against a template, ready for the render engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundPayload {
    #[serde(rename = "avatar")]
    pub avatars: AvatarRefs,
    pub text: TextValues,
}

/// Binds request data to a template descriptor.
///
/// Binding is shallow on purpose: scalar text fields get their placeholder
/// defaults, avatar references pass through untouched, and both the
/// `random` and `textList` sequences keep their supplied order exactly.
/// Whether a template actually requires a given slot is for the render
/// engine to decide, since it is the only component that fully understands the
/// template schema.
pub struct DataBinder;

impl DataBinder {
    pub fn bind(descriptor: &TemplateDescriptor, data: &RequestData) -> CoreResult<BoundPayload> {
        debug!(
            "Binding request for template {}: {} random avatar(s), {} text item(s)",
            descriptor.id(),
            data.avatars.random.len(),
            data.text.text_list.len()
        );

        let text = TextValues {
            from: data
                .text
                .from
                .clone()
                .unwrap_or_else(|| DEFAULT_FROM_TEXT.to_string()),
            to: data
                .text
                .to
                .clone()
                .unwrap_or_else(|| DEFAULT_TO_TEXT.to_string()),
            group: data
                .text
                .group
                .clone()
                .unwrap_or_else(|| DEFAULT_GROUP_TEXT.to_string()),
            text_list: data.text.text_list.clone(),
        };

        Ok(BoundPayload {
            avatars: data.avatars.clone(),
            text,
        })
    }
}
