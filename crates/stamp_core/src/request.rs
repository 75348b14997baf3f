//! Caller-supplied data for one build request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};

/// Avatar references for the slots a template may draw.
///
/// Every reference is an opaque string: a remote URL, a local path, or an
/// engine-specific identifier. The core never fetches or interprets them;
/// only the render engine assigns meaning. `random` holds the variable
/// number of free-choice participants in their supplied order, which is
/// semantically meaningful (it controls placement order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarRefs {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub bot: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub random: Vec<String>,
}

/// Text values supplied with a request.
///
/// Scalar fields left as `None` resolve to placeholder defaults at bind
/// time; `text_list` covers templates with repeated text slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default, rename = "textList")]
    pub text_list: Vec<String>,
}

/// Everything a caller supplies for one build invocation.
///
/// Immutable once constructed and not persisted beyond the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestData {
    #[serde(default, rename = "avatar")]
    pub avatars: AvatarRefs,
    #[serde(default)]
    pub text: TextRequest,
}

impl RequestData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decompose an untyped JSON value into request data.
    ///
    /// Absent fields are fine, every slot is optional at this level.
    /// A value that cannot decompose into the avatar/text shape at all
    /// fails with [`CoreError::MalformedRequest`].
    pub fn from_value(value: Value) -> CoreResult<Self> {
        serde_json::from_value(value).map_err(|e| CoreError::MalformedRequest(e.to_string()))
    }

    /// Decompose a JSON string, see [`RequestData::from_value`].
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::MalformedRequest(e.to_string()))
    }

    pub fn with_from_avatar(mut self, reference: impl Into<String>) -> Self {
        self.avatars.from = Some(reference.into());
        self
    }

    pub fn with_to_avatar(mut self, reference: impl Into<String>) -> Self {
        self.avatars.to = Some(reference.into());
        self
    }

    pub fn with_bot_avatar(mut self, reference: impl Into<String>) -> Self {
        self.avatars.bot = Some(reference.into());
        self
    }

    pub fn with_group_avatar(mut self, reference: impl Into<String>) -> Self {
        self.avatars.group = Some(reference.into());
        self
    }

    pub fn with_random_avatar(mut self, reference: impl Into<String>) -> Self {
        self.avatars.random.push(reference.into());
        self
    }

    pub fn with_from_text(mut self, text: impl Into<String>) -> Self {
        self.text.from = Some(text.into());
        self
    }

    pub fn with_to_text(mut self, text: impl Into<String>) -> Self {
        self.text.to = Some(text.into());
        self
    }

    pub fn with_group_text(mut self, text: impl Into<String>) -> Self {
        self.text.group = Some(text.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text.text_list.push(text.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_partial() {
        let data = RequestData::from_value(json!({
            "avatar": {"to": "https://example.com/a.png"},
            "text": {"textList": ["x", "y"]}
        }))
        .unwrap();

        assert_eq!(data.avatars.to.as_deref(), Some("https://example.com/a.png"));
        assert!(data.avatars.from.is_none());
        assert!(data.avatars.random.is_empty());
        assert_eq!(data.text.text_list, vec!["x", "y"]);
    }

    #[test]
    fn test_from_value_empty_object() {
        let data = RequestData::from_value(json!({})).unwrap();
        assert_eq!(data, RequestData::default());
    }

    #[test]
    fn test_from_value_wrong_shape() {
        let err = RequestData::from_value(json!({"avatar": ["not", "a", "map"]})).unwrap_err();
        assert!(matches!(err, CoreError::MalformedRequest(_)));

        let err = RequestData::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, CoreError::MalformedRequest(_)));
    }

    #[test]
    fn test_builders_preserve_order() {
        let data = RequestData::new()
            .with_random_avatar("a")
            .with_random_avatar("b")
            .with_random_avatar("c")
            .with_text("one")
            .with_text("two");

        assert_eq!(data.avatars.random, vec!["a", "b", "c"]);
        assert_eq!(data.text.text_list, vec!["one", "two"]);
    }
}
