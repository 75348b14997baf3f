//! Result format mapping.

use serde::{Deserialize, Serialize};

/// Engine tag for static images.
pub const PNG_TAG: &str = "png";
/// Engine tag for animated sequences.
pub const GIF_TAG: &str = "gif";

/// Encoding of a finished build result.
///
/// The render engine reports its encoding as a plain tag; the orchestrator
/// maps it into this closed set and refuses tags it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultFormat {
    Png,
    Gif,
}

impl ResultFormat {
    /// Lowercase textual form, suitable as a file extension.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultFormat::Png => PNG_TAG,
            ResultFormat::Gif => GIF_TAG,
        }
    }

    /// Map an engine-native tag to a format, `None` when unrecognized.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            PNG_TAG => Some(ResultFormat::Png),
            GIF_TAG => Some(ResultFormat::Gif),
            _ => None,
        }
    }

    /// MIME content type for the encoded bytes.
    pub fn content_type(&self) -> String {
        format!("image/{}", self.as_str())
    }
}

impl std::fmt::Display for ResultFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        assert_eq!(ResultFormat::from_tag("png"), Some(ResultFormat::Png));
        assert_eq!(ResultFormat::from_tag("gif"), Some(ResultFormat::Gif));
        assert_eq!(ResultFormat::Png.as_str(), "png");
        assert_eq!(ResultFormat::Gif.as_str(), "gif");
    }

    #[test]
    fn test_unknown_tags_rejected() {
        assert_eq!(ResultFormat::from_tag("webp"), None);
        assert_eq!(ResultFormat::from_tag("PNG"), None);
        assert_eq!(ResultFormat::from_tag(""), None);
    }

    #[test]
    fn test_content_type() {
        assert_eq!(ResultFormat::Png.content_type(), "image/png");
        assert_eq!(ResultFormat::Gif.content_type(), "image/gif");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ResultFormat::Gif).unwrap(), "\"gif\"");
        let parsed: ResultFormat = serde_json::from_str("\"png\"").unwrap();
        assert_eq!(parsed, ResultFormat::Png);
    }
}
