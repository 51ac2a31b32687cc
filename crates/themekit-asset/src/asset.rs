//! The asset value type and its wire representation

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Base64 framed binary content, kept in its encoded form.
///
/// Decoding is deferred to content resolution so a malformed attachment
/// received from the remote store surfaces as a decode error there.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attachment(String);

impl Attachment {
    /// Encode raw bytes
    pub fn encode(bytes: &[u8]) -> Self {
        Self(BASE64.encode(bytes))
    }

    /// Wrap an already encoded string without validating it
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// The encoded text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode back to raw bytes
    pub fn decode(&self) -> std::result::Result<Vec<u8>, base64::DecodeError> {
        BASE64.decode(&self.0)
    }

    /// Length of the encoded text, not of the decoded payload
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Text or binary payload of an asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetContent {
    /// Verbatim text, sent as `value`
    Text(String),
    /// Base64 framed bytes, sent as `attachment`
    Binary(Attachment),
}

impl AssetContent {
    /// Byte length of the raw stored field
    pub fn len(&self) -> usize {
        match self {
            AssetContent::Text(value) => value.len(),
            AssetContent::Binary(attachment) => attachment.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, AssetContent::Binary(_))
    }
}

impl Default for AssetContent {
    fn default() -> Self {
        AssetContent::Text(String::new())
    }
}

/// One theme file: a root-relative, slash separated key plus its content.
///
/// On the wire an asset is `{ "key": .., "value"?: .., "attachment"?: .. }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "WireAsset", into = "WireAsset")]
pub struct Asset {
    pub key: String,
    pub content: AssetContent,
}

impl Asset {
    /// Create a text asset
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            content: AssetContent::Text(value.into()),
        }
    }

    /// Create a binary asset from raw bytes
    pub fn binary(key: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            key: key.into(),
            content: AssetContent::Binary(Attachment::encode(bytes)),
        }
    }

    /// Create a binary asset from an already base64 encoded attachment
    pub fn attachment(key: impl Into<String>, encoded: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            content: AssetContent::Binary(Attachment::from_encoded(encoded)),
        }
    }

    /// Text content, if this is a text asset
    pub fn value(&self) -> Option<&str> {
        match &self.content {
            AssetContent::Text(value) => Some(value),
            AssetContent::Binary(_) => None,
        }
    }

    /// Encoded attachment, if this is a binary asset
    pub fn attachment_str(&self) -> Option<&str> {
        match &self.content {
            AssetContent::Text(_) => None,
            AssetContent::Binary(attachment) => Some(attachment.as_str()),
        }
    }

    /// An asset is valid when it has a key and some content
    pub fn is_valid(&self) -> bool {
        !self.key.is_empty() && !self.content.is_empty()
    }

    /// Length of the stored field without decoding.
    ///
    /// For binary assets this is the base64 length; measure `contents()`
    /// for the on-disk size.
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct WireAsset {
    key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attachment: Option<String>,
}

impl From<WireAsset> for Asset {
    fn from(wire: WireAsset) -> Self {
        // A non-empty attachment wins, matching content resolution order.
        let content = match (wire.value, wire.attachment) {
            (_, Some(a)) if !a.is_empty() => AssetContent::Binary(Attachment(a)),
            (Some(v), _) => AssetContent::Text(v),
            (None, Some(a)) => AssetContent::Binary(Attachment(a)),
            (None, None) => AssetContent::default(),
        };
        Asset {
            key: wire.key,
            content,
        }
    }
}

impl From<Asset> for WireAsset {
    fn from(asset: Asset) -> Self {
        let (value, attachment) = match asset.content {
            AssetContent::Text(v) => (Some(v), None),
            AssetContent::Binary(a) => (None, Some(a.0)),
        };
        WireAsset {
            key: asset.key,
            value,
            attachment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(Asset::text("test.txt", "one").is_valid());
        assert!(Asset::attachment("test.txt", "one").is_valid());
        assert!(!Asset::text("", "one").is_valid());
        assert!(!Asset::text("test.txt", "").is_valid());
        assert!(!Asset::attachment("test.txt", "").is_valid());
    }

    #[test]
    fn test_size_is_raw_field_length() {
        assert_eq!(Asset::text("", "one").size(), 3);
        assert_eq!(Asset::attachment("", "other").size(), 5);

        // Encoded length, not the three decoded bytes
        let asset = Asset::binary("a.png", b"abc");
        assert_eq!(asset.attachment_str(), Some("YWJj"));
        assert_eq!(asset.size(), 4);
    }

    #[test]
    fn test_wire_text_shape() {
        let asset = Asset::text("assets/application.js", "//this is js\n");
        let json = serde_json::to_string(&asset).unwrap();
        assert_eq!(
            json,
            r#"{"key":"assets/application.js","value":"//this is js\n"}"#
        );
    }

    #[test]
    fn test_wire_binary_shape() {
        let asset = Asset::binary("assets/pixel.png", b"abc");
        let json = serde_json::to_string(&asset).unwrap();
        assert_eq!(json, r#"{"key":"assets/pixel.png","attachment":"YWJj"}"#);
    }

    #[test]
    fn test_wire_deserialize() {
        let asset: Asset =
            serde_json::from_str(r#"{"key":"layout/theme.liquid","value":"<html>"}"#).unwrap();
        assert_eq!(asset, Asset::text("layout/theme.liquid", "<html>"));

        let asset: Asset =
            serde_json::from_str(r#"{"key":"assets/a.png","attachment":"YWJj"}"#).unwrap();
        assert_eq!(asset, Asset::attachment("assets/a.png", "YWJj"));

        let asset: Asset = serde_json::from_str(r#"{"key":"empty.liquid"}"#).unwrap();
        assert!(!asset.is_valid());
    }

    #[test]
    fn test_wire_attachment_wins_over_value() {
        let asset: Asset = serde_json::from_str(
            r#"{"key":"a.png","value":"ignored","attachment":"YWJj"}"#,
        )
        .unwrap();
        assert_eq!(asset.attachment_str(), Some("YWJj"));
        assert_eq!(asset.value(), None);

        let asset: Asset =
            serde_json::from_str(r#"{"key":"a.txt","value":"kept","attachment":""}"#).unwrap();
        assert_eq!(asset.value(), Some("kept"));
    }
}
