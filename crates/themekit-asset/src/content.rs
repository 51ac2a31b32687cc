//! Content resolution: from stored fields to the bytes written on disk

use crate::asset::{Asset, AssetContent};
use crate::classify::{ContentClassifier, ExtensionClassifier};
use themekit_core::{ContentHash, Result, ThemeError};

/// Re-indent a JSON document with two spaces per level.
///
/// Only whitespace between tokens changes: number text, key order and
/// duplicate keys come through exactly as written.
pub fn normalize_json(value: &str) -> serde_json::Result<String> {
    serde_json::from_str::<serde::de::IgnoredAny>(value)?;
    Ok(reindent(value))
}

/// Rewrite the whitespace of an already validated document
fn reindent(src: &str) -> String {
    let mut out = String::with_capacity(src.len() + src.len() / 2);
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut chars = src.chars().peekable();

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            ' ' | '\t' | '\n' | '\r' => {}
            '"' => {
                in_string = true;
                out.push(c);
            }
            '{' | '[' => {
                out.push(c);
                while chars.next_if(|ch| matches!(*ch, ' ' | '\t' | '\n' | '\r')).is_some() {}
                if let Some(close) = chars.next_if(|ch| matches!(*ch, '}' | ']')) {
                    out.push(close);
                } else {
                    depth += 1;
                    push_newline(&mut out, depth);
                }
            }
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                push_newline(&mut out, depth);
                out.push(c);
            }
            ',' => {
                out.push(c);
                push_newline(&mut out, depth);
            }
            ':' => out.push_str(": "),
            _ => out.push(c),
        }
    }
    out
}

fn push_newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Decode an asset into raw bytes using `classifier` to spot JSON keys.
///
/// Attachments are base64 decoded. Values of JSON keys are normalized,
/// all other values pass through verbatim.
pub fn resolve_contents(asset: &Asset, classifier: &dyn ContentClassifier) -> Result<Vec<u8>> {
    if !asset.is_valid() {
        return Err(ThemeError::InvalidAsset(format!(
            "'{}' has no key or no content",
            asset.key
        )));
    }

    match &asset.content {
        AssetContent::Binary(attachment) => {
            attachment.decode().map_err(|source| ThemeError::Decode {
                key: asset.key.clone(),
                source,
            })
        }
        AssetContent::Text(value) if classifier.is_json(&asset.key) => normalize_json(value)
            .map(String::into_bytes)
            .map_err(|source| ThemeError::Parse {
                key: asset.key.clone(),
                source,
            }),
        AssetContent::Text(value) => Ok(value.as_bytes().to_vec()),
    }
}

impl Asset {
    /// Fully decoded and normalized payload
    pub fn contents(&self) -> Result<Vec<u8>> {
        resolve_contents(self, &ExtensionClassifier::default())
    }

    /// Checksum of the resolved payload
    pub fn checksum(&self) -> Result<ContentHash> {
        Ok(ContentHash::from_bytes(&self.contents()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine as _;

    #[test]
    fn test_text_passes_through() {
        let asset = Asset::text("test.txt", "this is content");
        let data = asset.contents().unwrap();
        assert_eq!(data.len(), 15);
        assert_eq!(data, b"this is content");
    }

    #[test]
    fn test_invalid_base64_fails() {
        let asset = Asset::attachment("bad.png", "this is bad content");
        let err = asset.contents().unwrap_err();
        assert!(matches!(err, ThemeError::Decode { ref key, .. } if key == "bad.png"));
    }

    #[test]
    fn test_attachment_decodes() {
        let encoded = BASE64.encode(b"this is bad content");
        let asset = Asset::attachment("good.png", encoded);
        let data = asset.contents().unwrap();
        assert_eq!(data.len(), 19);
        assert_eq!(data, b"this is bad content");
    }

    #[test]
    fn test_json_is_normalized() {
        let asset = Asset::text("test.json", r#"{"test":"one"}"#);
        let data = asset.contents().unwrap();
        assert_eq!(data.len(), 19);
        assert_eq!(String::from_utf8(data).unwrap(), "{\n  \"test\": \"one\"\n}");
    }

    #[test]
    fn test_json_key_order_preserved() {
        let asset = Asset::text(
            "config/settings_data.json",
            r#"{"zebra":1,"apple":{"b":true,"a":null},"mango":[1,2]}"#,
        );
        let data = String::from_utf8(asset.contents().unwrap()).unwrap();
        let zebra = data.find("zebra").unwrap();
        let apple = data.find("apple").unwrap();
        let mango = data.find("mango").unwrap();
        assert!(zebra < apple && apple < mango);
        assert!(data.find("\"b\"").unwrap() < data.find("\"a\"").unwrap());
    }

    #[test]
    fn test_json_normalization_is_stable() {
        let once = normalize_json("{ \"a\" :\n[1,   2] }").unwrap();
        let twice = normalize_json(&once).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn test_json_number_text_preserved() {
        let cases = [
            (r#"{"price":1.50}"#, "{\n  \"price\": 1.50\n}"),
            (r#"{"n":1e2}"#, "{\n  \"n\": 1e2\n}"),
            (
                r#"{"id":123456789012345678901234}"#,
                "{\n  \"id\": 123456789012345678901234\n}",
            ),
        ];
        for (input, expected) in cases {
            let asset = Asset::text("config/settings_data.json", input);
            assert_eq!(String::from_utf8(asset.contents().unwrap()).unwrap(), expected);
        }
    }

    #[test]
    fn test_json_duplicate_keys_kept() {
        let asset = Asset::text("config/settings_data.json", r#"{"a":1,"a":2}"#);
        assert_eq!(
            String::from_utf8(asset.contents().unwrap()).unwrap(),
            "{\n  \"a\": 1,\n  \"a\": 2\n}"
        );
    }

    #[test]
    fn test_json_strings_and_empty_containers() {
        let normalized =
            normalize_json(r#"{"s":"a, {b}: [c] \"q\"","o":{ },"l":[ ],"x":[{}]}"#).unwrap();
        assert_eq!(
            normalized,
            "{\n  \"s\": \"a, {b}: [c] \\\"q\\\"\",\n  \"o\": {},\n  \"l\": [],\n  \"x\": [\n    {}\n  ]\n}"
        );
        assert_eq!(normalize_json(" 5 ").unwrap(), "5");
    }

    #[test]
    fn test_invalid_json_fails() {
        let asset = Asset::text("locales/en.json", "{not json");
        let err = asset.contents().unwrap_err();
        assert!(matches!(err, ThemeError::Parse { .. }));

        // Same text under a non-JSON key is not parsed
        let asset = Asset::text("locales/en.txt", "{not json");
        assert_eq!(asset.contents().unwrap(), b"{not json");
    }

    #[test]
    fn test_invalid_asset_fails_fast() {
        let err = Asset::text("", "this is content").contents().unwrap_err();
        assert!(matches!(err, ThemeError::InvalidAsset(_)));

        let err = Asset::text("empty.liquid", "").contents().unwrap_err();
        assert!(matches!(err, ThemeError::InvalidAsset(_)));
    }

    #[test]
    fn test_custom_classifier_controls_json() {
        struct NoJson;
        impl ContentClassifier for NoJson {
            fn is_binary(&self, _key: &str, _bytes: &[u8]) -> bool {
                false
            }
            fn is_json(&self, _key: &str) -> bool {
                false
            }
        }

        let asset = Asset::text("test.json", r#"{"test":"one"}"#);
        let data = resolve_contents(&asset, &NoJson).unwrap();
        assert_eq!(data, br#"{"test":"one"}"#);
    }

    #[test]
    fn test_checksum_follows_resolved_contents() {
        let compact = Asset::text("a.json", r#"{"x":1}"#);
        let pretty = Asset::text("a.json", "{\n  \"x\": 1\n}");
        assert_eq!(compact.checksum().unwrap(), pretty.checksum().unwrap());
    }
}
