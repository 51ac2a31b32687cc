//! Text versus binary classification of theme files

use std::collections::HashSet;
use std::path::Path;

/// Extensions stored as base64 attachments regardless of content
pub const DEFAULT_BINARY_EXTENSIONS: &[&str] = &[
    // images
    "png", "jpg", "jpeg", "gif", "ico", "webp", "bmp", "tif", "tiff",
    // fonts
    "woff", "woff2", "ttf", "otf", "eot",
    // media
    "mp3", "mp4", "ogg", "wav", "webm", "mov",
    // archives and documents
    "zip", "gz", "pdf", "swf",
];

/// Extensions always stored as text values
pub const DEFAULT_TEXT_EXTENSIONS: &[&str] = &[
    "liquid", "json", "js", "css", "scss", "txt", "html", "svg", "md", "yml", "yaml",
];

/// Policy deciding how a file's bytes travel to the remote store
pub trait ContentClassifier: Send + Sync {
    /// Whether `bytes` read from `key` must be sent as an attachment
    fn is_binary(&self, key: &str, bytes: &[u8]) -> bool;

    /// Whether the value of `key` is normalized as JSON
    fn is_json(&self, key: &str) -> bool {
        is_json_key(key)
    }
}

/// True for keys with a `.json` extension, in any case
pub fn is_json_key(key: &str) -> bool {
    extension(key).as_deref() == Some("json")
}

fn extension(key: &str) -> Option<String> {
    Path::new(key)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Bytes that cannot be carried in a text value
fn looks_binary(bytes: &[u8]) -> bool {
    bytes.contains(&0) || std::str::from_utf8(bytes).is_err()
}

/// Extension allow-lists with content sniffing for unknown extensions.
///
/// Text extensions still fall back to binary when the bytes are not UTF-8,
/// since a text value must be a valid string.
#[derive(Debug, Clone)]
pub struct ExtensionClassifier {
    binary: HashSet<String>,
    text: HashSet<String>,
}

impl Default for ExtensionClassifier {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            text: DEFAULT_TEXT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ExtensionClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add extensions (with or without the leading dot) treated as binary
    pub fn with_binary_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ext in extensions {
            let ext = normalize_extension(ext.as_ref());
            self.text.remove(&ext);
            self.binary.insert(ext);
        }
        self
    }

    /// Add extensions treated as text
    pub fn with_text_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ext in extensions {
            let ext = normalize_extension(ext.as_ref());
            self.binary.remove(&ext);
            self.text.insert(ext);
        }
        self
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

impl ContentClassifier for ExtensionClassifier {
    fn is_binary(&self, key: &str, bytes: &[u8]) -> bool {
        match extension(key) {
            Some(ext) if self.binary.contains(&ext) => true,
            Some(ext) if self.text.contains(&ext) => std::str::from_utf8(bytes).is_err(),
            _ => looks_binary(bytes),
        }
    }
}
