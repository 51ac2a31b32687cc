//! Throwaway theme project trees for tests

use std::fs;
use std::path::{Path, PathBuf};

/// A 1x1 transparent PNG
pub const PIXEL_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// Fresh empty directory under the system temp dir
pub fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("themekit_test_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// A small theme project with text, JSON and binary files
pub fn fixture_project() -> PathBuf {
    let root = temp_dir();
    let files: &[(&str, &[u8])] = &[
        ("assets/application.js", b"//this is js\n"),
        ("assets/pixel.png", PIXEL_PNG),
        ("config/settings_data.json", br#"{"current":"Default"}"#),
        ("config.json", br#"{"development":{"store":"example.myshopify.com"}}"#),
        ("invalid_config.yml", b"development: [\n"),
        ("layout/.gitkeep", b""),
        ("locales/en.json", br#"{"general":{"title":"Hello"}}"#),
        ("snippets/snippet.js", b"console.log('snippet');\n"),
        ("templates/customers/test.liquid", b"{{ customer.name }}\n"),
        ("templates/template.liquid", b"<h1>{{ page.title }}</h1>\n"),
        ("valid_config.yml", b"development:\n  store: example.myshopify.com\n"),
        ("valid_patterns", b"*.png\n/\\.min\\./\n# comment\n\nconfig/*\n"),
        ("whatever.txt", b"whatever\n"),
    ];
    for (key, contents) in files {
        write_file(&root, key, contents);
    }
    root
}

pub fn write_file(root: &Path, key: &str, contents: &[u8]) {
    let path = root.join(key);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

pub fn cleanup(root: &Path) {
    fs::remove_dir_all(root).ok();
}
