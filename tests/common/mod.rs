#![allow(dead_code)]

use std::fs;
use std::path::Path;

use meme::catalog::EmbeddedCatalog;
use meme::registry::AssetRegistry;

pub static TEST_TABLE: &[(&str, &[u8])] = &[
    ("images/doge.png", b"\x89PNG doge"),
    ("images/fry.png", b"\x89PNG fry"),
    ("images/yoda.png", b"\x89PNG yoda"),
    ("decals/watermark.png", b"\x89PNG watermark"),
];

pub fn test_catalog() -> EmbeddedCatalog {
    EmbeddedCatalog::new(TEST_TABLE)
}

pub fn test_registry() -> AssetRegistry {
    AssetRegistry::build(&test_catalog()).expect("build test registry")
}

pub fn write_file(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, bytes).expect("write file");
}
