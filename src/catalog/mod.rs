//! Read-only access to image data compiled into the binary.
//!
//! The catalog is a flat table of `dir/file` paths mapped to bytes. Only two
//! operations are exposed: listing the files directly under a directory and
//! reading one file by its exact path. Anything that needs a friendlier view
//! (asset ids, decal names) builds it on top of these.
//!
//! # Example
//!
//! ```
//! use meme::catalog::{Catalog, EmbeddedCatalog};
//!
//! static TABLE: &[(&str, &[u8])] = &[("images/cat.png", b"PNG")];
//!
//! let catalog = EmbeddedCatalog::new(TABLE);
//! let entries = catalog.list_entries("images").unwrap();
//! assert_eq!(entries[0].name, "cat.png");
//! assert_eq!(catalog.read_entry("images/cat.png").unwrap(), b"PNG");
//! ```

mod bundled;

use thiserror::Error;

pub use bundled::{DECAL_DIR, IMAGE_DIR, IMAGE_EXTENSION, WATERMARK_DECAL};

/// Failure reading from a [`Catalog`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("directory '{0}' is not in the embedded catalog")]
    DirectoryNotFound(String),

    #[error("file '{0}' is not in the embedded catalog")]
    EntryNotFound(String),
}

/// A file listed by [`Catalog::list_entries`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// File name without the directory part.
    pub name: String,
    /// Full catalog path, usable with [`Catalog::read_entry`].
    pub path: String,
    /// Size in bytes.
    pub len: usize,
}

/// Read-by-path access to embedded files.
pub trait Catalog {
    /// Lists the files directly under `dir`, sorted by name.
    fn list_entries(&self, dir: &str) -> Result<Vec<CatalogEntry>, CatalogError>;

    /// Returns the bytes stored at `path`.
    fn read_entry(&self, path: &str) -> Result<Vec<u8>, CatalogError>;
}

/// A catalog backed by a static `(path, bytes)` table.
#[derive(Clone, Copy, Debug)]
pub struct EmbeddedCatalog {
    entries: &'static [(&'static str, &'static [u8])],
}

impl EmbeddedCatalog {
    pub const fn new(entries: &'static [(&'static str, &'static [u8])]) -> Self {
        Self { entries }
    }

    /// The images and decals shipped with the binary.
    pub const fn bundled() -> Self {
        Self::new(bundled::BUNDLED)
    }
}

impl Catalog for EmbeddedCatalog {
    fn list_entries(&self, dir: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
        let dir = dir.trim_end_matches('/');
        let mut found: Vec<CatalogEntry> = self
            .entries
            .iter()
            .filter_map(|(path, bytes)| {
                let name = path.strip_prefix(dir)?.strip_prefix('/')?;
                if name.is_empty() || name.contains('/') {
                    return None;
                }
                Some(CatalogEntry {
                    name: name.to_string(),
                    path: (*path).to_string(),
                    len: bytes.len(),
                })
            })
            .collect();

        if found.is_empty() {
            return Err(CatalogError::DirectoryNotFound(dir.to_string()));
        }

        found.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(found)
    }

    fn read_entry(&self, path: &str) -> Result<Vec<u8>, CatalogError> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == path)
            .map(|(_, bytes)| bytes.to_vec())
            .ok_or_else(|| CatalogError::EntryNotFound(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: &[(&str, &[u8])] = &[
        ("images/zebra.png", b"zz"),
        ("images/apple.png", b"a"),
        ("images/nested/deep.png", b"deep"),
        ("decals/logo.png", b"logo"),
    ];

    #[test]
    fn lists_direct_children_sorted() {
        let catalog = EmbeddedCatalog::new(TABLE);
        let entries = catalog.list_entries("images").expect("list images");

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["apple.png", "zebra.png"]);
        assert_eq!(entries[1].path, "images/zebra.png");
        assert_eq!(entries[1].len, 2);
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let catalog = EmbeddedCatalog::new(TABLE);
        assert_eq!(catalog.list_entries("decals/").expect("list").len(), 1);
    }

    #[test]
    fn prefix_of_directory_name_does_not_match() {
        let catalog = EmbeddedCatalog::new(TABLE);
        assert_eq!(
            catalog.list_entries("imag"),
            Err(CatalogError::DirectoryNotFound("imag".into()))
        );
    }

    #[test]
    fn read_missing_entry_fails() {
        let catalog = EmbeddedCatalog::new(TABLE);
        assert_eq!(
            catalog.read_entry("images/pear.png"),
            Err(CatalogError::EntryNotFound("images/pear.png".into()))
        );
    }

    #[test]
    fn bundled_catalog_has_images_and_decals() {
        let catalog = EmbeddedCatalog::bundled();
        assert!(!catalog.list_entries(IMAGE_DIR).expect("images").is_empty());
        assert!(!catalog
            .read_entry(WATERMARK_DECAL)
            .expect("watermark")
            .is_empty());
    }
}
