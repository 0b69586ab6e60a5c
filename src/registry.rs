//! Asset ids for the images in the embedded catalog.
//!
//! An asset id is the image's file name with [`IMAGE_EXTENSION`] removed, so
//! `images/doge.png` is selected with `doge`. The registry is built once at
//! startup and only read afterwards.

use std::collections::BTreeMap;
use std::path::Path;

use crate::catalog::{Catalog, IMAGE_DIR, IMAGE_EXTENSION};
use crate::error::MemeError;

/// Mapping from asset id to catalog path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetRegistry {
    assets: BTreeMap<String, String>,
}

impl AssetRegistry {
    /// Builds the registry from the catalog's image directory.
    ///
    /// # Errors
    /// Returns [`MemeError::RegistryBuild`] if the image directory cannot be
    /// listed.
    pub fn build(catalog: &dyn Catalog) -> Result<Self, MemeError> {
        Self::build_from(catalog, IMAGE_DIR, IMAGE_EXTENSION)
    }

    /// Builds a registry from an arbitrary catalog directory and extension.
    pub fn build_from(
        catalog: &dyn Catalog,
        dir: &str,
        extension: &str,
    ) -> Result<Self, MemeError> {
        let entries = catalog
            .list_entries(dir)
            .map_err(|source| MemeError::RegistryBuild {
                message: source.to_string(),
            })?;

        let mut assets = BTreeMap::new();
        for entry in entries {
            let base = Path::new(&entry.name)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| entry.name.clone());
            let id = base.strip_suffix(extension).unwrap_or(&base).to_string();

            if let Some(previous) = assets.insert(id.clone(), entry.path.clone()) {
                log::warn!(
                    "asset id '{}' maps to both '{}' and '{}'; keeping the latter",
                    id,
                    previous,
                    entry.path
                );
            }
        }

        log::debug!("registered {} embedded image(s) from '{}'", assets.len(), dir);
        Ok(Self { assets })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.assets.contains_key(id)
    }

    /// Catalog path for `id`, if registered.
    pub fn path(&self, id: &str) -> Option<&str> {
        self.assets.get(id).map(String::as_str)
    }

    /// Asset ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.assets.keys().map(String::as_str)
    }

    /// `(id, path)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assets
            .iter()
            .map(|(id, path)| (id.as_str(), path.as_str()))
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
