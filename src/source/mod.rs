//! Turning an image reference into bytes.
//!
//! Resolution happens in two steps. [`classify`] looks at the reference and
//! picks exactly one [`SourceKind`], carrying the key needed to fetch it. The
//! [`Fetcher`] then performs the I/O for that kind only. [`Resolver`] bundles
//! both behind one entry point.
//!
//! # Example
//!
//! ```
//! use meme::catalog::EmbeddedCatalog;
//! use meme::registry::AssetRegistry;
//! use meme::source::{Resolver, SourceKind};
//! use meme::ResolverConfig;
//!
//! let catalog = EmbeddedCatalog::bundled();
//! let registry = AssetRegistry::build(&catalog).unwrap();
//! let resolver = Resolver::new(&catalog, &registry, ResolverConfig::default());
//!
//! assert_eq!(resolver.classify("doge").unwrap(), SourceKind::Asset("doge".into()));
//! assert_eq!(resolver.classify("-").unwrap(), SourceKind::Stdin);
//! assert!(!resolver.resolve("doge").unwrap().is_empty());
//! ```

mod classify;
mod fetch;
mod home;

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::config::ResolverConfig;
use crate::error::MemeError;
use crate::registry::AssetRegistry;
use crate::stream::ByteStream;

pub use classify::{classify, STDIN_SENTINEL, URL_PREFIX};
pub use fetch::Fetcher;
pub use home::{HomeDir, HomeError};

/// Where an image reference points, with the key used to fetch it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// A registered asset id.
    Asset(String),
    /// A URL, not yet validated.
    Url(String),
    /// Standard input.
    Stdin,
    /// An existing path, already `~`-expanded.
    LocalFile(PathBuf),
}

impl SourceKind {
    pub fn name(&self) -> &'static str {
        match self {
            SourceKind::Asset(_) => "asset",
            SourceKind::Url(_) => "url",
            SourceKind::Stdin => "stdin",
            SourceKind::LocalFile(_) => "file",
        }
    }

    pub fn key(&self) -> Option<Cow<'_, str>> {
        match self {
            SourceKind::Asset(id) => Some(Cow::Borrowed(id.as_str())),
            SourceKind::Url(url) => Some(Cow::Borrowed(url.as_str())),
            SourceKind::Stdin => None,
            SourceKind::LocalFile(path) => Some(path.to_string_lossy()),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key() {
            Some(key) => write!(f, "{} {}", self.name(), key),
            None => write!(f, "{}", self.name()),
        }
    }
}

/// Classifies and fetches image references against one registry.
pub struct Resolver<'a> {
    registry: &'a AssetRegistry,
    home: HomeDir,
    fetcher: Fetcher<'a>,
}

impl<'a> Resolver<'a> {
    pub fn new(
        catalog: &'a dyn Catalog,
        registry: &'a AssetRegistry,
        config: ResolverConfig,
    ) -> Self {
        Self {
            registry,
            home: HomeDir::from_env(),
            fetcher: Fetcher::new(catalog, registry, config),
        }
    }

    /// Replaces the home-directory lookup used for `~` paths.
    pub fn with_home(mut self, home: HomeDir) -> Self {
        self.home = home;
        self
    }

    pub fn registry(&self) -> &AssetRegistry {
        self.registry
    }

    pub fn fetcher(&self) -> &Fetcher<'a> {
        &self.fetcher
    }

    pub fn classify(&self, reference: &str) -> Result<SourceKind, MemeError> {
        classify(reference, self.registry, &self.home)
    }

    /// Fetches a classified source. No further probing happens here.
    pub fn fetch(&self, kind: &SourceKind) -> Result<ByteStream, MemeError> {
        match kind {
            SourceKind::Asset(id) => self.fetcher.fetch_asset(id),
            SourceKind::Url(url) => self.fetcher.fetch_url(url),
            SourceKind::Stdin => self.fetcher.fetch_stdin(),
            SourceKind::LocalFile(path) => self.fetcher.read_local(path),
        }
    }

    /// Classifies `reference` and fetches it.
    pub fn resolve(&self, reference: &str) -> Result<ByteStream, MemeError> {
        let kind = self.classify(reference)?;
        log::info!("resolved '{}' as {}", reference, kind.name());
        self.fetch(&kind)
    }

    pub fn fetch_asset(&self, id: &str) -> Result<ByteStream, MemeError> {
        self.fetcher.fetch_asset(id)
    }

    pub fn fetch_url(&self, url: &str) -> Result<ByteStream, MemeError> {
        self.fetcher.fetch_url(url)
    }

    pub fn fetch_stdin(&self) -> Result<ByteStream, MemeError> {
        self.fetcher.fetch_stdin()
    }

    /// Expands `~` in `path` and reads the file.
    ///
    /// # Errors
    /// Returns [`MemeError::LocalRead`] if expansion fails or the file cannot
    /// be read.
    pub fn fetch_local_file(&self, path: &str) -> Result<ByteStream, MemeError> {
        let expanded = self
            .home
            .expand(path)
            .map_err(|err| MemeError::LocalRead {
                path: PathBuf::from(path),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, err),
            })?;
        self.fetcher.read_local(&expanded)
    }

    pub fn fetch_decal(&self, name: &str) -> Result<ByteStream, MemeError> {
        self.fetcher.fetch_decal(name)
    }
}
