use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::catalog::Catalog;
use crate::config::ResolverConfig;
use crate::error::MemeError;
use crate::registry::AssetRegistry;
use crate::stream::{read_bounded, BoundedReadError, ByteStream};

/// Performs the I/O for each source kind.
///
/// Every method buffers the whole image before returning; nothing is retried
/// and no partial data is ever handed back.
pub struct Fetcher<'a> {
    catalog: &'a dyn Catalog,
    registry: &'a AssetRegistry,
    config: ResolverConfig,
    agent: ureq::Agent,
}

impl<'a> Fetcher<'a> {
    pub fn new(
        catalog: &'a dyn Catalog,
        registry: &'a AssetRegistry,
        config: ResolverConfig,
    ) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.http_timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            catalog,
            registry,
            config,
            agent,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Reads a registered asset from the catalog.
    ///
    /// # Errors
    /// Returns [`MemeError::InternalRead`] if `id` is not registered or its
    /// bytes are missing from the catalog.
    pub fn fetch_asset(&self, id: &str) -> Result<ByteStream, MemeError> {
        let path = self
            .registry
            .path(id)
            .ok_or_else(|| MemeError::InternalRead {
                what: "image",
                path: id.to_string(),
                message: "asset id is not registered".to_string(),
            })?;

        let bytes = self
            .catalog
            .read_entry(path)
            .map_err(|source| MemeError::InternalRead {
                what: "image",
                path: path.to_string(),
                message: source.to_string(),
            })?;

        log::debug!("loaded asset '{}' ({} bytes)", id, bytes.len());
        Ok(ByteStream::new(bytes))
    }

    /// Downloads `url` with a single blocking GET.
    ///
    /// # Errors
    /// - [`MemeError::Request`] on transport failure, timeout or a broken body
    /// - [`MemeError::SourceUnreachable`] if the status is not 200
    /// - [`MemeError::SourceTooLarge`] if the body exceeds the size limit
    pub fn fetch_url(&self, url: &str) -> Result<ByteStream, MemeError> {
        log::info!("downloading {}", redact_url(url));

        let mut response = self
            .agent
            .get(url)
            .call()
            .map_err(|source| MemeError::Request {
                url: url.to_string(),
                message: source.to_string(),
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            log::debug!("{} answered HTTP {}", redact_url(url), status);
            return Err(MemeError::SourceUnreachable {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response
            .body_mut()
            .with_config()
            .limit(self.config.max_bytes)
            .read_to_vec()
            .map_err(|source| match source {
                ureq::Error::BodyExceedsLimit(_) => MemeError::SourceTooLarge {
                    source_name: url.to_string(),
                    limit: self.config.max_bytes,
                },
                other => MemeError::Request {
                    url: url.to_string(),
                    message: format!("could not read response body: {other}"),
                },
            })?;

        log::debug!("downloaded {} bytes from {}", bytes.len(), redact_url(url));
        Ok(ByteStream::new(bytes))
    }

    /// Drains the process's standard input.
    pub fn fetch_stdin(&self) -> Result<ByteStream, MemeError> {
        self.fetch_stdin_from(std::io::stdin().lock())
    }

    /// Drains `reader` as if it were standard input.
    ///
    /// # Errors
    /// Returns [`MemeError::StdinRead`] on a read failure and
    /// [`MemeError::SourceTooLarge`] if the input exceeds the size limit.
    pub fn fetch_stdin_from<R: Read>(&self, reader: R) -> Result<ByteStream, MemeError> {
        let bytes = read_bounded(reader, self.config.max_bytes).map_err(|err| match err {
            BoundedReadError::Io(source) => MemeError::StdinRead(source),
            BoundedReadError::TooLarge => MemeError::SourceTooLarge {
                source_name: "stdin".to_string(),
                limit: self.config.max_bytes,
            },
        })?;

        log::debug!("read {} bytes from stdin", bytes.len());
        Ok(ByteStream::new(bytes))
    }

    /// Reads an already expanded local path.
    ///
    /// # Errors
    /// Returns [`MemeError::LocalRead`] if the file cannot be opened or read
    /// and [`MemeError::SourceTooLarge`] if it exceeds the size limit.
    pub fn read_local(&self, path: &Path) -> Result<ByteStream, MemeError> {
        let local_err = |source| MemeError::LocalRead {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(local_err)?;
        let bytes = read_bounded(file, self.config.max_bytes).map_err(|err| match err {
            BoundedReadError::Io(source) => local_err(source),
            BoundedReadError::TooLarge => MemeError::SourceTooLarge {
                source_name: path.display().to_string(),
                limit: self.config.max_bytes,
            },
        })?;

        log::debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(ByteStream::new(bytes))
    }

    /// Reads a catalog entry by exact path.
    ///
    /// # Errors
    /// Returns [`MemeError::InternalRead`] if the entry is missing.
    pub fn fetch_decal(&self, name: &str) -> Result<ByteStream, MemeError> {
        self.catalog
            .read_entry(name)
            .map(ByteStream::new)
            .map_err(|source| MemeError::InternalRead {
                what: "decal",
                path: name.to_string(),
                message: source.to_string(),
            })
    }
}

/// Strips credentials, query and fragment so URLs are safe to log.
pub(crate) fn redact_url(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(mut url) => {
            let _ = url.set_password(None);
            let _ = url.set_username("");
            url.set_query(None);
            url.set_fragment(None);
            url.to_string()
        }
        Err(_) => raw.to_string(),
    }
}
