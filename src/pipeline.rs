//! Stages that run after an image has been resolved.
//!
//! Rendering and delivery live outside this crate; these traits are the seams
//! they plug into. A pass-through renderer and a file sink are provided so the
//! CLI works end to end without them.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MemeError;
use crate::stream::ByteStream;

/// Applies overlays to a resolved image.
pub trait Render {
    fn render(&self, stream: ByteStream) -> Result<ByteStream, MemeError>;
}

/// Delivers the final image somewhere and reports where it went.
pub trait Sink {
    fn deliver(&self, stream: ByteStream) -> Result<String, MemeError>;
}

/// Returns the image unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassThrough;

impl Render for PassThrough {
    fn render(&self, stream: ByteStream) -> Result<ByteStream, MemeError> {
        Ok(stream)
    }
}

/// Writes the image to a file, replacing any existing one.
#[derive(Clone, Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn deliver(&self, stream: ByteStream) -> Result<String, MemeError> {
        fs::write(&self.path, stream.as_bytes()).map_err(|source| MemeError::OutputWrite {
            path: self.path.clone(),
            source,
        })?;
        log::info!("wrote {} bytes to {}", stream.len(), self.path.display());
        Ok(self.path.display().to_string())
    }
}
