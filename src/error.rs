use std::path::PathBuf;
use thiserror::Error;

/// Advisory severity of a [`MemeError`].
///
/// Both classes currently halt the process. `User` errors come from bad input
/// and a long-running caller may continue after them; `Fatal` errors indicate
/// a broken build (missing or corrupt embedded data).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    User,
    Fatal,
}

/// The main error type for meme operations.
#[derive(Debug, Error)]
pub enum MemeError {
    #[error("Image not recognised: '{reference}'")]
    UnrecognizedReference { reference: String },

    #[error("Request error for {url}: {message}")]
    Request { url: String, message: String },

    #[error("Could not access URL {url} (HTTP {status})")]
    SourceUnreachable { url: String, status: u16 },

    #[error("Could not read stdin: {0}")]
    StdinRead(#[source] std::io::Error),

    #[error("Could not read local file {path}: {source}")]
    LocalRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image from {source_name} exceeds the {limit} byte limit")]
    SourceTooLarge { source_name: String, limit: u64 },

    #[error("Could not read embedded {what} '{path}': {message}")]
    InternalRead {
        what: &'static str,
        path: String,
        message: String,
    },

    #[error("Could not read embedded images: {message}")]
    RegistryBuild { message: String },

    #[error("Could not write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported output format: {0}")]
    UnsupportedOutput(String),

    #[error("Failed to write JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl MemeError {
    pub fn class(&self) -> ErrorClass {
        match self {
            MemeError::InternalRead { .. } | MemeError::RegistryBuild { .. } => ErrorClass::Fatal,
            _ => ErrorClass::User,
        }
    }

    /// Process exit code for this error: 1 for user errors, 2 for fatal ones.
    pub fn exit_code(&self) -> i32 {
        match self.class() {
            ErrorClass::User => 1,
            ErrorClass::Fatal => 2,
        }
    }
}
