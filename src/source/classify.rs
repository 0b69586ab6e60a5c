use crate::error::MemeError;
use crate::registry::AssetRegistry;

use super::home::HomeDir;
use super::SourceKind;

/// Prefix that marks a reference as a URL. Validation happens at fetch time.
pub const URL_PREFIX: &str = "http";

/// Reference that selects standard input.
pub const STDIN_SENTINEL: &str = "-";

/// Decides where `reference` points.
///
/// Rules are tried in order and the first match wins: URL prefix, stdin
/// sentinel, registered asset id, existing path after `~` expansion. Only the
/// last rule touches the filesystem, and only to check existence.
///
/// # Errors
/// Returns [`MemeError::UnrecognizedReference`] when no rule matches.
pub fn classify(
    reference: &str,
    registry: &AssetRegistry,
    home: &HomeDir,
) -> Result<SourceKind, MemeError> {
    if reference.starts_with(URL_PREFIX) {
        return Ok(SourceKind::Url(reference.to_string()));
    }

    if reference == STDIN_SENTINEL {
        return Ok(SourceKind::Stdin);
    }

    if registry.contains(reference) {
        return Ok(SourceKind::Asset(reference.to_string()));
    }

    match home.expand(reference) {
        Ok(path) if path.exists() => return Ok(SourceKind::LocalFile(path)),
        Ok(_) => {}
        Err(err) => log::debug!("not treating '{}' as a path: {}", reference, err),
    }

    Err(MemeError::UnrecognizedReference {
        reference: reference.to_string(),
    })
}
