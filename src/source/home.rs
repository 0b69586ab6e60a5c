//! Home-directory expansion for `~` and `~user` paths.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HomeError {
    #[error("cannot expand '~': home directory is unknown")]
    NoHome,

    #[error("cannot expand '~{0}': no such user")]
    UnknownUser(String),
}

/// Expands a leading `~` the way a shell would.
///
/// `~` uses the current user's home directory. `~name` looks `name` up in the
/// password database, which only exists on Unix.
#[derive(Clone, Debug)]
pub struct HomeDir {
    home: Option<PathBuf>,
    passwd: Option<PathBuf>,
}

impl HomeDir {
    /// Uses the process environment and the system password database.
    pub fn from_env() -> Self {
        Self {
            home: dirs::home_dir(),
            passwd: cfg!(unix).then(|| PathBuf::from("/etc/passwd")),
        }
    }

    /// Uses `home` for `~` and no password database.
    pub fn fixed(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
            passwd: None,
        }
    }

    /// Reads `~name` entries from a passwd-format file at `path`.
    pub fn with_passwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.passwd = Some(path.into());
        self
    }

    /// Expands `raw`; paths not starting with `~` come back unchanged.
    pub fn expand(&self, raw: &str) -> Result<PathBuf, HomeError> {
        let Some(rest) = raw.strip_prefix('~') else {
            return Ok(PathBuf::from(raw));
        };

        let (user, tail) = match rest.find(is_separator) {
            Some(idx) => (&rest[..idx], rest[idx..].trim_start_matches(is_separator)),
            None => (rest, ""),
        };

        let base = if user.is_empty() {
            self.home.clone().ok_or(HomeError::NoHome)?
        } else {
            self.user_home(user)
                .ok_or_else(|| HomeError::UnknownUser(user.to_string()))?
        };

        if tail.is_empty() {
            Ok(base)
        } else {
            Ok(base.join(tail))
        }
    }

    fn user_home(&self, user: &str) -> Option<PathBuf> {
        let contents = fs::read_to_string(self.passwd.as_deref()?).ok()?;
        lookup_passwd(&contents, user)
    }
}

impl Default for HomeDir {
    fn default() -> Self {
        Self::from_env()
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || std::path::is_separator(c)
}

/// Finds the home directory field of `user` in passwd-format text.
fn lookup_passwd(contents: &str, user: &str) -> Option<PathBuf> {
    contents
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(|line| line.split(':').collect::<Vec<_>>())
        .find(|fields| fields.len() >= 6 && fields[0] == user)
        .map(|fields| fields[5])
        .filter(|home| !home.is_empty())
        .map(|home| Path::new(home).to_path_buf())
}
