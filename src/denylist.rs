//! Denylist of common passwords
//!
//! Handles building, loading and querying the list of passwords that are
//! too common to be used.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Entries every denylist starts from.
pub const BUILTIN_COMMON_PASSWORDS: &[&str] = &["password", "admin", "123456", "qwerty"];

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// A case-insensitive set of common passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    entries: HashSet<String>,
}

impl Default for Denylist {
    fn default() -> Self {
        Self::new(BUILTIN_COMMON_PASSWORDS.iter().copied())
    }
}

fn normalize(entry: &str) -> Option<String> {
    let entry = entry.trim();
    if entry.is_empty() {
        None
    } else {
        Some(entry.to_lowercase())
    }
}

impl Denylist {
    /// Builds a denylist from explicit entries.
    ///
    /// Entries are trimmed and lowercased; blank entries are dropped.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .filter_map(|e| normalize(e.as_ref()))
                .collect(),
        }
    }

    /// An empty denylist.
    pub fn empty() -> Self {
        Self {
            entries: HashSet::new(),
        }
    }

    /// Loads a denylist from a file with one password per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: FileNotFound {}", path.display());
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let denylist = Self::new(content.lines());

        if denylist.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: Empty file {}", path.display());
            return Err(DenylistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Denylist loaded: {} passwords from {:?}", denylist.len(), path);

        Ok(denylist)
    }

    /// Adds every entry of `other` to this list.
    pub fn extend(&mut self, other: Denylist) {
        self.entries.extend(other.entries);
    }

    /// Returns `true` if the password is in the list (case-insensitive,
    /// exact match).
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
