//! SHA-1 fingerprint split for range queries.

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};

/// Number of hex characters sent to the range endpoint.
pub const PREFIX_LEN: usize = 5;

/// Uppercase hex SHA-1 digest of a password.
///
/// Only [`prefix`](Self::prefix) may leave the process.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordFingerprint {
    hex: String,
}

impl PasswordFingerprint {
    pub fn new(password: &SecretString) -> Self {
        let digest = Sha1::digest(password.expose_secret().as_bytes());
        Self {
            hex: hex::encode_upper(digest),
        }
    }

    /// First five hex characters.
    pub fn prefix(&self) -> &str {
        &self.hex[..PREFIX_LEN]
    }

    /// Remaining 35 hex characters.
    pub fn suffix(&self) -> &str {
        &self.hex[PREFIX_LEN..]
    }
}

// The digest is as sensitive as the password for common passwords.
impl std::fmt::Debug for PasswordFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordFingerprint")
            .field("prefix", &self.prefix())
            .finish_non_exhaustive()
    }
}
