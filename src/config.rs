//! Configuration
//!
//! [`BreachConfig`] is plain data handed to the breach checker. [`AppConfig`]
//! is what the binary assembles at startup; it is the only place that reads
//! the environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::denylist::{Denylist, DenylistError};

/// Environment variable naming an extra denylist file.
pub const DENYLIST_PATH_ENV: &str = "PASSCHECK_DENYLIST_PATH";

pub const DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for the breach index client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachConfig {
    /// Service root; requests go to `{base_url}/range/{prefix}`.
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Ask the service to pad responses with zero-count entries.
    pub add_padding: bool,
}

impl Default for BreachConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("passcheck/{}", env!("CARGO_PKG_VERSION")),
            add_padding: false,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Optional file whose entries extend the built-in denylist.
    pub denylist_path: Option<PathBuf>,
    pub breach: BreachConfig,
}

impl AppConfig {
    /// Reads configuration from the environment.
    ///
    /// Priority for the denylist file:
    /// 1. Environment variable `PASSCHECK_DENYLIST_PATH`
    /// 2. None (built-in list only)
    pub fn from_env() -> Self {
        let denylist_path = std::env::var(DENYLIST_PATH_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Self {
            denylist_path,
            breach: BreachConfig::default(),
        }
    }

    /// The built-in denylist, extended with the configured file if any.
    pub fn load_denylist(&self) -> Result<Denylist, DenylistError> {
        let mut denylist = Denylist::default();
        if let Some(path) = &self.denylist_path {
            denylist.extend(Denylist::from_path(path)?);
        }
        Ok(denylist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: only called from #[serial] tests
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: only called from #[serial] tests
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    fn test_breach_config_defaults() {
        let config = BreachConfig::default();
        assert_eq!(config.base_url, "https://api.pwnedpasswords.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("passcheck/"));
        assert!(!config.add_padding);
    }

    #[test]
    #[serial]
    fn test_from_env_default() {
        remove_env(DENYLIST_PATH_ENV);

        let config = AppConfig::from_env();
        assert_eq!(config.denylist_path, None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_with_path() {
        set_env(DENYLIST_PATH_ENV, "/custom/path/denylist.txt");

        let config = AppConfig::from_env();
        assert_eq!(config.denylist_path, Some(PathBuf::from("/custom/path/denylist.txt")));

        remove_env(DENYLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_blank_path_ignored() {
        set_env(DENYLIST_PATH_ENV, "   ");

        let config = AppConfig::from_env();
        assert_eq!(config.denylist_path, None);

        remove_env(DENYLIST_PATH_ENV);
    }

    #[test]
    fn test_load_denylist_builtin_only() {
        let denylist = AppConfig::default().load_denylist().expect("builtin list");
        assert_eq!(denylist, Denylist::default());
    }

    #[test]
    fn test_load_denylist_extends_builtin() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "letmein").expect("Failed to write");
        writeln!(temp_file, "dragon").expect("Failed to write");

        let config = AppConfig {
            denylist_path: Some(temp_file.path().to_path_buf()),
            ..AppConfig::default()
        };
        let denylist = config.load_denylist().expect("Should load");
        assert_eq!(denylist.len(), 6);
        assert!(denylist.contains("admin"));
        assert!(denylist.contains("Dragon"));
    }

    #[test]
    fn test_load_denylist_missing_file() {
        let config = AppConfig {
            denylist_path: Some(PathBuf::from("/nonexistent/denylist.txt")),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.load_denylist(),
            Err(DenylistError::FileNotFound(_))
        ));
    }
}
