//! Breach lookup using k-anonymity range queries
//!
//! The password's SHA-1 digest is split into a five character prefix and
//! the remaining suffix. Only the prefix is sent to the breach index, which
//! answers with every known suffix sharing it; the match happens locally.

mod fingerprint;
mod transport;

pub use fingerprint::{PREFIX_LEN, PasswordFingerprint};
pub use transport::{HttpResponse, HttpTransport, RangeRequest, ReqwestTransport, TransportError};

use secrecy::SecretString;
use std::fmt;
use thiserror::Error;

use crate::config::BreachConfig;

/// Why a breach lookup could not produce an answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BreachError {
    #[error("breach service timed out")]
    Timeout,
    #[error("could not reach breach service: {0}")]
    Transport(String),
    #[error("breach service answered with status {0}")]
    UnexpectedStatus(u16),
    #[error("malformed breach service response: {0}")]
    MalformedResponse(String),
}

impl From<TransportError> for BreachError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout => BreachError::Timeout,
            TransportError::Request(msg) => BreachError::Transport(msg),
        }
    }
}

/// Outcome of a breach lookup.
///
/// `Unknown` means the lookup failed and says nothing about the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreachResult {
    NotFound,
    Found(u64),
    Unknown(BreachError),
}

impl BreachResult {
    pub fn is_breached(&self) -> bool {
        matches!(self, BreachResult::Found(_))
    }
}

impl fmt::Display for BreachResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreachResult::NotFound => f.write_str("not found in known breaches"),
            BreachResult::Found(count) => write!(f, "seen {} times in known breaches", count),
            BreachResult::Unknown(reason) => write!(f, "could not verify: {}", reason),
        }
    }
}

/// Scans a range response body for `suffix`.
///
/// Lines are `SUFFIX:COUNT`. Lines that do not parse are skipped unless
/// they carry the suffix being searched for. A zero count is a padding
/// entry and reads as not found.
pub fn match_suffix(body: &str, suffix: &str) -> Result<Option<u64>, BreachError> {
    for line in body.lines() {
        let line = line.trim();
        let Some((candidate, count)) = line.split_once(':') else {
            continue;
        };
        if !candidate.trim().eq_ignore_ascii_case(suffix) {
            continue;
        }

        let count: u64 = count.trim().parse().map_err(|_| {
            BreachError::MalformedResponse(format!("invalid count '{}'", count.trim()))
        })?;
        return Ok(if count == 0 { None } else { Some(count) });
    }
    Ok(None)
}

/// Checks passwords against a range-based breach index.
pub struct BreachChecker<T: HttpTransport = ReqwestTransport> {
    transport: T,
    config: BreachConfig,
}

impl BreachChecker<ReqwestTransport> {
    /// Builds a checker using the default reqwest transport.
    pub fn new(config: BreachConfig) -> Result<Self, BreachError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self { transport, config })
    }
}

impl<T: HttpTransport> BreachChecker<T> {
    pub fn with_transport(config: BreachConfig, transport: T) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &BreachConfig {
        &self.config
    }

    /// Builds the range request for a fingerprint. Carries only the prefix.
    pub fn range_request(&self, fingerprint: &PasswordFingerprint) -> RangeRequest {
        RangeRequest {
            url: format!(
                "{}/range/{}",
                self.config.base_url.trim_end_matches('/'),
                fingerprint.prefix()
            ),
            add_padding: self.config.add_padding,
        }
    }

    /// Looks the password up. Performs exactly one request and never
    /// retries; any failure is reported as [`BreachResult::Unknown`].
    pub fn check(&self, password: &SecretString) -> BreachResult {
        let fingerprint = PasswordFingerprint::new(password);
        let request = self.range_request(&fingerprint);

        #[cfg(feature = "tracing")]
        tracing::debug!("querying breach range {}", fingerprint.prefix());

        let response = match self.transport.get(&request) {
            Ok(response) => response,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("breach lookup failed: {}", e);
                return BreachResult::Unknown(e.into());
            }
        };

        if response.status != 200 {
            #[cfg(feature = "tracing")]
            tracing::warn!("breach service returned status {}", response.status);
            return BreachResult::Unknown(BreachError::UnexpectedStatus(response.status));
        }

        match match_suffix(&response.body, fingerprint.suffix()) {
            Ok(Some(count)) => BreachResult::Found(count),
            Ok(None) => BreachResult::NotFound,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("{}", e);
                BreachResult::Unknown(e)
            }
        }
    }
}

/// Checks a password against the public breach index with default settings.
pub fn check_breach(password: &SecretString) -> BreachResult {
    check_breach_with(&BreachConfig::default(), password)
}

/// Checks a password with the reqwest transport and the given settings.
/// A client that cannot be built is reported as [`BreachResult::Unknown`].
pub fn check_breach_with(config: &BreachConfig, password: &SecretString) -> BreachResult {
    match BreachChecker::new(config.clone()) {
        Ok(checker) => checker.check(password),
        Err(e) => BreachResult::Unknown(e),
    }
}
