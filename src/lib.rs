//! Password strength estimation and breach lookup
//!
//! This library scores password strength, suggests improvements, and checks
//! whether a password appears in public breach corpora without ever sending
//! the password (or its full hash) over the network.
//!
//! # Features
//!
//! - `zxcvbn` (default): pattern-based strength analysis; rule-based scoring
//!   is used when disabled
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): the `passcheck` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use passcheck::{BreachChecker, BreachConfig, Denylist, default_analyzer, evaluate, suggest_improvements};
//! use secrecy::SecretString;
//!
//! // Pick the analyzer once at startup
//! let analyzer = default_analyzer();
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let analysis = evaluate(&password, analyzer.as_ref());
//! println!("Score: {} ({})", analysis.score, analysis.strength());
//!
//! for tip in suggest_improvements(&password, &Denylist::default()) {
//!     println!("- {}", tip);
//! }
//!
//! let checker = BreachChecker::new(BreachConfig::default()).expect("HTTP client");
//! println!("Breach: {}", checker.check(&password));
//! ```

// Internal modules
mod advisor;
mod analysis;
mod analyzers;
mod breach;
mod config;
mod denylist;
mod evaluator;
mod sections;

// Public API
pub use advisor::{PASSPHRASE_TIP, WELL_BALANCED, suggest_improvements};
pub use analysis::{MAX_SCORE, PasswordAnalysis, Score, StrengthLevel};
pub use analyzers::{RuleBasedAnalyzer, StrengthAnalyzer, default_analyzer};
pub use breach::{
    BreachChecker, BreachError, BreachResult, HttpResponse, HttpTransport, PREFIX_LEN,
    PasswordFingerprint, RangeRequest, ReqwestTransport, TransportError, check_breach,
    check_breach_with, match_suffix,
};
pub use config::{AppConfig, BreachConfig, DENYLIST_PATH_ENV};
pub use denylist::{BUILTIN_COMMON_PASSWORDS, Denylist, DenylistError};
pub use evaluator::{EMPTY_PASSWORD, evaluate};

#[cfg(feature = "zxcvbn")]
pub use analyzers::{ZxcvbnAnalyzer, scale_severity};
