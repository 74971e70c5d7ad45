//! Loader configuration.
//!
//! Defaults point at the public provider endpoints. Each value can be
//! overridden from the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `FXHIST_OANDA_BASE_URL` | [`LoaderConfig::oanda_base_url`] |
//! | `FXHIST_DUKASCOPY_BASE_URL` | [`LoaderConfig::dukascopy_base_url`] |
//! | `FXHIST_TIMEOUT_MS` | [`LoaderConfig::timeout_ms`] |

use std::env;

use tracing::warn;

pub const OANDA_BASE_URL: &str = "http://www.oanda.com/convert/fxhistory";
pub const DUKASCOPY_BASE_URL: &str = "http://www.dukascopy.com/freeApplets/exp/exp.php";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub oanda_base_url: String,
    pub dukascopy_base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            oanda_base_url: String::from(OANDA_BASE_URL),
            dukascopy_base_url: String::from(DUKASCOPY_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: String::from(concat!("fxhist/", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl LoaderConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("FXHIST_OANDA_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.oanda_base_url = url.trim().to_owned();
        }
        if let Some(url) = lookup("FXHIST_DUKASCOPY_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.dukascopy_base_url = url.trim().to_owned();
        }
        if let Some(raw) = lookup("FXHIST_TIMEOUT_MS") {
            match raw.trim().parse::<u64>() {
                Ok(timeout_ms) if timeout_ms > 0 => config.timeout_ms = timeout_ms,
                _ => warn!(value = %raw, "ignoring invalid FXHIST_TIMEOUT_MS"),
            }
        }

        config
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}
