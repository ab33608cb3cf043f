//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and passed by value
//! into [`crate::server::run`]. It is never mutated afterwards.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Trust `X-Forwarded-For` for rate limiting (default: `false`)
//! - `SHORTENER_DOMAINS` - Comma-separated shortener hosts (default: built-in list)
//! - `MAX_REDIRECT_HOPS` - Redirects followed per resolution (default: 5, range 1..=20)
//! - `PREVIEW_TIMEOUT_SECS` - Budget for resolution and for the fetch (default: 15, range 1..=120)
//! - `USER_AGENT` - User-Agent for outbound preview requests (default: desktop Chrome)
//! - `BREVO_API_KEY` - Mailing list API key; subscriptions fail with 500 when unset
//! - `BREVO_API_URL` - Contact endpoint (default: `https://api.brevo.com/v3/contacts`)
//! - `BREVO_LIST_ID` - List contacts are added to (default: 2)
//! - `THREADS_API_URL` - Upstream thread API (default: `https://twitter-api.opensourceprojects.dev`)
//!
//! ```bash
//! export BREVO_API_KEY="xkeysib-..."
//! export SHORTENER_DOMAINS="t.co,bit.ly,lnkd.in"
//! ```

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::application::services::preview_service::DEFAULT_PREVIEW_TIMEOUT;
use crate::application::services::redirect_resolver::DEFAULT_MAX_HOPS;
use crate::application::services::subscription_service::DEFAULT_LIST_ID;
use crate::domain::entities::ShortenerDomains;
use crate::infrastructure::http::DEFAULT_USER_AGENT;
use crate::infrastructure::http::brevo_client::DEFAULT_BREVO_API_URL;
use crate::infrastructure::http::thread_source::DEFAULT_THREADS_API_URL;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub shortener_domains: ShortenerDomains,
    pub max_redirect_hops: usize,
    /// Applied separately to shortener resolution and to the metadata fetch.
    pub preview_timeout: Duration,
    pub user_agent: String,
    /// `None` disables subscriptions.
    pub brevo_api_key: Option<String>,
    pub brevo_api_url: String,
    pub brevo_list_id: i64,
    pub threads_api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
            shortener_domains: ShortenerDomains::default(),
            max_redirect_hops: DEFAULT_MAX_HOPS,
            preview_timeout: DEFAULT_PREVIEW_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            brevo_api_key: None,
            brevo_api_url: DEFAULT_BREVO_API_URL.to_string(),
            brevo_list_id: DEFAULT_LIST_ID,
            threads_api_url: DEFAULT_THREADS_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let shortener_domains = env::var("SHORTENER_DOMAINS")
            .map(|v| ShortenerDomains::from_csv(&v))
            .unwrap_or(defaults.shortener_domains);

        let max_redirect_hops =
            parse_var("MAX_REDIRECT_HOPS")?.unwrap_or(defaults.max_redirect_hops);

        let preview_timeout = parse_var::<u64>("PREVIEW_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.preview_timeout);

        let user_agent = env::var("USER_AGENT").unwrap_or(defaults.user_agent);

        let brevo_api_key = env::var("BREVO_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let brevo_api_url = env::var("BREVO_API_URL").unwrap_or(defaults.brevo_api_url);
        let brevo_list_id = parse_var("BREVO_LIST_ID")?.unwrap_or(defaults.brevo_list_id);
        let threads_api_url = env::var("THREADS_API_URL").unwrap_or(defaults.threads_api_url);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            shortener_domains,
            max_redirect_hops,
            preview_timeout,
            user_agent,
            brevo_api_key,
            brevo_api_url,
            brevo_list_id,
            threads_api_url,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `max_redirect_hops` is outside 1..=20
    /// - `preview_timeout` is outside 1..=120 seconds
    /// - an upstream URL is not HTTP(S)
    /// - the shortener list is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !(1..=20).contains(&self.max_redirect_hops) {
            anyhow::bail!(
                "MAX_REDIRECT_HOPS must be between 1 and 20, got {}",
                self.max_redirect_hops
            );
        }

        let timeout_secs = self.preview_timeout.as_secs();
        if !(1..=120).contains(&timeout_secs) {
            anyhow::bail!(
                "PREVIEW_TIMEOUT_SECS must be between 1 and 120, got {}",
                timeout_secs
            );
        }

        for (name, value) in [
            ("BREVO_API_URL", &self.brevo_api_url),
            ("THREADS_API_URL", &self.threads_api_url),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                anyhow::bail!(
                    "{} must start with 'http://' or 'https://', got '{}'",
                    name,
                    value
                );
            }
        }

        if self.shortener_domains.is_empty() {
            anyhow::bail!("SHORTENER_DOMAINS must list at least one host");
        }

        Ok(())
    }

    /// Returns whether newsletter subscriptions are enabled.
    pub fn is_subscription_enabled(&self) -> bool {
        self.brevo_api_key.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!(
            "  Shorteners: {}",
            self.shortener_domains.domains().join(", ")
        );
        tracing::info!("  Max redirect hops: {}", self.max_redirect_hops);
        tracing::info!("  Preview timeout: {}s", self.preview_timeout.as_secs());

        match self.brevo_api_key.as_deref() {
            Some(key) if self.is_subscription_enabled() => tracing::info!(
                "  Brevo: {} (key {}, list {})",
                self.brevo_api_url,
                mask_secret(key),
                self.brevo_list_id
            ),
            _ => tracing::info!("  Brevo: disabled"),
        }

        tracing::info!("  Threads API: {}", self.threads_api_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses an optional numeric variable. Unset means `None`; set but
/// malformed is an error.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} must be a number, got '{}'", name, value)),
        Err(_) => Ok(None),
    }
}

/// Masks an API key for logging, keeping only the last four characters.
///
/// - `xkeysib-abcdef1234` → `***1234`
/// - keys of eight characters or fewer → `***`
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{}", tail)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
