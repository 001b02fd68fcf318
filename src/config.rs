// src/config.rs
use std::env;
use std::str::FromStr;

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
/// Roughly 750 words of reply.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_RELAY_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub bind_addr: String,
    pub public_dir: String,
    pub relay_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            public_dir: DEFAULT_PUBLIC_DIR.to_string(),
            relay_url: DEFAULT_RELAY_URL.to_string(),
        }
    }
}

impl Config {
    /// Reads the process environment. Binaries load `.env` before calling this
    /// so that `RUST_LOG` from the file also reaches the subscriber.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        Self {
            api_key: lookup("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty()),
            model: text("ANTHROPIC_MODEL", defaults.model),
            base_url: text("ANTHROPIC_BASE_URL", defaults.base_url),
            max_tokens: parse_or("ANTHROPIC_MAX_TOKENS", lookup("ANTHROPIC_MAX_TOKENS"), defaults.max_tokens),
            bind_addr: text("BIND_ADDR", defaults.bind_addr),
            public_dir: text("PUBLIC_DIR", defaults.public_dir),
            relay_url: text("RELAY_URL", defaults.relay_url),
        }
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(%key, %value, %default, "unparseable value, using default");
            default
        }),
    }
}
