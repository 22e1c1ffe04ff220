use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

/// Token and sampling settings per capability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CompletionLimits {
    pub summary_max_tokens: u64,
    pub chat_max_tokens: u64,
    pub explain_max_tokens: u64,
    pub summary_temperature: f64,
}

impl Default for CompletionLimits {
    fn default() -> Self {
        Self {
            summary_max_tokens: 4096,
            chat_max_tokens: 2048,
            explain_max_tokens: 1024,
            summary_temperature: 1.0,
        }
    }
}

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct ServiceConfig {
    pub api_key: String,
    pub model: String,
    pub host: String,
    pub port: u16,
    pub completion: CompletionLimits,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "anthropic/claude-sonnet-4.5".to_string(),
            host: "0.0.0.0".to_string(),
            port: 5000,
            completion: CompletionLimits::default(),
        }
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("completion", &self.completion)
            .finish()
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source; unset variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing(API_KEY_VAR))?;

        Ok(Self {
            api_key,
            model: lookup("LLM_MODEL").unwrap_or(defaults.model),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            completion: CompletionLimits {
                summary_max_tokens: parse_var(
                    &lookup,
                    "SUMMARY_MAX_TOKENS",
                    defaults.completion.summary_max_tokens,
                )?,
                chat_max_tokens: parse_var(
                    &lookup,
                    "CHAT_MAX_TOKENS",
                    defaults.completion.chat_max_tokens,
                )?,
                explain_max_tokens: parse_var(
                    &lookup,
                    "EXPLAIN_MAX_TOKENS",
                    defaults.completion.explain_max_tokens,
                )?,
                summary_temperature: parse_var(
                    &lookup,
                    "SUMMARY_TEMPERATURE",
                    defaults.completion.summary_temperature,
                )?,
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_apply_when_only_key_is_set() {
        let config = ServiceConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "sk-test")])).unwrap();

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.completion, CompletionLimits::default());
    }

    #[test]
    fn test_missing_or_blank_key_fails() {
        assert_eq!(
            ServiceConfig::from_lookup(lookup_from(&[])).unwrap_err(),
            ConfigError::Missing(API_KEY_VAR)
        );
        assert!(ServiceConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "  ")])).is_err());
    }

    #[test]
    fn test_overrides_and_invalid_numbers() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "sk-test"),
            ("PORT", "8080"),
            ("LLM_MODEL", "openai/gpt-4o-mini"),
            ("CHAT_MAX_TOKENS", "512"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.model, "openai/gpt-4o-mini");
        assert_eq!(config.completion.chat_max_tokens, 512);

        let err = ServiceConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "sk-test"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ServiceConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "sk-secret")])).unwrap();
        assert!(!format!("{:?}", config).contains("sk-secret"));
    }
}
