use std::{fmt, net::SocketAddr, path::PathBuf};

use thiserror::Error;
use url::Url;

pub const TOKEN_VAR: &str = "TELOXIDE_TOKEN";
pub const FALLBACK_TOKEN_VAR: &str = "BOT_TOKEN";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const CONTENT_PATH_VAR: &str = "CONTENT_PATH";
pub const WEBHOOK_URL_VAR: &str = "WEBHOOK_URL";
pub const WEBHOOK_ADDR_VAR: &str = "WEBHOOK_ADDR";

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TELOXIDE_TOKEN (or BOT_TOKEN) should be set")]
    MissingToken,
    #[error("WEBHOOK_URL can't be parsed: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("WEBHOOK_ADDR can't be parsed: {0}")]
    InvalidAddr(#[from] std::net::AddrParseError),
    #[error("{present} is set, but {missing} is not")]
    PartialWebhook {
        present: &'static str,
        missing: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Webhook {
    pub url: Url,
    pub addr: SocketAddr,
}

#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub log_level: String,
    pub content_path: Option<PathBuf>,
    pub webhook: Option<Webhook>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("log_level", &self.log_level)
            .field("content_path", &self.content_path)
            .field("webhook", &self.webhook)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let token = get(TOKEN_VAR)
            .or_else(|| get(FALLBACK_TOKEN_VAR))
            .ok_or(ConfigError::MissingToken)?;

        let webhook = match (get(WEBHOOK_URL_VAR), get(WEBHOOK_ADDR_VAR)) {
            (Some(url), Some(addr)) => Some(Webhook {
                url: url.parse()?,
                addr: addr.parse()?,
            }),
            (Some(_), None) => {
                return Err(ConfigError::PartialWebhook {
                    present: WEBHOOK_URL_VAR,
                    missing: WEBHOOK_ADDR_VAR,
                })
            }
            (None, Some(_)) => {
                return Err(ConfigError::PartialWebhook {
                    present: WEBHOOK_ADDR_VAR,
                    missing: WEBHOOK_URL_VAR,
                })
            }
            (None, None) => None,
        };

        Ok(Self {
            token,
            log_level: get(LOG_LEVEL_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned()),
            content_path: get(CONTENT_PATH_VAR).map(PathBuf::from),
            webhook,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn token_is_required() {
        assert!(matches!(config(&[]), Err(ConfigError::MissingToken)));
        assert!(matches!(
            config(&[(TOKEN_VAR, "  ")]),
            Err(ConfigError::MissingToken)
        ));
    }

    #[test]
    fn falls_back_to_bot_token() {
        let config = config(&[(FALLBACK_TOKEN_VAR, "123:abc")]).unwrap();
        assert_eq!(config.token, "123:abc");
        assert_eq!(config.log_level, "info");
        assert!(config.webhook.is_none());
        assert!(config.content_path.is_none());
    }

    #[test]
    fn teloxide_token_wins() {
        let config = config(&[(TOKEN_VAR, "primary"), (FALLBACK_TOKEN_VAR, "fallback")])
            .unwrap();
        assert_eq!(config.token, "primary");
    }

    #[test]
    fn reads_webhook_and_content() {
        let config = config(&[
            (TOKEN_VAR, "t"),
            (WEBHOOK_URL_VAR, "https://example.org/bot"),
            (WEBHOOK_ADDR_VAR, "127.0.0.1:8443"),
            (CONTENT_PATH_VAR, "course.json"),
            (LOG_LEVEL_VAR, "debug"),
        ])
        .unwrap();

        let webhook = config.webhook.unwrap();
        assert_eq!(webhook.url.as_str(), "https://example.org/bot");
        assert_eq!(webhook.addr.port(), 8443);
        assert_eq!(config.content_path, Some(PathBuf::from("course.json")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn half_a_webhook_is_an_error() {
        assert!(matches!(
            config(&[(TOKEN_VAR, "t"), (WEBHOOK_URL_VAR, "https://example.org")]),
            Err(ConfigError::PartialWebhook {
                missing: WEBHOOK_ADDR_VAR,
                ..
            })
        ));
        assert!(matches!(
            config(&[
                (TOKEN_VAR, "t"),
                (WEBHOOK_URL_VAR, "https://example.org"),
                (WEBHOOK_ADDR_VAR, "nope"),
            ]),
            Err(ConfigError::InvalidAddr(_))
        ));
    }

    #[test]
    fn debug_hides_token() {
        let config = config(&[(TOKEN_VAR, "secret")]).unwrap();
        assert!(!format!("{config:?}").contains("secret"));
    }
}
