//! Server configuration read from `ALGOVIZ_*` environment variables.
//!
//! | Variable                | Default   |
//! |-------------------------|-----------|
//! | `ALGOVIZ_HOST`          | `0.0.0.0` |
//! | `ALGOVIZ_PORT`          | `8000`    |
//! | `ALGOVIZ_MAX_SORT_LEN`  | `50`      |
//! | `ALGOVIZ_MAX_SEARCH_LEN`| `100`     |

use algoviz_core::Limits;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var}: expected {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub limits: Limits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8000,
            limits: Limits::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from any variable source; unset variables keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(host) = lookup("ALGOVIZ_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("ALGOVIZ_PORT") {
            config.port = parse("ALGOVIZ_PORT", port, "a port number")?;
        }
        if let Some(len) = lookup("ALGOVIZ_MAX_SORT_LEN") {
            config.limits.max_sort_len = parse("ALGOVIZ_MAX_SORT_LEN", len, "a positive integer")?;
        }
        if let Some(len) = lookup("ALGOVIZ_MAX_SEARCH_LEN") {
            config.limits.max_search_len =
                parse("ALGOVIZ_MAX_SEARCH_LEN", len, "a positive integer")?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(
    var: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let parsed = value.trim().parse::<T>().ok();
    parsed.ok_or(ConfigError::Invalid {
        var,
        value,
        expected,
    })
}
