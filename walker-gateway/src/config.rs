//! Gateway runtime configuration.

/// Environment variable holding the socket address to bind.
pub const LISTEN_ADDR_VAR: &str = "GRID_WALKER_LISTEN_ADDR";

/// Environment variable holding the request body size limit in bytes.
pub const MAX_BODY_BYTES_VAR: &str = "GRID_WALKER_MAX_BODY_BYTES";

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Errors raised while loading [`GatewayConfig`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value '{value}' for {var}")]
    InvalidValue { var: &'static str, value: String },
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Address passed to `TcpListener::bind`, e.g. `"0.0.0.0:8080"`.
    pub listen_addr: String,

    /// Largest accepted request body; larger bodies are rejected before parsing.
    pub max_body_bytes: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_owned(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl GatewayConfig {
    /// Load the config from the process environment, falling back to defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load the config through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but unparsable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup(LISTEN_ADDR_VAR).filter(|a| !a.trim().is_empty()) {
            config.listen_addr = addr.trim().to_owned();
        }

        if let Some(raw) = lookup(MAX_BODY_BYTES_VAR) {
            config.max_body_bytes = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: MAX_BODY_BYTES_VAR,
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|&(k, v)| (k, v.to_owned())).collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn config_defaults_when_unset() {
        let config = match GatewayConfig::from_lookup(lookup_from(&[])) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.max_body_bytes, 2 * 1024 * 1024);
    }

    #[test]
    fn config_reads_both_variables() {
        let lookup = lookup_from(&[
            (LISTEN_ADDR_VAR, "0.0.0.0:9000"),
            (MAX_BODY_BYTES_VAR, "4096"),
        ]);
        let config = match GatewayConfig::from_lookup(lookup) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.max_body_bytes, 4096);
    }

    #[test]
    fn config_blank_addr_keeps_default() {
        let config = match GatewayConfig::from_lookup(lookup_from(&[(LISTEN_ADDR_VAR, "  ")])) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
    }

    #[test]
    fn config_rejects_unparsable_body_limit() {
        let result = GatewayConfig::from_lookup(lookup_from(&[(MAX_BODY_BYTES_VAR, "lots")]));
        match result {
            Err(ConfigError::InvalidValue { var, value }) => {
                assert_eq!(var, MAX_BODY_BYTES_VAR);
                assert_eq!(value, "lots");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }
}
