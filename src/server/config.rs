use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
static DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Server configuration read from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// HS256 secret shared with the identity service that issues tokens
    pub jwt_secret: String,
    pub bind_address: SocketAddr,
    pub cors_origin: HeaderValue,
}

impl Config {
    /// Reads `DATABASE_URL`, `JWT_SECRET`, `BIND_ADDRESS` and `CORS_ORIGIN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let cors_origin = HeaderValue::from_str(
            &lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
        )
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: "CORS_ORIGIN".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            bind_address,
            cors_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    /// Expect defaults for the optional variables
    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/constituency"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address.port(), 5000);
        assert_eq!(config.cors_origin, "http://localhost:3000");
    }

    /// Expect MissingEnvVar when the JWT secret is absent or blank
    #[test]
    fn requires_jwt_secret() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/constituency"),
            ("JWT_SECRET", "  "),
        ]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingEnvVar("JWT_SECRET".to_string())
        );
    }

    /// Expect InvalidEnvValue for an unparsable bind address
    #[test]
    fn rejects_invalid_bind_address() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/constituency"),
            ("JWT_SECRET", "secret"),
            ("BIND_ADDRESS", "localhost"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == "BIND_ADDRESS"
        ));
    }
}
