use anyhow::Context;
use axum::http::HeaderValue;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://jobboard.sqlite";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    /// The single frontend origin allowed to make credentialed requests.
    pub cors_origin: HeaderValue,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse::<u32>()
                .with_context(|| format!("DB_MAX_CONNECTIONS must be a positive integer, got {v:?}"))?,
            None => 5,
        };
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match lookup("APP_PORT") {
            Some(v) => v
                .parse::<u16>()
                .with_context(|| format!("APP_PORT must be a port number, got {v:?}"))?,
            None => 8080,
        };
        let origin = lookup("CORS_ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.into());
        let cors_origin = HeaderValue::from_str(&origin)
            .with_context(|| format!("CORS_ALLOWED_ORIGIN is not a valid header value: {origin:?}"))?;

        Ok(Self {
            database_url,
            max_connections,
            host,
            port,
            cors_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).expect("defaults are valid");
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.max_connections, 5);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.cors_origin, DEFAULT_CORS_ORIGIN);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://other.sqlite"),
            ("DB_MAX_CONNECTIONS", "2"),
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "9000"),
            ("CORS_ALLOWED_ORIGIN", "https://jobs.example.com"),
        ]))
        .expect("valid config");
        assert_eq!(cfg.database_url, "sqlite://other.sqlite");
        assert_eq!(cfg.max_connections, 2);
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.cors_origin, "https://jobs.example.com");
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = AppConfig::from_lookup(lookup_from(&[("APP_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("APP_PORT"));
    }

    #[test]
    fn rejects_bad_origin() {
        let err =
            AppConfig::from_lookup(lookup_from(&[("CORS_ALLOWED_ORIGIN", "bad\norigin")])).unwrap_err();
        assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
    }
}
