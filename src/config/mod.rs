use std::env;
use std::fmt;

const DB_USER: &str = "DB_USER";
const DB_PASSWORD: &str = "DB_PASSWORD";
const DB_HOST: &str = "DB_HOST";
const DB_PORT: &str = "DB_PORT";
const DB_NAME: &str = "DB_NAME";
const RATE_LIMIT: &str = "RATE_LIMIT";
const APP_HOST: &str = "APP_HOST";
const APP_PORT: &str = "APP_PORT";

#[derive(Debug)]
pub enum ConfigError {
    Missing(Vec<&'static str>),
    NotANumber(&'static str, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(keys) => {
                write!(f, "missing environment variables: {}", keys.join(", "))
            }
            ConfigError::NotANumber(key, value) => {
                write!(f, "{} parameter is not a number: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    /// Requests per second. Read and reported, not enforced.
    pub rate_limit: Option<u32>,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Every missing required
    /// key is reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let missing: Vec<&'static str> = [DB_USER, DB_PASSWORD, DB_PORT, DB_HOST, DB_NAME]
            .into_iter()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let port = parse_number(DB_PORT, get(DB_PORT))?.unwrap_or_default();
        let database = DatabaseConfig {
            user: get(DB_USER).unwrap_or_default(),
            password: get(DB_PASSWORD).unwrap_or_default(),
            host: get(DB_HOST).unwrap_or_default(),
            port,
            name: get(DB_NAME).unwrap_or_default(),
        };

        let rate_limit = parse_number(RATE_LIMIT, get(RATE_LIMIT))?;
        let host = get(APP_HOST).unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_number(APP_PORT, get(APP_PORT))?.unwrap_or(80);

        Ok(Self {
            database,
            rate_limit,
            host,
            port,
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ConfigError> {
    match value {
        None => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::NotANumber(key, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const COMPLETE: &[(&str, &str)] = &[
        ("DB_USER", "hr"),
        ("DB_PASSWORD", "secret"),
        ("DB_HOST", "db"),
        ("DB_PORT", "5432"),
        ("DB_NAME", "employees"),
    ];

    #[test]
    fn builds_database_url_and_defaults() {
        let config = AppConfig::from_lookup(lookup(COMPLETE)).unwrap();
        assert_eq!(config.database.url(), "postgres://hr:secret@db:5432/employees");
        assert_eq!(config.rate_limit, None);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 80);
    }

    #[test]
    fn reports_every_missing_key() {
        let err = AppConfig::from_lookup(lookup(&[("DB_USER", "hr"), ("DB_HOST", "")])).unwrap_err();
        match err {
            ConfigError::Missing(keys) => {
                assert_eq!(keys, vec!["DB_PASSWORD", "DB_PORT", "DB_HOST", "DB_NAME"])
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn rate_limit_must_be_numeric_when_present() {
        let mut pairs = COMPLETE.to_vec();
        pairs.push(("RATE_LIMIT", "fast"));
        let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert_eq!(err.to_string(), "RATE_LIMIT parameter is not a number: \"fast\"");

        let mut pairs = COMPLETE.to_vec();
        pairs.push(("RATE_LIMIT", "100"));
        assert_eq!(AppConfig::from_lookup(lookup(&pairs)).unwrap().rate_limit, Some(100));
    }

    #[test]
    fn database_port_must_be_numeric() {
        let mut pairs: Vec<(&str, &str)> =
            COMPLETE.iter().filter(|(k, _)| *k != "DB_PORT").cloned().collect();
        pairs.push(("DB_PORT", "five"));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&pairs)),
            Err(ConfigError::NotANumber("DB_PORT", _))
        ));
    }
}
