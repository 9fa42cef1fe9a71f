//! Connection configuration from environment variables.

use crate::error::Error;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: &str = "5432";
const DEFAULT_USER: &str = "postgres";
const DEFAULT_PASS: &str = "postgres";
const DEFAULT_DB: &str = "mycelium";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conf {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Conf {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an explicit variable lookup. Absent or
    /// empty values fall back to the defaults for a local postgres.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| match lookup(key) {
            Some(value) if !value.is_empty() => value,
            _ => default.to_string(),
        };

        let port_raw = get("PG_PORT", DEFAULT_PORT);
        let port = port_raw.parse::<u16>().map_err(|_| Error::Configuration {
            var: "PG_PORT",
            value: port_raw.clone(),
        })?;

        Ok(Self {
            host: get("PG_HOST", DEFAULT_HOST),
            port,
            user: get("PG_USER", DEFAULT_USER),
            password: get("PG_PASS", DEFAULT_PASS),
            database: get("PG_DB", DEFAULT_DB),
        })
    }

    pub fn uses_default_credentials(&self) -> bool {
        self.user == DEFAULT_USER && self.password == DEFAULT_PASS
    }
}
