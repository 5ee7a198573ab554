use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::UdaanError;

/// Which key-value backend holds the credential record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub loglevel: String,
    pub listen_addr: String,
    pub database_url: String,
    pub store: StoreKind,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loglevel: "info".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite://data.sqlite".to_string(),
            store: StoreKind::Sqlite,
            body_limit: 1024 * 1024,
        }
    }
}

impl Config {
    /// Defaults overridden by `UDAAN_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("UDAAN_"))
    }

    pub fn load() -> Result<Self, UdaanError> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, UdaanError> {
        Ok(figment.extract()?)
    }
}
