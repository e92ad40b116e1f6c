use std::env;
use std::fmt::Debug;
use std::fmt::Display;
use std::path::PathBuf;
use std::time::Duration;

use config::Config;
use config::ConfigError;
use secrecy::ExposeSecret;
use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::records_client::RecordsClient;
use crate::routes::error_chain_fmt;

/// `actix_web::cookie::Key` needs at least this many bytes
const MIN_SESSION_KEY_BYTES: usize = 64;

/// Global configuration, loaded from `configuration/*.yaml` and `APP_*` env
/// vars. See `get_configuration`.
#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub records_api: RecordsApiSettings,
}

/// Server configuration
#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    /// Should be localhost on dev machine, 0.0.0.0 on prod
    pub host: String,

    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,

    /// Signs and encrypts the session cookie that holds the widget state
    pub session_key: Secret<String>,

    /// Only send the session cookie over https. Must be `true` in production.
    pub secure_cookies: bool,
}

/// Where signups are written to. `api_key`, `base_id` and `table_name` have no
/// defaults and must be supplied by the deployment environment.
#[derive(Deserialize, Clone)]
pub struct RecordsApiSettings {
    /// e.g. `https://api.airtable.com/v0`
    pub base_url: String,
    pub api_key: Secret<String>,
    pub base_id: String,
    pub table_name: String,
    /// Left unset, requests never time out
    pub timeout_milliseconds: Option<u64>,
}

impl RecordsApiSettings {
    pub fn timeout(&self) -> Option<Duration> { self.timeout_milliseconds.map(Duration::from_millis) }

    pub fn client(&self) -> Result<RecordsClient, reqwest::Error> {
        RecordsClient::new(
            &self.base_url,
            &self.base_id,
            &self.table_name,
            self.api_key.clone(),
            self.timeout(),
        )
    }
}

#[derive(thiserror::Error)]
pub enum ConfigurationError {
    #[error("Could not load configuration")]
    Load(#[from] ConfigError),
    #[error("Could not locate the configuration directory")]
    Directory(#[source] std::io::Error),
    #[error("Unknown environment {0:?}; use either `local` or `production`")]
    Environment(String),
    #[error("`{0}` must not be empty")]
    Missing(&'static str),
    #[error("`application.session_key` must be at least {} bytes long", MIN_SESSION_KEY_BYTES)]
    SessionKeyTooShort,
}

impl Debug for ConfigurationError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl Settings {
    /// Reject settings that would only blow up later, at the first submit
    /// (empty credentials) or at startup deep inside actix (short key).
    pub fn validate(self) -> Result<Self, ConfigurationError> {
        let records = &self.records_api;
        for (name, value) in [
            ("records_api.base_url", records.base_url.as_str()),
            ("records_api.api_key", records.api_key.expose_secret().as_str()),
            ("records_api.base_id", records.base_id.as_str()),
            ("records_api.table_name", records.table_name.as_str()),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigurationError::Missing(name));
            }
        }

        if self.application.session_key.expose_secret().len() < MIN_SESSION_KEY_BYTES {
            return Err(ConfigurationError::SessionKeyTooShort);
        }

        Ok(self)
    }
}

pub enum Environment {
    Local,
    Production,
}

impl Display for Environment {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Environment::Local => "local",
                Environment::Production => "production",
            }
        )
    }
}

impl TryFrom<String> for Environment {
    type Error = ConfigurationError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(ConfigurationError::Environment(value)),
        }
    }
}

/// Load yaml configuration files at `<project_root>/configuration`:
/// `base.yaml`, then `{local,production}.yaml` (picked by `APP_ENVIRONMENT`,
/// default `local`), then env vars, e.g. `APP_RECORDS_API__API_KEY=...` ->
/// `Settings.records_api.api_key`.
///
/// Missing or blank fields fail here, so the server never starts half
/// configured.
pub fn get_configuration() -> Result<Settings, ConfigurationError> {
    let cfg_dir = env::current_dir()
        .map_err(ConfigurationError::Directory)?
        .join("configuration");

    let env: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".to_string())
        .try_into()?;

    load(cfg_dir, env)
}

fn load(
    cfg_dir: PathBuf,
    env: Environment,
) -> Result<Settings, ConfigurationError> {
    let settings = Config::builder()
        .add_source(config::File::from(cfg_dir.join("base.yaml")))
        .add_source(config::File::from(cfg_dir.join(format!("{env}.yaml"))))
        .add_source(
            // env vars are -always- parsed as String, hence `serde-aux` for the port
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()?.validate()
}
