use std::env;
use std::env::current_dir;
use std::fmt::Display;
use std::time::Duration;

use config::Config;
use chrono_tz::Tz;
use config::ConfigError;
use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

/// Global configuration, loaded from `configuration/*.yaml` and `APP_*` env
/// vars. See `get_configuration`.
#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub store: StoreSettings,
    pub admin: AdminSettings,
}

/// Server configuration
#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    /// Should be localhost on dev machine, 0.0.0.0 on prod
    pub host: String,

    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,

    /// Signs session and flash message cookies. Must be at least 64 bytes.
    pub hmac_secret: Secret<String>,

    /// IANA name of the studio's time zone (`America/Argentina/Buenos_Aires`).
    /// Decides where "today" starts in the panel and which date a lead shows.
    pub timezone: Tz,
}

/// The hosted table store (Supabase/PostgREST) holding leads and newsletter
/// subscribers
#[derive(Deserialize, Clone)]
pub struct StoreSettings {
    /// Project URL, without the `/rest/v1` suffix
    pub base_url: String,

    /// Anon (public) API key; row level security decides what it may do
    pub api_key: Secret<String>,

    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl StoreSettings {
    pub fn timeout(&self) -> Duration { Duration::from_millis(self.timeout_milliseconds) }
}

/// The single account allowed into `/admin`
#[derive(Deserialize, Clone)]
pub struct AdminSettings {
    pub username: String,

    /// Argon2 hash in PHC format (`$argon2id$v=19$...`); the password itself
    /// is never configured
    pub password_hash: Secret<String>,
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
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            e => Err(format!("{e} is not a supported environment; use `local` or `production`")),
        }
    }
}

/// Load yaml configuration files at `<project_root>/configuration`:
/// `base.yaml`, then `{APP_ENVIRONMENT}.yaml` (default `local`), then env vars.
///
/// All fields must be present once the sources are merged, otherwise the
/// server does not start.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let cfg_dir = current_dir()
        .map_err(|e| ConfigError::Message(format!("could not get current dir: {e}")))?
        .join("configuration");

    let env: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".to_string())
        .try_into()
        .map_err(ConfigError::Message)?;

    let settings = Config::builder()
        .add_source(config::File::from(cfg_dir.join("base.yaml")))
        .add_source(config::File::from(cfg_dir.join(format!("{env}.yaml"))))
        .add_source(
            // env vars are -always- parsed as String, hence `serde-aux` for the
            // numeric fields
            //
            // `APP_STORE__API_KEY=...` -> `Settings.store.api_key`
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
