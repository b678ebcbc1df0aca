use serde::Deserialize;
use thiserror::Error;

/// Minimum length of the HS256 secret
pub const MIN_JWT_SECRET_LEN: usize = 32;
/// Private cookies need a 64 byte master key
pub const MIN_COOKIE_SECRET_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    #[serde(alias = "dev")]
    Development,
    #[serde(alias = "prod")]
    Production,
}

impl Environment {
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(#[from] envy::Error),
    #[error("{0}")]
    Invalid(String),
}

/// Service configuration, read from environment variables.
///
/// Variable names are the upper-case field names (`DATABASE_URL`,
/// `JWT_SECRET`, ...). A `.env` file is honored when present.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub cookie_secret: String,
    #[serde(default)]
    pub env: Environment,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
    #[serde(default = "default_jwt_expiry_hours")]
    pub jwt_expiry_hours: i64,
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

const fn default_port() -> u16 {
    8080
}

fn default_allowed_origins() -> String {
    "http://localhost:3000".to_string()
}

const fn default_jwt_expiry_hours() -> i64 {
    24 * 7
}

const fn default_db_max_connections() -> u32 {
    10
}

const fn default_bcrypt_cost() -> u32 {
    10
}

impl ApiConfig {
    /// Load `.env` (if any) and read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config: Self = envy::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Read the configuration from explicit key/value pairs.
    pub fn from_iter<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Self = envy::from_iter(vars)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::Invalid(format!(
                "JWT_SECRET must be at least {MIN_JWT_SECRET_LEN} characters long"
            )));
        }
        if self.cookie_secret.len() < MIN_COOKIE_SECRET_LEN {
            return Err(ConfigError::Invalid(format!(
                "COOKIE_SECRET must be at least {MIN_COOKIE_SECRET_LEN} bytes long"
            )));
        }
        if self.jwt_expiry_hours <= 0 {
            return Err(ConfigError::Invalid(
                "JWT_EXPIRY_HOURS must be positive".to_string(),
            ));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::Invalid(
                "BCRYPT_COST must be between 4 and 31".to_string(),
            ));
        }
        Ok(())
    }

    /// `ALLOWED_ORIGINS` split on commas, blanks dropped.
    pub fn parsed_allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}
