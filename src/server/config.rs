use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Emails granted the admin role at startup.
    pub admin_emails: Vec<String>,
    /// Whether the session cookie carries the `Secure` attribute.
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_vars(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvVar)` - `SECURE_COOKIES` is not a boolean
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let admin_emails = lookup("ADMIN_EMAILS")
            .map(|raw| {
                raw.split(',')
                    .map(|email| email.trim().to_lowercase())
                    .filter(|email| !email.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let secure_cookies = match lookup("SECURE_COOKIES") {
            None => false,
            Some(value) => value
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "SECURE_COOKIES".to_string(),
                    value,
                })?,
        };

        Ok(Self {
            database_url,
            bind_address,
            admin_emails,
            secure_cookies,
        })
    }
}
