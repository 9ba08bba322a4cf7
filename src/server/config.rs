use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_EMAIL_API_URL: &str = "https://api.resend.com/emails";
const DEFAULT_EMAIL_FROM: &str = "Tripboard <noreply@tripboard.app>";

pub struct Config {
    pub database_url: String,
    /// Public URL of the web client, used for CORS and links in invitation emails.
    pub app_url: String,
    pub bind_address: String,
    /// Marks the session cookie `Secure`; enable when served over HTTPS.
    pub session_secure: bool,

    pub email_api_url: String,
    /// Invitation emails are skipped when no key is configured.
    pub email_api_key: Option<String>,
    pub email_from: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: required("APP_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            session_secure: parse_bool("SESSION_SECURE", optional("SESSION_SECURE"))?,
            email_api_url: optional("EMAIL_API_URL")
                .unwrap_or_else(|| DEFAULT_EMAIL_API_URL.to_string()),
            email_api_key: optional("EMAIL_API_KEY"),
            email_from: optional("EMAIL_FROM").unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_bool(name: &str, value: Option<String>) -> Result<bool, ConfigError> {
    match value.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None => Ok(false),
        Some("true") | Some("1") | Some("yes") => Ok(true),
        Some("false") | Some("0") | Some("no") => Ok(false),
        Some(other) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("expected a boolean, got '{}'", other),
        }),
    }
}
