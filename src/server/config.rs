use crate::server::error::{config::ConfigError, AppError};

const TWILIO_VERIFY_BASE_URL: &str = "https://verify.twilio.com/v2";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPLOADS_DIR: &str = "uploads";

/// Credentials and endpoint for the Twilio Verify API.
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub verify_service_sid: String,

    /// Base URL of the Verify API, without a trailing slash.
    pub base_url: String,
}

pub struct Config {
    pub database_url: String,
    pub port: u16,

    /// Public base URL used to build links to uploaded files.
    pub public_url: String,
    pub uploads_dir: String,

    pub jwt_key: String,

    pub twilio: TwilioConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let public_url = std::env::var("PUBLIC_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| format!("http://localhost:{}", port));

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port,
            public_url,
            uploads_dir: std::env::var("UPLOADS_DIR")
                .unwrap_or_else(|_| DEFAULT_UPLOADS_DIR.to_string()),
            jwt_key: required("JWT_KEY")?,
            twilio: TwilioConfig {
                account_sid: required("TWILIO_ACCOUNT_SID")?,
                auth_token: required("TWILIO_AUTH_TOKEN")?,
                verify_service_sid: required("TWILIO_VERIFY_SERVICE_SID")?,
                base_url: TWILIO_VERIFY_BASE_URL.to_string(),
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
