use thiserror::Error;

use crate::config::EnvironmentProvider;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Application settings, resolved once at startup
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub database_url: String,
    pub bind_addr: String,
    /// External base URL advertised in the OpenAPI document
    pub public_url: String,
    pub jwt_secret: String,
    pub refresh_token_secret: String,
    /// Secret mixed into password hashes in addition to per-hash salts
    pub password_pepper: String,
    pub gemini: GeminiSettings,
}

/// Connection settings for the Google Generative Language API
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl AppSettings {
    /// Resolve settings from the given environment provider
    ///
    /// Secrets have no defaults and must be present; everything else falls
    /// back to development defaults.
    pub fn from_provider(env: &dyn EnvironmentProvider) -> Result<Self, ConfigError> {
        let database_url = env
            .get_var("DATABASE_URL")
            .unwrap_or_else(|| "sqlite://pyquest.db?mode=rwc".to_string());
        let bind_addr = env
            .get_var("BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let public_url = env
            .get_var("PUBLIC_URL")
            .unwrap_or_else(|| "http://localhost:3000/api".to_string());

        let jwt_secret = env
            .get_var("JWT_SECRET")
            .ok_or(ConfigError::MissingVar("JWT_SECRET"))?;
        let refresh_token_secret = env
            .get_var("REFRESH_TOKEN_SECRET")
            .ok_or(ConfigError::MissingVar("REFRESH_TOKEN_SECRET"))?;
        let password_pepper = env
            .get_var("PASSWORD_PEPPER")
            .ok_or(ConfigError::MissingVar("PASSWORD_PEPPER"))?;

        let gemini = GeminiSettings {
            api_key: env
                .get_var("GEMINI_API_KEY")
                .ok_or(ConfigError::MissingVar("GEMINI_API_KEY"))?,
            model: env
                .get_var("GEMINI_MODEL")
                .unwrap_or_else(|| "gemini-2.0-flash".to_string()),
            base_url: env
                .get_var("GEMINI_BASE_URL")
                .unwrap_or_else(|| "https://generativelanguage.googleapis.com".to_string()),
        };

        Ok(Self {
            database_url,
            bind_addr,
            public_url,
            jwt_secret,
            refresh_token_secret,
            password_pepper,
            gemini,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env_provider::MockEnvironment;

    fn env_with_secrets() -> MockEnvironment {
        MockEnvironment::empty()
            .with_var("JWT_SECRET", "jwt-secret")
            .with_var("REFRESH_TOKEN_SECRET", "refresh-secret")
            .with_var("PASSWORD_PEPPER", "pepper")
            .with_var("GEMINI_API_KEY", "test-key")
    }

    #[test]
    fn defaults_apply_when_only_secrets_are_set() {
        let settings = AppSettings::from_provider(&env_with_secrets()).unwrap();
        assert_eq!(settings.bind_addr, "0.0.0.0:3000");
        assert!(settings.database_url.starts_with("sqlite://"));
        assert_eq!(settings.gemini.model, "gemini-2.0-flash");
    }

    #[test]
    fn missing_secret_is_an_error() {
        let env = MockEnvironment::empty()
            .with_var("REFRESH_TOKEN_SECRET", "refresh-secret")
            .with_var("PASSWORD_PEPPER", "pepper")
            .with_var("GEMINI_API_KEY", "test-key");

        let err = AppSettings::from_provider(&env).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("JWT_SECRET")));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let env = env_with_secrets()
            .with_var("BIND_ADDR", "127.0.0.1:8080")
            .with_var("GEMINI_MODEL", "gemini-2.5-pro");

        let settings = AppSettings::from_provider(&env).unwrap();
        assert_eq!(settings.bind_addr, "127.0.0.1:8080");
        assert_eq!(settings.gemini.model, "gemini-2.5-pro");
    }
}
