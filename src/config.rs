//! Application configuration.
//!
//! Layered with `figment`: built-in defaults, then an optional TOML file,
//! then `BLOG_`-prefixed environment variables (`__` separates sections,
//! e.g. `BLOG_API__BASE_URL`). Out-of-range values are reset to their
//! defaults with a message on stderr, since logging is not up yet.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub content_type: String,
}

impl ApiConfig {
    const BASE_URL: &str = "http://127.0.0.1:4523";
    const TIMEOUT_SECS: u64 = 10;
    const CONTENT_TYPE: &str = "application/json;charset=UTF-8";

    fn ensure_valid(&mut self) {
        if self.base_url.trim().is_empty() {
            eprintln!(
                "Config error: api.base_url is empty - using default of '{}'",
                Self::BASE_URL
            );
            self.base_url = Self::BASE_URL.to_string();
        }
        if self.timeout_secs == 0 {
            eprintln!(
                "Config error: api.timeout_secs must be positive - using default of {}",
                Self::TIMEOUT_SECS
            );
            self.timeout_secs = Self::TIMEOUT_SECS;
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::BASE_URL.to_string(),
            timeout_secs: Self::TIMEOUT_SECS,
            content_type: Self::CONTENT_TYPE.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouterConfig {
    /// Path prefix the app is served under.
    pub base_path: String,
}

impl RouterConfig {
    const BASE_PATH: &str = "/";

    fn ensure_valid(&mut self) {
        if !self.base_path.starts_with('/') {
            eprintln!(
                "Config error: router.base_path '{}' must start with '/' - using default of '{}'",
                self.base_path,
                Self::BASE_PATH
            );
            self.base_path = Self::BASE_PATH.to_string();
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_path: Self::BASE_PATH.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
    const LEVEL: &str = "info";

    fn ensure_valid(&mut self) {
        let original = self.level.clone();
        self.level = self.level.trim().to_ascii_lowercase();
        if !Self::LOG_LEVELS.contains(&self.level.as_str()) {
            eprintln!(
                "Config error: log level of '{}' is invalid - using default of '{}'",
                original,
                Self::LEVEL
            );
            self.level = Self::LEVEL.to_string();
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::LEVEL.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub router: RouterConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads defaults, merges `path` if given, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed("BLOG_").split("__"));

        let mut config: AppConfig = figment.extract()?;
        config.ensure_valid();
        Ok(config)
    }

    fn ensure_valid(&mut self) {
        self.api.ensure_valid();
        self.router.ensure_valid();
        self.logging.ensure_valid();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_match_backend() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:4523");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.content_type, "application/json;charset=UTF-8");
        assert_eq!(config.router.base_path, "/");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_without_sources_gives_defaults() {
        Jail::expect_with(|_jail| {
            let config = AppConfig::load(None).expect("load");
            assert_eq!(config, AppConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_layering() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "blog.toml",
                r#"
                [api]
                base_url = "http://file.test"
                timeout_secs = 5

                [router]
                base_path = "/blog/"
                "#,
            )?;
            jail.set_env("BLOG_API__BASE_URL", "http://env.test");

            let config = AppConfig::load(Some(Path::new("blog.toml"))).expect("load");
            assert_eq!(config.api.base_url, "http://env.test");
            assert_eq!(config.api.timeout_secs, 5);
            assert_eq!(config.router.base_path, "/blog/");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values_fall_back() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "blog.toml",
                r#"
                [api]
                timeout_secs = 0

                [router]
                base_path = "blog"

                [logging]
                level = " DEBUG "
                "#,
            )?;

            let config = AppConfig::load(Some(Path::new("blog.toml"))).expect("load");
            assert_eq!(config.api.timeout_secs, 10);
            assert_eq!(config.router.base_path, "/");
            assert_eq!(config.logging.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("blog.toml", "[api\nbase_url = ")?;
            assert!(AppConfig::load(Some(Path::new("blog.toml"))).is_err());
            Ok(())
        });
    }
}
