//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, DatabaseConfig, JwtSettings, LogFormat, LoggingConfig, ServerConfig,
};
