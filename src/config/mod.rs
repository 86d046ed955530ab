//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, IndexBackend, LlmConfig, LogFormat, LoggingConfig, RetrievalConfig, ServerConfig,
    StorageBackend, StorageConfig,
};
