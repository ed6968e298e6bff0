//! Shared configuration for the ulasan workspace.
//!
//! Holds the environment-driven [`AppConfig`] and the lexicon file schema that
//! every other crate builds its scoring data from.

pub mod app_config;
pub mod config;
pub mod lexicons;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use lexicons::{load_lexicons, parse_lexicons, LexiconsFile, BUILTIN_LEXICONS_YAML};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read lexicon file {path}: {source}")]
    LexiconFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lexicon file: {0}")]
    LexiconFileParse(#[source] serde_yaml::Error),

    #[error("lexicon validation failed: {0}")]
    Validation(String),
}
