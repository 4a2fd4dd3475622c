use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error(
        "No project URL found. Set SUPABASE_URL env var or add url to ~/.config/teamseed/config.toml"
    )]
    MissingUrl,

    #[error(
        "No service role key found. Set SUPABASE_SERVICE_ROLE_KEY env var or add service_role_key to ~/.config/teamseed/config.toml"
    )]
    MissingServiceKey,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid team: {0}")]
    InvalidTeam(String),

    #[error("Error creating team: {message}")]
    InsertFailed { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, SeedError>;
