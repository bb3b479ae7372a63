// Error types for wingister.
// Covers client setup, configuration, and the paste side effect. Expected
// menu and raw-fetch failures never surface here; they become typed results.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WinGisterError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid API base URL '{0}'")]
    InvalidApiBase(String),

    #[error("Config file error: {0}")]
    Config(#[from] quick_xml::DeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Paste target is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("There was an unexpected error while retrieving your file")]
    RawFetch(String),
}

pub type Result<T> = std::result::Result<T, WinGisterError>;
