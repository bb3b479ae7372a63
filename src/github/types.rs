// Gist domain types and the menu model built from them.
// Records are validated by the parser; the model is what the menu renders.

use serde::{Deserialize, Serialize};

pub const MSG_SUCCESS: &str = "Success";
pub const MSG_NO_USERNAME: &str = "No username supplied...";
pub const MSG_INTERNAL_ERROR: &str = "Internal error...";
pub const MSG_NO_GISTS: &str = "No gists available...";

/// A single file within a gist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistFileRecord {
    pub file_name: String,
    pub raw_url: String,
}

impl GistFileRecord {
    pub fn new(file_name: impl Into<String>, raw_url: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            raw_url: raw_url.into(),
        }
    }
}

/// A gist with a non-empty description and at least one usable file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistRecord {
    pub description: String,
    pub files: Vec<GistFileRecord>,
}

/// Why a menu could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuFailure {
    /// No username configured.
    NoUsername,
    /// Non-200 status, transport error, or empty body from the list endpoint.
    Transport,
    /// The list endpoint returned something that is not a JSON array.
    Parse,
    /// Well-formed response without a single qualifying gist.
    Empty,
}

impl MenuFailure {
    pub fn message(&self) -> &'static str {
        match self {
            MenuFailure::NoUsername => MSG_NO_USERNAME,
            MenuFailure::Transport | MenuFailure::Parse => MSG_INTERNAL_ERROR,
            MenuFailure::Empty => MSG_NO_GISTS,
        }
    }
}

/// Menu contents handed to the shell layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuModel {
    pub success: bool,
    /// Human-readable status, always populated.
    pub message: String,
    /// Present only when `success` is true.
    pub gists: Option<Vec<GistRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<MenuFailure>,
}

impl MenuModel {
    pub fn success(gists: Vec<GistRecord>) -> Self {
        Self {
            success: true,
            message: MSG_SUCCESS.to_string(),
            gists: Some(gists),
            failure: None,
        }
    }

    pub fn failure(failure: MenuFailure) -> Self {
        Self {
            success: false,
            message: failure.message().to_string(),
            gists: None,
            failure: Some(failure),
        }
    }

    /// Gists to render, empty for failure models.
    pub fn gists(&self) -> &[GistRecord] {
        self.gists.as_deref().unwrap_or_default()
    }
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}
