// GitHub Gist API module.
// Provides the HTTP client, the list parser, and the gist domain types.

pub mod client;
pub mod parser;
pub mod types;

pub use client::{DEFAULT_TIMEOUT, GITHUB_API_BASE, GistApi, GistClient, GistListResponse};
pub use parser::{ParseFailure, parse_gist_list};
pub use types::*;
