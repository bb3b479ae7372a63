// wingister: paste files from a user's public GitHub Gists into a folder.
// The core fetches, parses, and caches the gist menu; the app renders it.

pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod paste;
pub mod service;
pub mod state;
pub mod ui;

#[cfg(test)]
mod testing;

pub use error::{Result, WinGisterError};
pub use github::{GistFileRecord, GistRecord, MenuModel};
pub use service::GistMenuService;
