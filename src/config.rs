// Runtime settings.
// Resolves the GitHub username from the command line or the XML config file
// that sits next to the executable.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::cli::Cli;
use crate::error::Result;

pub const CONFIG_FILE_NAME: &str = "WinGister.Shell.config.xml";

/// `<Config><GitHubUser>name</GitHubUser></Config>`
#[derive(Debug, Default, Deserialize)]
struct ConfigDocument {
    #[serde(rename = "GitHubUser", default)]
    github_user: Option<String>,
}

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Empty when no username could be found.
    pub username: String,
    pub api_base: String,
    pub timeout: Duration,
}

impl Settings {
    /// Resolve settings from parsed arguments.
    pub fn resolve(cli: &Cli) -> Self {
        let username = match cli.user.as_deref().map(str::trim) {
            Some(user) if !user.is_empty() => user.to_string(),
            _ => {
                let path = cli.config.clone().or_else(default_config_path);
                username_from_config(path.as_deref())
            }
        };

        Self {
            username,
            api_base: cli.api_base.clone(),
            timeout: Duration::from_secs(cli.timeout_secs),
        }
    }
}

/// `WinGister.Shell.config.xml` in the executable's directory.
pub fn default_config_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Read the username from a config file.
pub fn read_username(path: &Path) -> Result<String> {
    let xml = fs::read_to_string(path)?;
    let document: ConfigDocument = quick_xml::de::from_str(&xml)?;
    Ok(document
        .github_user
        .map(|user| user.trim().to_string())
        .unwrap_or_default())
}

/// Username from the config file, or an empty string if it cannot be read.
pub fn username_from_config(path: Option<&Path>) -> String {
    let Some(path) = path else {
        warn!("no config file location available");
        return String::new();
    };

    match read_username(path) {
        Ok(user) => {
            debug!(path = %path.display(), user = %user, "read username from config");
            user
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read username from config");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_username() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"<?xml version="1.0" encoding="utf-8"?>
<Config>
  <GitHubUser>octocat</GitHubUser>
</Config>"#,
        );

        assert_eq!(read_username(&path).unwrap(), "octocat");
    }

    #[test]
    fn test_unknown_nodes_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "<Config><Theme>dark</Theme><GitHubUser> spaced </GitHubUser></Config>",
        );

        assert_eq!(read_username(&path).unwrap(), "spaced");
    }

    #[test]
    fn test_missing_node_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "<Config><Theme>dark</Theme></Config>");

        assert_eq!(username_from_config(Some(&path)), "");
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        assert!(read_username(&path).is_err());
        assert_eq!(username_from_config(Some(&path)), "");
        assert_eq!(username_from_config(None), "");
    }

    #[test]
    fn test_malformed_xml_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "<Config><GitHubUser>octocat</Config>");

        assert!(read_username(&path).is_err());
        assert_eq!(username_from_config(Some(&path)), "");
    }

    #[test]
    fn test_cli_user_wins() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "<Config><GitHubUser>from-file</GitHubUser></Config>");

        let cli = Cli::try_parse_from([
            "wingister",
            "--user",
            "from-flag",
            "--config",
            path.to_str().unwrap(),
        ])
        .unwrap();

        assert_eq!(Settings::resolve(&cli).username, "from-flag");
    }

    #[test]
    fn test_blank_cli_user_falls_back_to_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "<Config><GitHubUser>from-file</GitHubUser></Config>");

        let cli = Cli::try_parse_from([
            "wingister",
            "--user",
            "  ",
            "--config",
            path.to_str().unwrap(),
            "--timeout-secs",
            "4",
        ])
        .unwrap();

        let settings = Settings::resolve(&cli);
        assert_eq!(settings.username, "from-file");
        assert_eq!(settings.timeout, Duration::from_secs(4));
    }
}
