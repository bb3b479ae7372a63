// Command-line interface.
// Flags fall back to environment variables, then to the XML config file.

use std::path::PathBuf;

use clap::Parser;

use crate::github::GITHUB_API_BASE;

/// Paste files from your public GitHub Gists into a folder.
#[derive(Parser, Debug)]
#[command(name = "wingister", version, about)]
pub struct Cli {
    /// Folder to paste files into.
    #[arg(default_value = ".", value_name = "DIR")]
    pub dir: PathBuf,

    /// GitHub user whose public gists are listed (overrides the config file).
    #[arg(long, env = "WINGISTER_USER", value_name = "USER")]
    pub user: Option<String>,

    /// Path to the XML config file.
    #[arg(
        long,
        env = "WINGISTER_CONFIG",
        value_name = "PATH",
        long_help = "Path to the XML config file. Defaults to WinGister.Shell.config.xml next to\n\
the executable. The username is read from the /Config/GitHubUser node."
    )]
    pub config: Option<PathBuf>,

    /// GitHub API root.
    #[arg(long, env = "WINGISTER_API_BASE", default_value = GITHUB_API_BASE)]
    pub api_base: String,

    /// Request timeout in seconds.
    #[arg(long, env = "WINGISTER_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Print the menu as JSON and exit instead of opening the menu.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wingister"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("."));
        assert_eq!(cli.api_base, "https://api.github.com");
        assert_eq!(cli.timeout_secs, 10);
        assert!(!cli.json);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "wingister",
            "/tmp/target",
            "--user",
            "octocat",
            "--config",
            "/etc/wingister.xml",
            "--timeout-secs",
            "3",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.dir, PathBuf::from("/tmp/target"));
        assert_eq!(cli.user.as_deref(), Some("octocat"));
        assert_eq!(cli.config, Some(PathBuf::from("/etc/wingister.xml")));
        assert_eq!(cli.timeout_secs, 3);
        assert!(cli.json);
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        assert!(Cli::try_parse_from(["wingister", "--timeout-secs", "soon"]).is_err());
    }
}
