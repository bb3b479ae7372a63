// Pasting gist files into a folder.
// Resolves the target path, reports conflicts, and writes content atomically.
// Confirming an overwrite is left to the caller.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cache::Clock;
use crate::error::{Result, WinGisterError};
use crate::github::{GistApi, GistFileRecord};
use crate::service::GistMenuService;

/// A gist file about to be written into a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteRequest {
    pub file: GistFileRecord,
    pub target: PathBuf,
}

impl PasteRequest {
    /// Resolve where `file` lands inside `dir`.
    pub fn prepare(dir: &Path, file: &GistFileRecord) -> Result<Self> {
        if !dir.is_dir() {
            return Err(WinGisterError::NotADirectory(dir.to_path_buf()));
        }

        Ok(Self {
            file: file.clone(),
            target: dir.join(sanitize_file_name(&file.file_name)),
        })
    }

    /// Whether writing would replace an existing file.
    pub fn overwrites(&self) -> bool {
        self.target.exists()
    }

    /// Fetch the file's content and write it to the target.
    /// Nothing is written when the content cannot be retrieved.
    pub fn execute<A: GistApi, C: Clock>(
        &self,
        service: &GistMenuService<A, C>,
    ) -> Result<PathBuf> {
        let contents = service
            .fetch_file_content(&self.file.raw_url)
            .ok_or_else(|| WinGisterError::RawFetch(self.file.raw_url.clone()))?;

        write_atomic(&self.target, &contents)?;
        info!(target = %self.target.display(), bytes = contents.len(), "pasted gist file");
        Ok(self.target.clone())
    }
}

/// Write via a temp file in the same directory, then rename into place.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = path.with_file_name(format!(".{}.wingister-tmp", file_name));

    let written = fs::File::create(&temp_path)
        .and_then(|mut file| {
            file.write_all(contents)?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(&temp_path, path));

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    Ok(())
}

/// Sanitize a gist file name for use as a single path component.
/// Replaces separators and characters Windows rejects with underscores.
fn sanitize_file_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            _ => c,
        })
        .collect();

    match sanitized.as_str() {
        "" | "." | ".." => "_".repeat(sanitized.len().max(1)),
        _ => sanitized,
    }
}
