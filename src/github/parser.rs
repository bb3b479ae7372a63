// Gist list parsing.
// Decodes the list endpoint's JSON into a value tree, then extracts and
// validates records one field at a time so a bad entry never sinks the batch.

use reqwest::Url;
use serde_json::{Map, Value};
use thiserror::Error;

use super::types::{GistFileRecord, GistRecord};

/// The response body was not a JSON array.
#[derive(Error, Debug)]
pub enum ParseFailure {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array, found {0}")]
    NotAnArray(&'static str),
}

/// Parse a gist list response body.
///
/// Entries without a description or without a single usable file are
/// dropped. An empty result is not an error.
pub fn parse_gist_list(json: &str) -> Result<Vec<GistRecord>, ParseFailure> {
    let value: Value = serde_json::from_str(json)?;
    let entries = match value {
        Value::Array(entries) => entries,
        other => return Err(ParseFailure::NotAnArray(kind_of(&other))),
    };

    Ok(entries.iter().filter_map(parse_gist).collect())
}

fn parse_gist(entry: &Value) -> Option<GistRecord> {
    let entry = entry.as_object()?;

    let description = non_empty_str(entry, "description")?;
    let files: Vec<GistFileRecord> = entry
        .get("files")?
        .as_object()?
        .iter()
        .filter_map(|(name, file)| parse_file(name, file))
        .collect();

    if files.is_empty() {
        return None;
    }

    Some(GistRecord {
        description: description.to_string(),
        files,
    })
}

fn parse_file(name: &str, file: &Value) -> Option<GistFileRecord> {
    if name.is_empty() {
        return None;
    }

    let raw_url = non_empty_str(file.as_object()?, "raw_url")?;
    // Relative URLs cannot be fetched on their own
    Url::parse(raw_url).ok()?;

    Some(GistFileRecord::new(name, raw_url))
}

fn non_empty_str<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
