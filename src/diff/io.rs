//! Loading already-parsed diffs from JSON or YAML documents.

use crate::error::{HunkstatError, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use super::model::FileDiff;

/// Encoding of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    /// YAML for `.yaml`/`.yml` files, JSON for everything else.
    #[default]
    Auto,
    Json,
    Yaml,
}

impl InputFormat {
    /// Resolve `Auto` against the extension of `path`.
    pub fn resolve(self, path: &Path) -> InputFormat {
        match self {
            InputFormat::Auto => match path.extension().and_then(|e| e.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                    InputFormat::Yaml
                }
                _ => InputFormat::Json,
            },
            other => other,
        }
    }
}

/// A document holds either one file diff or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<FileDiff>),
    One(FileDiff),
}

impl From<Document> for Vec<FileDiff> {
    fn from(doc: Document) -> Self {
        match doc {
            Document::Many(diffs) => diffs,
            Document::One(diff) => vec![diff],
        }
    }
}

impl FileDiff {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| HunkstatError::InputError(format!("failed to parse diff JSON: {}", e)))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| HunkstatError::InputError(format!("failed to parse diff YAML: {}", e)))
    }
}

/// Parse a document containing one file diff or a list of file diffs.
///
/// `Auto` is treated as JSON here since there is no file name to go by.
pub fn parse_file_diffs(content: &str, format: InputFormat) -> Result<Vec<FileDiff>> {
    let doc: Document = match format {
        InputFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| HunkstatError::InputError(format!("failed to parse diff YAML: {}", e)))?,
        InputFormat::Json | InputFormat::Auto => serde_json::from_str(content)
            .map_err(|e| HunkstatError::InputError(format!("failed to parse diff JSON: {}", e)))?,
    };
    Ok(doc.into())
}

/// Load every file diff from the document at `path`.
///
/// # Arguments
///
/// * `path` - JSON or YAML document
/// * `format` - Document encoding; `Auto` decides by file extension
/// * `max_bytes` - Documents larger than this are rejected unread
///
/// # Returns
///
/// * `Ok(Vec<FileDiff>)` - The file diffs in document order
/// * `Err(HunkstatError::InputError)` - Unreadable, oversized or malformed document
pub fn load_file_diffs<P: AsRef<Path>>(
    path: P,
    format: InputFormat,
    max_bytes: u64,
) -> Result<Vec<FileDiff>> {
    let path = path.as_ref();

    let metadata = std::fs::metadata(path).map_err(|e| {
        HunkstatError::InputError(format!("failed to read '{}': {}", path.display(), e))
    })?;
    if metadata.len() > max_bytes {
        return Err(HunkstatError::InputError(format!(
            "'{}' is {} bytes, larger than max_input_bytes ({})",
            path.display(),
            metadata.len(),
            max_bytes
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        HunkstatError::InputError(format!("failed to read '{}': {}", path.display(), e))
    })?;

    let format = format.resolve(path);
    log::debug!("loading '{}' as {:?}", path.display(), format);

    let diffs = parse_file_diffs(&content, format).map_err(|e| {
        HunkstatError::InputError(format!("'{}': {}", path.display(), e))
    })?;
    log::debug!("loaded {} file diffs from '{}'", diffs.len(), path.display());
    Ok(diffs)
}

/// Read a raw hunk body from `reader`, refusing more than `max_bytes`.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn read_body<R: Read>(reader: R, max_bytes: u64) -> Result<String> {
    let mut buf = Vec::new();
    reader
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|e| HunkstatError::InputError(format!("failed to read hunk body: {}", e)))?;

    if buf.len() as u64 > max_bytes {
        return Err(HunkstatError::InputError(format!(
            "hunk body is larger than max_input_bytes ({})",
            max_bytes
        )));
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}
