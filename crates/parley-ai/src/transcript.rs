//! Transcript export.
//!
//! A transcript is the session history (persona excluded) written as a
//! pretty-printed JSON array of `{role, content}` objects. Non-ASCII text
//! is kept verbatim.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use parley_common::ParleyError;
use tracing::info;

use crate::Message;

/// Filename used when the user does not name one:
/// `<prefix>_chat_YYYYmmdd_HHMMSS.json`.
pub fn default_filename(prefix: &str, now: DateTime<Local>) -> String {
    format!("{prefix}_chat_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Render turns in the export format.
pub fn to_json(turns: &[Message]) -> Result<String, ParleyError> {
    serde_json::to_string_pretty(turns)
        .map_err(|e| ParleyError::Transcript(format!("failed to serialize transcript: {e}")))
}

/// Write `turns` to `path`, replacing any existing file.
pub fn save_transcript(path: &Path, turns: &[Message]) -> Result<(), ParleyError> {
    let json = to_json(turns)?;
    fs::write(path, json)?;
    info!(path = %path.display(), turns = turns.len(), "transcript saved");
    Ok(())
}

/// Save to `filename`, or to a timestamped default name in the working
/// directory. Returns the path written.
pub fn save_with_default_name(
    filename: Option<&str>,
    prefix: &str,
    turns: &[Message],
) -> Result<PathBuf, ParleyError> {
    let path = match filename {
        Some(name) => PathBuf::from(name),
        None => PathBuf::from(default_filename(prefix, Local::now())),
    };
    save_transcript(&path, turns)?;
    Ok(path)
}

/// Read a transcript back.
pub fn load_transcript(path: &Path) -> Result<Vec<Message>, ParleyError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        ParleyError::Transcript(format!("failed to parse {}: {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Vec<Message> {
        vec![
            Message::user("Hello"),
            Message::assistant("Hiya! Welcome tae the swamp. 🧅"),
            Message::user("Ça va?"),
        ]
    }

    #[test]
    fn default_filename_uses_timestamp() {
        let now = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(
            default_filename("parley", now),
            "parley_chat_20240307_090501.json"
        );
    }

    #[test]
    fn saved_transcript_reloads_equal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.json");

        save_transcript(&path, &sample()).unwrap();
        assert_eq!(load_transcript(&path).unwrap(), sample());
    }

    #[test]
    fn export_is_indented_utf8_array() {
        let json = to_json(&sample()[..1]).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"role\": \"user\",\n    \"content\": \"Hello\"\n  }\n]"
        );

        let json = to_json(&sample()).unwrap();
        assert!(json.contains("🧅"));
        assert!(json.contains("Ça va?"));
    }

    #[test]
    fn empty_history_exports_empty_array() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn explicit_filename_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("named.json");
        let name = path.to_str().unwrap();

        let written = save_with_default_name(Some(name), "parley", &sample()).unwrap();
        assert_eq!(written, path);
        assert!(path.exists());
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("chat.json");
        let err = save_transcript(&path, &sample()).unwrap_err();
        assert!(matches!(err, ParleyError::Io(_)));
    }

    #[test]
    fn loading_non_array_is_transcript_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"role":"user"}"#).unwrap();
        let err = load_transcript(&path).unwrap_err();
        assert!(matches!(err, ParleyError::Transcript(_)));
    }
}
