use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::QuizItem;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse quiz items: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0} must contain at least one item")]
    Empty(String),
}

/// Read a JSON array of quiz items from `path`.
///
/// Only the file shape is checked here; whether each item has exactly one
/// correct option is decided when the quiz starts.
pub fn load_items_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<QuizItem>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items = parse_items(&json_content).map_err(|err| match err {
        LoadError::Empty(_) => LoadError::Empty(path.display().to_string()),
        other => other,
    })?;

    tracing::info!(path = %path.display(), items = items.len(), "loaded quiz items");
    Ok(items)
}

pub fn parse_items(json: &str) -> Result<Vec<QuizItem>, LoadError> {
    let items: Vec<QuizItem> = serde_json::from_str(json)?;

    if items.is_empty() {
        return Err(LoadError::Empty("item list".to_string()));
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"[
        {
            "question": "are you ready?",
            "answer": [
                { "text": "no", "correct": false },
                { "text": "yes", "correct": true }
            ]
        },
        {
            "prompt": "How many periods does the periodic table have?",
            "options": [
                { "text": "12", "is_correct": false },
                { "text": "7", "is_correct": true },
                { "text": "66", "is_correct": false }
            ]
        }
    ]"#;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let items = load_items_from_json(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].prompt, "are you ready?");
        assert_eq!(items[1].correct_option_index(), Some(1));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_items_from_json(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_empty_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();

        let err = load_items_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty(_)));
        assert!(err.to_string().contains("must contain at least one item"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_items("{ not json"), Err(LoadError::Parse(_))));
    }
}
