//! Source files: one or more slot documents plus the weight they carry.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yml::Value;

use crate::error::{MergeError, MergeResult};
use crate::slot::Slot;

/// A parsed source file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    /// Where the file was read from.
    pub path: PathBuf,
    /// Selection weight for every game this source contributes.
    pub weight: u64,
    /// Slot documents, in file order.
    pub slots: Vec<Slot>,
}

impl SourceDocument {
    /// Read and parse a source file.
    pub fn load(path: impl AsRef<Path>, weight: u64) -> MergeResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MergeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, weight, &text)
    }

    /// Parse source text that may hold several `---`-separated documents.
    ///
    /// Empty documents are skipped; a file with no slot documents at all is
    /// rejected.
    pub fn parse(path: impl AsRef<Path>, weight: u64, text: &str) -> MergeResult<Self> {
        let path = path.as_ref();
        let mut slots = Vec::new();

        for (index, de) in serde_yml::Deserializer::from_str(text).enumerate() {
            let document = Value::deserialize(de).map_err(|source| MergeError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

            if document.is_null() {
                log::debug!("{}: skipping empty document {}", path.display(), index + 1);
                continue;
            }

            let slot = Slot::from_document(&document).map_err(|issue| MergeError::Structural {
                path: path.to_path_buf(),
                document: index,
                issue,
            })?;
            log::debug!(
                "{}: slot {} contributes {:?}",
                path.display(),
                index + 1,
                slot.game_names()
            );
            slots.push(slot);
        }

        if slots.is_empty() {
            return Err(MergeError::EmptySource(path.to_path_buf()));
        }

        Ok(Self {
            path: path.to_path_buf(),
            weight,
            slots,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCategory, SlotIssue};

    #[test]
    fn multiple_documents() {
        let text = "name: A\ngame: Zelda\nZelda: {}\n---\nname: B\ngame: Metroid\nMetroid: {}\n";
        let source = SourceDocument::parse("two.yaml", 4, text).unwrap();
        assert_eq!(source.weight, 4);
        assert_eq!(source.slots.len(), 2);
        assert_eq!(source.slots[1].name.as_deref(), Some("B"));
    }

    #[test]
    fn trailing_separator_is_skipped() {
        let text = "game: Zelda\nZelda: {}\n---\n";
        let source = SourceDocument::parse("trailing.yaml", 1, text).unwrap();
        assert_eq!(source.slots.len(), 1);
    }

    #[test]
    fn empty_file_is_structural() {
        let err = SourceDocument::parse("empty.yaml", 1, "").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Structural);
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let err = SourceDocument::parse("bad.yaml", 1, "game: [unclosed\n").unwrap_err();
        assert!(matches!(err, MergeError::Parse { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn structural_error_names_document() {
        let text = "game: Zelda\nZelda: {}\n---\nname: nothing here\n";
        let err = SourceDocument::parse("second.yaml", 1, text).unwrap_err();
        match err {
            MergeError::Structural {
                document, issue, ..
            } => {
                assert_eq!(document, 1);
                assert_eq!(issue, SlotIssue::MissingGame);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = SourceDocument::load(dir.path().join("nope.yaml"), 1).unwrap_err();
        assert!(matches!(err, MergeError::Read { .. }));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("zelda.yaml");
        std::fs::write(&path, "game: Zelda\nZelda:\n  hearts: 3\n").unwrap();

        let source = SourceDocument::load(&path, 2).unwrap();
        assert_eq!(source.path, path);
        assert_eq!(source.slots[0].game_names(), vec!["Zelda"]);
    }
}
