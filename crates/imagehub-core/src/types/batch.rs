//! Aggregated upload batch results and per-file outcomes.

use serde::{Deserialize, Serialize};

/// Classification of a completed upload batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchKind {
    /// No input files were supplied.
    Empty,
    /// Every file was saved.
    Success,
    /// Some files were saved, some failed.
    PartialSuccess,
    /// Input was supplied but nothing was saved.
    Error,
}

/// Per-file success/failure record within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    /// The filename as submitted by the caller.
    pub filename: String,
    /// Basename the file was saved under, when persistence succeeded.
    pub saved_name: Option<String>,
    /// Failure description, when any per-file step failed.
    pub error: Option<String>,
}

impl FileOutcome {
    /// Records a successfully persisted file.
    pub fn saved(filename: impl Into<String>, saved_name: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            saved_name: Some(saved_name.into()),
            error: None,
        }
    }

    /// Records a per-file failure.
    pub fn failed(filename: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            saved_name: None,
            error: Some(error.into()),
        }
    }
}

/// Aggregated result of one upload batch.
///
/// Invariant: `Success` means `errors` is empty and `saved_files` is not;
/// `PartialSuccess` means both are nonempty; `Error` means `saved_files`
/// is empty with nonempty input; `Empty` means no input. Construct through
/// [`BatchResult::from_outcomes`], [`BatchResult::empty`], or
/// [`BatchResult::error`] so the invariant always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Batch classification.
    pub kind: BatchKind,
    /// Human-readable summary message.
    pub message: String,
    /// Saved basenames, in input order.
    pub saved_files: Vec<String>,
    /// Per-file error descriptions, in input order, each prefixed with
    /// the offending filename.
    pub errors: Vec<String>,
}

impl BatchResult {
    /// Result for a batch with no input files.
    pub fn empty() -> Self {
        Self {
            kind: BatchKind::Empty,
            message: "No files uploaded".to_string(),
            saved_files: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Batch-level failure result (nothing saved).
    pub fn error(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            kind: BatchKind::Error,
            message: message.into(),
            saved_files: Vec::new(),
            errors,
        }
    }

    /// Aggregates per-file outcomes into a batch result, preserving
    /// input order for both saved names and errors.
    pub fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        if outcomes.is_empty() {
            return Self::empty();
        }

        let saved_files: Vec<String> = outcomes
            .iter()
            .filter_map(|o| o.saved_name.clone())
            .collect();
        let errors: Vec<String> = outcomes
            .iter()
            .filter_map(|o| {
                o.error
                    .as_ref()
                    .map(|e| format!("{}: {e}", o.filename))
            })
            .collect();

        if saved_files.is_empty() {
            return Self::error("Upload failed", errors);
        }

        let kind = if errors.is_empty() {
            BatchKind::Success
        } else {
            BatchKind::PartialSuccess
        };

        Self {
            kind,
            message: "Upload completed".to_string(),
            saved_files,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_has_no_files_or_errors() {
        let result = BatchResult::from_outcomes(&[]);
        assert_eq!(result.kind, BatchKind::Empty);
        assert!(result.saved_files.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn all_saved_is_success() {
        let outcomes = vec![
            FileOutcome::saved("a.tif", "a.tif"),
            FileOutcome::saved("b.png", "b.png"),
        ];
        let result = BatchResult::from_outcomes(&outcomes);
        assert_eq!(result.kind, BatchKind::Success);
        assert_eq!(result.saved_files, vec!["a.tif", "b.png"]);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn mixed_outcomes_are_partial_success() {
        let outcomes = vec![
            FileOutcome::saved("a.tif", "a.tif"),
            FileOutcome::failed("b.gif", "Unsupported file type: b.gif"),
        ];
        let result = BatchResult::from_outcomes(&outcomes);
        assert_eq!(result.kind, BatchKind::PartialSuccess);
        assert_eq!(result.saved_files, vec!["a.tif"]);
        assert_eq!(result.errors, vec!["b.gif: Unsupported file type: b.gif"]);
    }

    #[test]
    fn all_failed_is_error() {
        let outcomes = vec![FileOutcome::failed("a.gif", "Unsupported file type: a.gif")];
        let result = BatchResult::from_outcomes(&outcomes);
        assert_eq!(result.kind, BatchKind::Error);
        assert_eq!(result.message, "Upload failed");
        assert!(result.saved_files.is_empty());
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&BatchKind::PartialSuccess).unwrap();
        assert_eq!(json, "\"partial_success\"");
    }
}
