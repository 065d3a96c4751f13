use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a span-annotated corpus.
#[derive(Debug, Error)]
pub enum SpanflatError {
    /// A document's `ners` list does not line up with its `sentences` list.
    #[error(
        "document {doc_key:?} has {sentences} sentences but {ners} entity groups"
    )]
    StructuralMismatch {
        /// Key of the offending document.
        doc_key: String,
        /// Number of sentences in the document.
        sentences: usize,
        /// Number of per-sentence entity groups in the document.
        ners: usize,
    },

    /// An entity span points outside its sentence or is reversed.
    #[error(
        "document {doc_key:?} sentence {sentence}: span [{start_idx}, {end_idx}] is invalid for {len} tokens"
    )]
    InvalidSpan {
        doc_key: String,
        /// Zero-based index of the sentence inside the document.
        sentence: usize,
        start_idx: usize,
        end_idx: usize,
        /// Token count of the sentence.
        len: usize,
    },

    /// A line of a source file is not a valid source document.
    #[error("{}:{line}: malformed document: {source}", .path.display())]
    MalformedLine {
        path: PathBuf,
        /// One-based line number.
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Reading a source file or writing an output artifact failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing an output split failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The input path exists but is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl SpanflatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for spanflat operations.
pub type Result<T> = std::result::Result<T, SpanflatError>;
