use serde::{Deserialize, Serialize};

/// One entity mention as stored in the source corpus: `[start_idx, end_idx, type]`.
///
/// Both indices are zero-based and inclusive over the owning sentence's tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize, String)", into = "(usize, usize, String)")]
pub struct EntitySpan {
    pub start_idx: usize,
    pub end_idx: usize,
    /// Entity type exactly as written in the source (not normalized).
    pub label: String,
}

impl EntitySpan {
    /// Creates a span over tokens `start_idx..=end_idx`.
    #[must_use]
    pub fn new(start_idx: usize, end_idx: usize, label: impl Into<String>) -> Self {
        Self {
            start_idx,
            end_idx,
            label: label.into(),
        }
    }
}

impl From<(usize, usize, String)> for EntitySpan {
    fn from((start_idx, end_idx, label): (usize, usize, String)) -> Self {
        Self {
            start_idx,
            end_idx,
            label,
        }
    }
}

impl From<EntitySpan> for (usize, usize, String) {
    fn from(span: EntitySpan) -> Self {
        (span.start_idx, span.end_idx, span.label)
    }
}

/// A document from a `.jsonlines` source file.
///
/// `ners[i]` holds the entity spans of `sentences[i]`. Any other fields on
/// the line (relations, clusters, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Opaque identifier; also decides which split(s) the document lands in.
    pub doc_key: String,
    /// Pre-tokenized sentences.
    pub sentences: Vec<Vec<String>>,
    /// Per-sentence entity spans, parallel to `sentences`.
    pub ners: Vec<Vec<EntitySpan>>,
}

impl SourceDocument {
    /// Returns `true` if every sentence has exactly one entity group.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.ners.len() == self.sentences.len()
    }
}
