//! # Record Flattener
//!
//! Turns one sentence-grouped [`SourceDocument`] into one [`FlatRecord`] per
//! sentence. Pure: no I/O, no shared state.

use crate::error::{Result, SpanflatError};
use crate::types::{EntitySpan, FlatEntity, FlatRecord, SourceDocument};

/// Normalizes an entity type label (Unicode upper-casing).
///
/// Idempotent: `normalize_label(&normalize_label(x)) == normalize_label(x)`.
#[must_use]
pub fn normalize_label(label: &str) -> String {
    label.to_uppercase()
}

/// Joins tokens with single spaces.
#[must_use]
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(token.as_ref());
    }
    out
}

/// Returns the surface text of tokens `start_idx..=end_idx`, or `None` if the
/// span is reversed or runs past the end of `tokens`.
#[must_use]
pub fn span_text<S: AsRef<str>>(tokens: &[S], start_idx: usize, end_idx: usize) -> Option<String> {
    if start_idx > end_idx || end_idx >= tokens.len() {
        return None;
    }
    Some(join_tokens(&tokens[start_idx..=end_idx]))
}

/// Flattens a document into one record per sentence, in sentence order.
///
/// # Errors
/// - [`SpanflatError::StructuralMismatch`] if `ners` and `sentences` differ in length.
/// - [`SpanflatError::InvalidSpan`] if any span falls outside its sentence.
///
/// # Examples
/// ```
/// use spanflat_core::flatten::flatten_document;
/// use spanflat_core::types::{EntitySpan, SourceDocument};
///
/// let doc = SourceDocument {
///     doc_key: "ge/train/0001".into(),
///     sentences: vec![vec!["IL-2".into(), "gene".into()]],
///     ners: vec![vec![EntitySpan::new(0, 1, "dna")]],
/// };
/// let records = flatten_document(&doc).unwrap();
/// assert_eq!(records[0].text, "IL-2 gene");
/// assert_eq!(records[0].entities[0].entity_type, "DNA");
/// ```
pub fn flatten_document(doc: &SourceDocument) -> Result<Vec<FlatRecord>> {
    if !doc.is_aligned() {
        return Err(SpanflatError::StructuralMismatch {
            doc_key: doc.doc_key.clone(),
            sentences: doc.sentences.len(),
            ners: doc.ners.len(),
        });
    }

    doc.sentences
        .iter()
        .zip(&doc.ners)
        .enumerate()
        .map(|(i, (tokens, spans))| flatten_sentence(&doc.doc_key, i, tokens, spans))
        .collect()
}

fn flatten_sentence(
    doc_key: &str,
    sentence: usize,
    tokens: &[String],
    spans: &[EntitySpan],
) -> Result<FlatRecord> {
    let entities = spans
        .iter()
        .map(|span| {
            let entity = span_text(tokens, span.start_idx, span.end_idx).ok_or_else(|| {
                SpanflatError::InvalidSpan {
                    doc_key: doc_key.to_string(),
                    sentence,
                    start_idx: span.start_idx,
                    end_idx: span.end_idx,
                    len: tokens.len(),
                }
            })?;
            Ok(FlatEntity {
                start_idx: span.start_idx,
                end_idx: span.end_idx,
                entity_type: normalize_label(&span.label),
                entity,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(FlatRecord {
        doc_key: doc_key.to_string(),
        text: join_tokens(tokens),
        entities,
    })
}
