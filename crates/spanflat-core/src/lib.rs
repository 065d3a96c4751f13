//! # Spanflat Core
//!
//! Converts span-annotated NER corpora stored as one sentence-grouped JSON
//! document per line into flat per-sentence training records, split into
//! train/dev/test by document key, plus the sorted entity label set.
//!
//! ## Quick Start
//!
//! ```rust
//! use spanflat_core::flatten::flatten_document;
//! use spanflat_core::types::SourceDocument;
//!
//! let line = r#"{"doc_key":"ge/train/0001","ners":[[[0,1,"dna"]]],"sentences":[["IL-2","gene"]]}"#;
//! let doc: SourceDocument = serde_json::from_str(line).unwrap();
//! let records = flatten_document(&doc).unwrap();
//!
//! assert_eq!(records[0].text, "IL-2 gene");
//! assert_eq!(records[0].entities[0].entity, "IL-2 gene");
//! assert_eq!(records[0].entities[0].entity_type, "DNA");
//! ```
pub mod config;
pub mod error;
pub mod flatten;
pub mod partition;
pub mod reader;
pub mod types;

// Re-export primary API
pub use config::{ConvertConfig, ErrorPolicy};
pub use error::{Result, SpanflatError};
pub use flatten::{flatten_document, normalize_label};
pub use partition::{Partition, RunSummary, discover_sources, process_file, run};
pub use types::{EntitySpan, FlatEntity, FlatRecord, SourceDocument, Split};
