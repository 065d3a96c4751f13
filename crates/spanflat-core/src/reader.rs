//! Reading of `.jsonlines` source files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SpanflatError};
use crate::types::SourceDocument;

/// Emit a progress event every this many lines.
const PROGRESS_EVERY: usize = 1000;

/// Parses one source line. `line_no` is one-based and only used for errors.
pub fn parse_line(path: &Path, line_no: usize, line: &str) -> Result<SourceDocument> {
    serde_json::from_str(line.trim()).map_err(|source| SpanflatError::MalformedLine {
        path: path.to_path_buf(),
        line: line_no,
        source,
    })
}

/// Reads every document of a JSON-lines file, in line order.
///
/// Blank lines are skipped. The file handle is dropped on every return path.
pub fn read_documents(path: &Path) -> Result<Vec<SourceDocument>> {
    let file = File::open(path).map_err(|e| SpanflatError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut documents = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|e| SpanflatError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }

        documents.push(parse_line(path, line_no, &line)?);

        if line_no % PROGRESS_EVERY == 0 {
            debug!(path = %path.display(), lines = line_no, "reading");
        }
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_documents_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"doc_key":"a/train/1","ners":[[]],"sentences":[["x"]]}}"#
        )
        .unwrap();
        writeln!(file).unwrap();
        writeln!(
            file,
            r#"{{"doc_key":"a/train/2","ners":[[]],"sentences":[["y"]]}}"#
        )
        .unwrap();

        let docs = read_documents(file.path()).unwrap();
        let keys: Vec<_> = docs.iter().map(|d| d.doc_key.as_str()).collect();
        assert_eq!(keys, vec!["a/train/1", "a/train/2"]);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"doc_key":"a/dev/1","ners":[],"sentences":[]}}"#
        )
        .unwrap();
        writeln!(file, "{{not json").unwrap();

        let err = read_documents(file.path()).unwrap_err();
        assert!(matches!(err, SpanflatError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let err = parse_line(Path::new("x.jsonlines"), 1, r#"{"doc_key":"k"}"#).unwrap_err();
        assert!(matches!(err, SpanflatError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_documents(Path::new("/nonexistent/spanflat/a.jsonlines")).unwrap_err();
        assert!(matches!(err, SpanflatError::Io { .. }));
    }
}
