//! # Dataset Partitioner
//!
//! Drives the flattener over every source file of a directory, routes the
//! resulting records into the train/dev/test splits by their document key,
//! collects the label set, and writes the four output artifacts.
//!
//! Nothing is written until every file has been processed, so a fatal error
//! leaves the output directory untouched.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{ConvertConfig, ErrorPolicy};
use crate::error::{Result, SpanflatError};
use crate::flatten::flatten_document;
use crate::reader::read_documents;
use crate::types::{FlatRecord, Split};

/// Records grouped by split, plus every label seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    splits: [Vec<FlatRecord>; 3],
    labels: BTreeSet<String>,
}

impl Partition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record to every split its `doc_key` names and records its labels.
    ///
    /// Labels are collected even when the record matches no split.
    pub fn add(&mut self, record: FlatRecord) {
        self.labels.extend(record.labels().map(str::to_string));

        let targets: Vec<Split> = Split::routes(&record.doc_key).collect();
        if let Some((last, rest)) = targets.split_last() {
            for split in rest {
                self.splits[split.index()].push(record.clone());
            }
            self.splits[last.index()].push(record);
        }
    }

    /// Appends everything from `other`, keeping its record order after ours.
    pub fn merge(&mut self, other: Partition) {
        let Partition { splits, labels } = other;
        for (mine, theirs) in self.splits.iter_mut().zip(splits) {
            mine.extend(theirs);
        }
        self.labels.extend(labels);
    }

    /// Records routed to `split`, in insertion order.
    pub fn records(&self, split: Split) -> &[FlatRecord] {
        &self.splits[split.index()]
    }

    /// Distinct upper-cased entity types, sorted.
    pub fn labels(&self) -> &BTreeSet<String> {
        &self.labels
    }

    /// The label set as written to `tag.txt`: sorted, newline-joined.
    pub fn tag_list(&self) -> String {
        self.labels
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Record count of each split, in output order.
    pub fn counts(&self) -> [(Split, usize); 3] {
        Split::ALL.map(|split| (split, self.records(split).len()))
    }

    /// Writes `<split>.json` for every split and the label list to the output directory.
    ///
    /// Returns the record count written per split.
    pub fn persist(&self, config: &ConvertConfig) -> Result<[(Split, usize); 3]> {
        fs::create_dir_all(&config.output_dir)
            .map_err(|e| SpanflatError::io(&config.output_dir, e))?;

        for split in Split::ALL {
            let path = config.output_path(split.file_name());
            write_split(&path, self.records(split))?;
            info!(
                split = %split,
                records = self.records(split).len(),
                path = %path.display(),
                "wrote split"
            );
        }

        let tag_path = config.tag_path();
        fs::write(&tag_path, self.tag_list()).map_err(|e| SpanflatError::io(&tag_path, e))?;
        info!(labels = self.labels.len(), path = %tag_path.display(), "wrote label list");

        Ok(self.counts())
    }
}

fn write_split(path: &Path, records: &[FlatRecord]) -> Result<()> {
    let file = File::create(path).map_err(|e| SpanflatError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush().map_err(|e| SpanflatError::io(path, e))
}

/// Lists the source files of `config.input_dir`, sorted by file name.
///
/// Only regular files whose name ends with `config.suffix` are returned.
/// The listing is sorted so output order does not depend on the platform.
pub fn discover_sources(config: &ConvertConfig) -> Result<Vec<PathBuf>> {
    let dir = &config.input_dir;
    let metadata = fs::metadata(dir).map_err(|e| SpanflatError::io(dir, e))?;
    if !metadata.is_dir() {
        return Err(SpanflatError::NotADirectory(dir.clone()));
    }

    let mut sources = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| SpanflatError::io(dir, e))? {
        let entry = entry.map_err(|e| SpanflatError::io(dir, e))?;
        let path = entry.path();
        let eligible = entry
            .file_name()
            .to_str()
            .is_some_and(|name| config.is_source_name(name));
        if eligible && path.is_file() {
            debug!(path = %path.display(), "discovered source file");
            sources.push(path);
        }
    }

    sources.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(sources)
}

/// Flattens every document of one source file into a fresh partition.
pub fn process_file(path: &Path) -> Result<Partition> {
    let documents = read_documents(path)?;

    let mut partition = Partition::new();
    let mut records = 0usize;
    for doc in &documents {
        for record in flatten_document(doc)? {
            partition.add(record);
            records += 1;
        }
    }

    info!(
        path = %path.display(),
        documents = documents.len(),
        records,
        "processed source file"
    );
    Ok(partition)
}

/// Outcome of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Source files whose records made it into the output, in processing order.
    pub files: Vec<PathBuf>,
    /// Source files dropped under [`ErrorPolicy::SkipFile`].
    pub skipped: Vec<PathBuf>,
    /// Records written per split.
    pub split_counts: [(Split, usize); 3],
    /// Number of distinct labels written to `tag.txt`.
    pub labels: usize,
}

/// Processes every source file and aggregates them into one partition, in
/// discovery order. Nothing is written.
///
/// Returns the partition and the files skipped under [`ErrorPolicy::SkipFile`].
pub fn aggregate(config: &ConvertConfig, sources: &[PathBuf]) -> Result<(Partition, Vec<PathBuf>)> {
    let mut partition = Partition::new();
    let mut skipped = Vec::new();

    for path in sources {
        match process_file(path) {
            Ok(file_partition) => partition.merge(file_partition),
            Err(err) => match config.error_policy {
                ErrorPolicy::FailFast => return Err(err),
                ErrorPolicy::SkipFile => {
                    warn!(path = %path.display(), error = %err, "skipping source file");
                    skipped.push(path.clone());
                }
            },
        }
    }

    Ok((partition, skipped))
}

/// Runs a full conversion: discover, flatten, partition, then persist.
///
/// # Errors
/// Under [`ErrorPolicy::FailFast`] the first error of any file is returned and
/// no output artifact is created. Directory and output I/O errors are always
/// returned.
pub fn run(config: &ConvertConfig) -> Result<RunSummary> {
    let sources = discover_sources(config)?;
    info!(
        dir = %config.input_dir.display(),
        files = sources.len(),
        "discovered source files"
    );

    let (partition, skipped) = aggregate(config, &sources)?;
    let split_counts = partition.persist(config)?;

    let files = sources
        .into_iter()
        .filter(|path| !skipped.contains(path))
        .collect();

    Ok(RunSummary {
        files,
        skipped,
        split_counts,
        labels: partition.labels().len(),
    })
}
