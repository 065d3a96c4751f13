//! Spanflat CLI
//!
//! Converts a directory of span-annotated `.jsonlines` NER files into
//! `train.json`, `dev.json`, `test.json` and `tag.txt`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spanflat_core::config::DEFAULT_SUFFIX;
use spanflat_core::{ConvertConfig, ErrorPolicy, RunSummary};
use tracing::{info, warn, Level};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "spanflat")]
#[command(about = "Flatten span-annotated NER jsonlines into train/dev/test JSON splits")]
#[command(version)]
struct Cli {
    /// Directory containing the source files
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Directory the split files and tag.txt are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Suffix of the source file names
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// Skip files that fail to convert instead of aborting the run
    #[arg(long)]
    skip_invalid: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> ConvertConfig {
        let policy = if self.skip_invalid {
            ErrorPolicy::SkipFile
        } else {
            ErrorPolicy::FailFast
        };
        ConvertConfig::new()
            .with_input_dir(&self.dir)
            .with_output_dir(&self.output_dir)
            .with_suffix(&self.suffix)
            .with_error_policy(policy)
    }
}

fn report(summary: &RunSummary) {
    for (split, count) in summary.split_counts {
        println!("write {} done: {} examples", split.file_name(), count);
    }
    for path in &summary.skipped {
        warn!(path = %path.display(), "file was skipped");
    }
    info!(
        files = summary.files.len(),
        skipped = summary.skipped.len(),
        labels = summary.labels,
        "conversion finished"
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = cli.config();
    let summary = spanflat_core::run(&config)
        .with_context(|| format!("failed to convert {}", config.input_dir.display()))?;

    report(&summary);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["spanflat"]);
        let config = cli.config();
        assert_eq!(config.input_dir, PathBuf::from("."));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.suffix, ".jsonlines");
        assert_eq!(config.error_policy, ErrorPolicy::FailFast);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "spanflat",
            "corpus/genia",
            "-o",
            "out",
            "--suffix",
            ".jsonl",
            "--skip-invalid",
            "-v",
        ]);
        assert!(cli.verbose);
        let config = cli.config();
        assert_eq!(config.input_dir, PathBuf::from("corpus/genia"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.suffix, ".jsonl");
        assert_eq!(config.error_policy, ErrorPolicy::SkipFile);
    }
}
