//! Configuration types for resolved CLI arguments.
//!
//! Args structs (for CLI parsing) live next to their subcommands and in
//! cli.rs; this module holds what they resolve into.

use crate::cli::InputArgs;
use eyre::{Context, Result, bail};
use normscope_core::aggregate::TallyPolicy;
use std::path::PathBuf;

/// Model identifiers recognized out of the box.
pub const DEFAULT_MODELS: &[&str] = &["whisper", "canary", "parakeet"];

/// Input files picked up when none are given.
pub const DEFAULT_INPUT_PATTERN: &str = "transcriptions*.csv";

/// Known model identifiers, matched as substrings of column names.
///
/// Order matters: a column naming two models belongs to the first listed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelRegistry {
    ids: Vec<String>,
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MODELS.iter().map(|id| id.to_string()))
    }
}

impl ModelRegistry {
    pub fn new(ids: impl IntoIterator<Item = String>) -> Self {
        Self { ids: Vec::new() }.with(ids)
    }

    /// Append identifiers, lowercased, skipping blanks and duplicates.
    pub fn with(mut self, ids: impl IntoIterator<Item = String>) -> Self {
        for id in ids {
            let id = id.trim().to_lowercase();
            if !id.is_empty() && !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
        self
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// First identifier contained in the column header, case-insensitively.
    pub fn match_column(&self, header: &str) -> Option<&str> {
        let header = header.to_lowercase();
        self.ids
            .iter()
            .find(|id| header.contains(id.as_str()))
            .map(String::as_str)
    }
}

/// Resolved input configuration shared by subcommands.
#[derive(Debug)]
pub struct InputConfig {
    pub files: Vec<PathBuf>,
    pub registry: ModelRegistry,
    pub policy: TallyPolicy,
}

impl TryFrom<InputArgs> for InputConfig {
    type Error = eyre::Error;

    fn try_from(args: InputArgs) -> Result<Self> {
        let files = if args.inputs.is_empty() {
            discover(DEFAULT_INPUT_PATTERN)?
        } else {
            args.inputs
        };

        if files.is_empty() {
            bail!("no input files: pass CSV paths or run where {DEFAULT_INPUT_PATTERN} files exist");
        }

        let policy = if args.detected_only {
            TallyPolicy::DetectedOnly
        } else {
            TallyPolicy::CountAll
        };

        Ok(Self {
            files,
            registry: ModelRegistry::default().with(args.model_ids),
            policy,
        })
    }
}

/// Files matching a glob pattern, sorted.
fn discover(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = glob::glob(pattern)
        .wrap_err_with(|| format!("invalid input pattern: {pattern}"))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .wrap_err("failed to list input files")?;
    files.sort();

    tracing::debug!(pattern, count = files.len(), "discovered input files");
    Ok(files)
}
