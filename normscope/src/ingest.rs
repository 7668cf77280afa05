//! Transcript CSV ingestion.
//!
//! A file is named `transcriptions_{lang}[_anything].csv` and holds one
//! column per model run; a column belongs to the first registered model
//! whose identifier appears in its header.

use crate::config::ModelRegistry;
use eyre::{Context, Result};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

const FILE_PREFIX: &str = "transcriptions_";

/// Reasons a transcript file is rejected as a whole.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("no language code in file name: {file}")]
    NoLanguage { file: String },

    #[error("no column of {file} names a known model ({models})")]
    NoModelColumn { file: String, models: String },
}

/// Transcripts of one model inside one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelColumn {
    pub header: String,
    pub model: String,
    pub transcripts: Vec<String>,
}

/// One accepted transcript file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    pub file: String,
    pub language: String,
    pub columns: Vec<ModelColumn>,
}

impl Dataset {
    /// Distinct models of the file, in column order.
    pub fn models(&self) -> Vec<&str> {
        let mut models: Vec<&str> = Vec::new();
        for column in &self.columns {
            if !models.contains(&column.model.as_str()) {
                models.push(&column.model);
            }
        }
        models
    }

    pub fn transcript_count(&self) -> usize {
        self.columns.iter().map(|c| c.transcripts.len()).sum()
    }
}

/// Language code embedded in a transcript file name.
///
/// The stem must start with `transcriptions_`, followed by two or three
/// lowercase ASCII letters ending at `_` or at the end of the stem.
pub fn language_from_file_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let rest = stem.strip_prefix(FILE_PREFIX)?;

    let (code, tail) = rest.split_at(
        rest.find(|c: char| !c.is_ascii_lowercase())
            .unwrap_or(rest.len()),
    );

    let terminated = tail.is_empty() || tail.starts_with('_');
    ((2..=3).contains(&code.len()) && terminated).then(|| code.to_string())
}

/// Load and validate one transcript file.
pub fn load(path: &Path, registry: &ModelRegistry) -> Result<Dataset> {
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let language = language_from_file_name(path).ok_or_else(|| IngestError::NoLanguage {
        file: file.clone(),
    })?;

    let reader = std::fs::File::open(path)
        .wrap_err_with(|| format!("failed to open transcripts: {:?}", path.display()))?;

    from_reader(file, language, reader, registry)
}

/// Parse transcript CSV data for a file whose language is already known.
///
/// Cells are kept verbatim; blank ones yield no observation downstream.
pub fn from_reader<R: Read>(
    file: String,
    language: String,
    reader: R,
    registry: &ModelRegistry,
) -> Result<Dataset> {
    let mut table = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = table
        .headers()
        .wrap_err_with(|| format!("failed to read header of {file}"))?
        .clone();

    let mut indexed: Vec<(usize, ModelColumn)> = headers
        .iter()
        .enumerate()
        .filter_map(|(index, header)| {
            let model = registry.match_column(header)?;
            Some((
                index,
                ModelColumn {
                    header: header.to_string(),
                    model: model.to_string(),
                    transcripts: Vec::new(),
                },
            ))
        })
        .collect();

    if indexed.is_empty() {
        return Err(IngestError::NoModelColumn {
            file,
            models: registry.ids().join(", "),
        }
        .into());
    }

    for (row, record) in table.records().enumerate() {
        let record = record.wrap_err_with(|| format!("malformed row {} in {file}", row + 1))?;
        for (index, column) in &mut indexed {
            if let Some(cell) = record.get(*index) {
                column.transcripts.push(cell.to_string());
            }
        }
    }

    let dataset = Dataset {
        file,
        language,
        columns: indexed.into_iter().map(|(_, column)| column).collect(),
    };

    tracing::debug!(
        file = %dataset.file,
        language = %dataset.language,
        columns = dataset.columns.len(),
        transcripts = dataset.transcript_count(),
        "loaded transcripts"
    );

    Ok(dataset)
}
