//! Analyze subcommand - classify transcript files and write the summary CSV.

use crate::cli::InputArgs;
use crate::config::InputConfig;
use crate::ingest::{self, Dataset};
use crate::summary;
use eyre::{Result, bail};
use normscope_core::aggregate::{Aggregator, TallyBuilder, TallyPolicy};
use normscope_core::classifier::Features;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

/// CLI arguments for the convention summary.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output summary CSV path
    #[arg(short, long, default_value = "model_conventions_summary.csv")]
    pub output: PathBuf,
}

/// Resolved configuration for the convention summary.
#[derive(Debug)]
pub struct Config {
    pub input: InputConfig,
    pub output: PathBuf,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            input: args.input.try_into()?,
            output: args.output,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let datasets = load_datasets(&config.input)?;
    let aggregator = aggregate(&datasets, config.input.policy);

    let rows = summary::rows(&datasets, &aggregator);

    tracing::info!(path = ?config.output.display(), rows = rows.len(), "write summary");
    summary::write(&config.output, &rows)?;

    Ok(())
}

/// Load every input file, skipping rejected ones.
///
/// Fails only when no file is usable.
pub fn load_datasets(config: &InputConfig) -> Result<Vec<Dataset>> {
    let mut datasets = Vec::with_capacity(config.files.len());

    for path in &config.files {
        match ingest::load(path, &config.registry) {
            Ok(dataset) => {
                tracing::info!(
                    file = %dataset.file,
                    language = %dataset.language,
                    models = ?dataset.models(),
                    transcripts = dataset.transcript_count(),
                    "accepted transcripts"
                );
                datasets.push(dataset);
            }
            Err(error) => tracing::warn!(file = ?path.display(), %error, "skipping file"),
        }
    }

    if datasets.is_empty() {
        bail!("none of the {} input file(s) could be used", config.files.len());
    }

    Ok(datasets)
}

/// Classify every transcript and build the fallback aggregator.
///
/// Columns are classified in parallel; the tallies are then filled in a
/// single sequential pass, so counts never depend on scheduling.
pub fn aggregate(datasets: &[Dataset], policy: TallyPolicy) -> Aggregator {
    let s = Instant::now();

    let mut builder = TallyBuilder::new(policy);
    let mut classified = 0usize;

    for dataset in datasets {
        for column in &dataset.columns {
            let features: Vec<Features> = column
                .transcripts
                .par_iter()
                .filter_map(|text| Features::extract(text))
                .collect();

            for f in &features {
                builder.record_features(&dataset.language, &column.model, f);
            }
            classified += features.len();
        }
    }

    let aggregator = builder.finish();

    let d = s.elapsed();
    tracing::info!(
        transcripts = classified,
        duration = %format_secs(d.as_secs_f32()),
        "classification completed"
    );

    aggregator
}

/// Format seconds as a string with two decimal places.
fn format_secs(secs: f32) -> String {
    format!("{:.2}s", secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ModelColumn;
    use normscope_core::types::{Category, Convention};

    fn dataset(language: &str, columns: &[(&str, &[&str])]) -> Dataset {
        Dataset {
            file: format!("transcriptions_{language}.csv"),
            language: language.into(),
            columns: columns
                .iter()
                .map(|(model, texts)| ModelColumn {
                    header: model.to_string(),
                    model: model.to_string(),
                    transcripts: texts.iter().map(|t| t.to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn blank_cells_are_not_observations() {
        let datasets = [dataset("fr", &[("whisper", &["", "  ", "10 km"])])];
        let aggregator = aggregate(&datasets, TallyPolicy::CountAll);

        let resolution = aggregator.resolve_detailed("fr", "whisper", Category::UnitFormat);
        assert_eq!(resolution.value, Convention::Short);
        assert_eq!(resolution.share, 1.0);
    }

    #[test]
    fn columns_of_one_model_pool_together() {
        let datasets = [dataset(
            "es",
            &[
                ("canary", &["cuesta 20 €"]),
                ("canary", &["cuesta veinte euros", "son tres euros"]),
            ],
        )];
        let aggregator = aggregate(&datasets, TallyPolicy::CountAll);

        assert_eq!(
            aggregator.resolve("es", "canary", Category::CurrencyFormat),
            Convention::Word
        );
    }

    #[test]
    fn aggregation_is_stable_across_runs() {
        let texts: Vec<String> = (0..200)
            .map(|i| match i % 3 {
                0 => format!("{i} %"),
                1 => format!("{i}%"),
                _ => "sin cifras".to_string(),
            })
            .collect();
        let texts: Vec<&str> = texts.iter().map(String::as_str).collect();
        let datasets = [dataset("es", &[("parakeet", &texts)])];

        let first = aggregate(&datasets, TallyPolicy::CountAll);
        let second = aggregate(&datasets, TallyPolicy::CountAll);

        for category in Category::ALL {
            assert_eq!(
                first.resolve_detailed("es", "parakeet", category),
                second.resolve_detailed("es", "parakeet", category)
            );
        }
    }
}
