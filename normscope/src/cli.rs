//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "nscope")]
#[command(about = "Infer ASR transcript formatting conventions and write annotation guidelines")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify transcript CSVs and write a per-model convention summary
    Analyze(crate::analyze::Args),

    /// Render Markdown annotation guidelines for a language and model
    Guide(crate::guide::Args),

    /// Classify a single text and print every label
    Classify(crate::classify::Args),
}

/// Transcript input options shared by subcommands.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Transcript CSV files (default: transcriptions*.csv in the working directory)
    pub inputs: Vec<PathBuf>,

    /// Extra model identifier to look for in column names (repeatable)
    #[arg(long = "add-model", value_name = "ID")]
    pub model_ids: Vec<String>,

    /// Leave undetected transcripts out of the majority vote
    #[arg(long)]
    pub detected_only: bool,
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Analyze(args) => crate::analyze::execute(args.try_into()?),
        Commands::Guide(args) => crate::guide::execute(args.try_into()?),
        Commands::Classify(args) => crate::classify::execute(args.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_analyze_defaults() {
        let cli = Cli::parse_from(["nscope", "analyze"]);

        match &cli.command {
            Commands::Analyze(crate::analyze::Args {
                input: InputArgs {
                    inputs,
                    model_ids,
                    detected_only: false,
                },
                output,
            }) if inputs.is_empty() && model_ids.is_empty() => {
                assert_eq!(output.to_str(), Some("model_conventions_summary.csv"));
            }
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_analyze_with_inputs_and_models() {
        let cli = Cli::parse_from([
            "nscope",
            "analyze",
            "transcriptions_fr_a.csv",
            "transcriptions_es_b.csv",
            "--add-model",
            "voxtral",
            "--detected-only",
            "-o",
            "out.csv",
        ]);

        match &cli.command {
            Commands::Analyze(crate::analyze::Args {
                input:
                    InputArgs {
                        inputs,
                        model_ids,
                        detected_only: true,
                    },
                output,
            }) if inputs.len() == 2 && model_ids == &["voxtral"] => {
                assert_eq!(output.to_str(), Some("out.csv"));
            }
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn parses_guide_for_one_pair() {
        let cli = Cli::parse_from(["nscope", "guide", "--lang", "fr", "--model", "whisper"]);

        match &cli.command {
            Commands::Guide(crate::guide::Args {
                lang: Some(lang),
                model: Some(model),
                all: false,
                ..
            }) if lang == "fr" && model == "whisper" => {}
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }

    #[test]
    fn guide_all_conflicts_with_pair() {
        let result = Cli::try_parse_from(["nscope", "guide", "--all", "--lang", "fr"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_classify_text() {
        let cli = Cli::parse_from(["nscope", "classify", "le 1er janvier"]);

        match &cli.command {
            Commands::Classify(crate::classify::Args { text }) if text == "le 1er janvier" => {}
            _ => panic!("unexpected command: {:?}", cli.command),
        }
    }
}
