//! Classify subcommand - print every label for a single text.

use eyre::Result;
use normscope_core::classifier::{Features, normalize};
use normscope_core::types::{Category, Convention, Metric};

/// CLI arguments for single-text classification.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Transcript text to classify
    pub text: String,
}

/// Resolved configuration for single-text classification.
#[derive(Debug)]
pub struct Config {
    pub text: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self { text: args.text }
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::debug!(normalized = %normalize(&config.text), "classifying text");
    print!("{}", report(&config.text));
    Ok(())
}

/// One `name: value` line per category, then per metric.
pub fn report(text: &str) -> String {
    let features = Features::extract(text);

    let mut lines = Vec::with_capacity(Category::COUNT + Metric::COUNT);
    for category in Category::ALL {
        let value = features
            .as_ref()
            .map_or(Convention::NotDetected, |f| f.convention(category));
        lines.push(format!("{:<26} {value}", category.as_str()));
    }
    for metric in Metric::ALL {
        let value = features.as_ref().map_or(0.0, |f| f.metric(metric));
        lines.push(format!("{:<26} {value:.3}", metric.as_str()));
    }

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reports_every_category_and_metric() {
        let report = report("Le 1er janvier 2024, il a payé 1 000 € pour 10 km.");

        assert_eq!(
            report,
            "\
currency_format            symbol
percent_format             not_detected
thousand_separator_format  space
unit_format                short
ordinal_style              digit_suffix
number_style               digit
date_format                dd_month_yyyy
hesitation_frequency       0.000
capitalization_rate        0.042
punctuation_usage          1.000
"
        );
    }

    #[test]
    fn blank_text_reports_nothing_detected() {
        let report = report("  ");

        assert_eq!(report.lines().count(), Category::COUNT + Metric::COUNT);
        assert!(report.lines().take(Category::COUNT).all(|l| l.ends_with(" not_detected")));
    }
}
