//! Per-(file, model) convention summary CSV.

use crate::ingest::Dataset;
use eyre::{Context, Result};
use normscope_core::aggregate::Aggregator;
use normscope_core::types::{Category, Convention, Metric};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// One summary line: resolved conventions, winner shares and metric means.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryRow {
    pub file: String,
    pub language: String,
    pub model: String,

    pub currency_format: Convention,
    pub percent_format: Convention,
    pub thousand_separator_format: Convention,
    pub unit_format: Convention,
    pub ordinal_style: Convention,
    pub number_style: Convention,
    pub date_format: Convention,

    pub currency_format_share: f64,
    pub percent_format_share: f64,
    pub thousand_separator_format_share: f64,
    pub unit_format_share: f64,
    pub ordinal_style_share: f64,
    pub number_style_share: f64,
    pub date_format_share: f64,

    pub hesitation_frequency: f64,
    pub capitalization_rate: f64,
    pub punctuation_usage: f64,
}

impl SummaryRow {
    pub fn resolve(file: &str, language: &str, model: &str, aggregator: &Aggregator) -> Self {
        let conventions = Category::ALL.map(|c| aggregator.resolve_detailed(language, model, c));
        let metric = |m| round(aggregator.resolve_metric(language, model, m));
        let [currency, percent, thousand, unit, ordinal, number, date] = conventions;

        Self {
            file: file.to_string(),
            language: language.to_string(),
            model: model.to_string(),

            currency_format: currency.value,
            percent_format: percent.value,
            thousand_separator_format: thousand.value,
            unit_format: unit.value,
            ordinal_style: ordinal.value,
            number_style: number.value,
            date_format: date.value,

            currency_format_share: round(currency.share),
            percent_format_share: round(percent.share),
            thousand_separator_format_share: round(thousand.share),
            unit_format_share: round(unit.share),
            ordinal_style_share: round(ordinal.share),
            number_style_share: round(number.share),
            date_format_share: round(date.share),

            hesitation_frequency: metric(Metric::HesitationFrequency),
            capitalization_rate: metric(Metric::CapitalizationRate),
            punctuation_usage: metric(Metric::PunctuationUsage),
        }
    }
}

/// One row per distinct (file, model), in input order.
pub fn rows(datasets: &[Dataset], aggregator: &Aggregator) -> Vec<SummaryRow> {
    datasets
        .iter()
        .flat_map(|dataset| {
            dataset.models().into_iter().map(|model| {
                SummaryRow::resolve(&dataset.file, &dataset.language, model, aggregator)
            })
        })
        .collect()
}

pub fn write(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    let file = std::fs::File::create(path)
        .wrap_err_with(|| format!("failed to create summary: {:?}", path.display()))?;

    to_writer(file, rows).wrap_err_with(|| format!("failed to write summary: {:?}", path.display()))
}

pub fn to_writer<W: Write>(writer: W, rows: &[SummaryRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Four decimal places keep the CSV readable.
fn round(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ModelColumn;
    use normscope_core::aggregate::{TallyBuilder, TallyPolicy};
    use normscope_core::classifier::Features;
    use pretty_assertions::assert_eq;

    fn aggregator(texts: &[(&str, &str, &str)]) -> Aggregator {
        let mut builder = TallyBuilder::new(TallyPolicy::CountAll);
        for (language, model, text) in texts {
            if let Some(features) = Features::extract(text) {
                builder.record_features(language, model, &features);
            }
        }
        builder.finish()
    }

    #[test]
    fn resolves_observed_pair() {
        let aggregator = aggregator(&[
            ("fr", "whisper", "une hausse de 20 %"),
            ("fr", "whisper", "une hausse de 30 %"),
            ("fr", "whisper", "Une baisse de 5%"),
        ]);

        let row = SummaryRow::resolve("transcriptions_fr.csv", "fr", "whisper", &aggregator);

        assert_eq!(row.percent_format, Convention::SymbolSpace);
        assert_eq!(row.percent_format_share, 0.6667);
        assert_eq!(row.number_style, Convention::Digit);
        assert_eq!(row.hesitation_frequency, 0.0);
        assert_eq!(row.punctuation_usage, 0.0);
    }

    #[test]
    fn unobserved_pair_uses_defaults() {
        let row = SummaryRow::resolve("f.csv", "de", "canary", &aggregator(&[]));

        assert_eq!(row.currency_format, Convention::Word);
        assert_eq!(row.date_format, Convention::LiteralDate);
        assert_eq!(row.currency_format_share, 0.0);
        assert_eq!(row.capitalization_rate, 0.0);
    }

    #[test]
    fn one_row_per_file_and_model() {
        let column = |model: &str| ModelColumn {
            header: model.to_string(),
            model: model.to_string(),
            transcripts: Vec::new(),
        };
        let datasets = [Dataset {
            file: "transcriptions_es.csv".into(),
            language: "es".into(),
            columns: vec![column("whisper"), column("whisper"), column("canary")],
        }];

        let rows = rows(&datasets, &aggregator(&[]));
        let models: Vec<&str> = rows.iter().map(|r| r.model.as_str()).collect();

        assert_eq!(models, ["whisper", "canary"]);
    }

    #[test]
    fn writes_header_and_labels() {
        let row = SummaryRow::resolve("transcriptions_fr.csv", "fr", "whisper", &aggregator(&[]));

        let mut buffer = Vec::new();
        to_writer(&mut buffer, &[row]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some(
                "file,language,model,currency_format,percent_format,thousand_separator_format,\
                 unit_format,ordinal_style,number_style,date_format,currency_format_share,\
                 percent_format_share,thousand_separator_format_share,unit_format_share,\
                 ordinal_style_share,number_style_share,date_format_share,\
                 hesitation_frequency,capitalization_rate,punctuation_usage"
            )
        );
        assert_eq!(
            lines.next(),
            Some(
                "transcriptions_fr.csv,fr,whisper,word,symbol_no_space,dot,long,word,digit,\
                 dd_month_yyyy,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0"
            )
        );
    }
}
