//! Guide subcommand - render Markdown annotation guidelines.
//!
//! Each guideline tells annotators how to write transcripts so they match
//! the conventions a given model follows in a given language. Pairs never
//! observed are still rendered from the fallback chain.

use crate::analyze;
use crate::cli::InputArgs;
use crate::config::InputConfig;
use eyre::{Context, Result, bail};
use normscope_core::aggregate::{Aggregator, Level, Resolution};
use normscope_core::types::{Category, Convention, Metric};
use std::path::{Path, PathBuf};

/// CLI arguments for guideline rendering.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub input: InputArgs,

    /// Target language code
    #[arg(long, conflicts_with = "all", requires = "model")]
    pub lang: Option<String>,

    /// Target model identifier
    #[arg(long, conflicts_with = "all", requires = "lang")]
    pub model: Option<String>,

    /// Render every observed language for every registered model
    #[arg(long)]
    pub all: bool,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

/// Which guidelines to render.
#[derive(Debug, PartialEq, Eq)]
pub enum Target {
    Pair { language: String, model: String },
    All,
}

/// Resolved configuration for guideline rendering.
#[derive(Debug)]
pub struct Config {
    pub input: InputConfig,
    pub target: Target,
    pub output: PathBuf,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let target = match (args.lang, args.model, args.all) {
            (None, None, true) => Target::All,
            (Some(language), Some(model), false) => Target::Pair {
                language: language.to_lowercase(),
                model: model.to_lowercase(),
            },
            _ => bail!("pass --lang and --model together, or --all"),
        };

        Ok(Self {
            input: args.input.try_into()?,
            target,
            output: args.output,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let datasets = analyze::load_datasets(&config.input)?;
    let aggregator = analyze::aggregate(&datasets, config.input.policy);

    let pairs: Vec<(String, String)> = match config.target {
        Target::Pair { language, model } => vec![(language, model)],
        Target::All => aggregator
            .languages()
            .flat_map(|language| {
                config
                    .input
                    .registry
                    .ids()
                    .iter()
                    .map(move |model| (language.to_string(), model.clone()))
            })
            .collect(),
    };

    std::fs::create_dir_all(&config.output)
        .wrap_err_with(|| format!("failed to create {:?}", config.output.display()))?;

    for (language, model) in &pairs {
        let path = guideline_path(&config.output, language, model);
        tracing::info!(%language, %model, path = ?path.display(), "write guideline");

        std::fs::write(&path, render(language, model, &aggregator))
            .wrap_err_with(|| format!("failed to write guideline: {:?}", path.display()))?;
    }

    Ok(())
}

pub fn guideline_path(dir: &Path, language: &str, model: &str) -> PathBuf {
    dir.join(format!("guidelines_{language}_{model}.md"))
}

/// Render the guideline document for one (language, model) pair.
pub fn render(language: &str, model: &str, aggregator: &Aggregator) -> String {
    let resolved = Category::ALL.map(|c| aggregator.resolve_detailed(language, model, c));
    let get = |category: Category| resolved[category.index()];
    let language_name = language_name(language);
    let model_name = capitalize(model);

    let mut lines = vec![
        format!("# {language_name} Annotation Guidelines for {model_name}"),
        String::new(),
        "## 1. General Principles".to_string(),
        String::new(),
        "- Write what is said, without reformulating or correcting the speaker.".to_string(),
        "- Keep spoken contractions and repetitions as pronounced.".to_string(),
        "- Enclose personal data between `#`: my name is #Alice Martin#.".to_string(),
        "- Put non-speech sounds between `<>`: <laugh>, <noise>.".to_string(),
        String::new(),
        "## 2. Formatting Rules".to_string(),
        String::new(),
    ];

    lines.extend(Category::ALL.map(|category| {
        format!(
            "- **{}**: {}",
            heading(category),
            instruction(category, get(category).value)
        )
    }));

    let separator = get(Category::ThousandSeparatorFormat).value;
    lines.push(format!(
        "- **Digit grouping example**: {} (phone numbers: {})",
        grouping_example(separator, get(Category::NumberStyle).value),
        phone_example(separator)
    ));

    let metric = |m| aggregator.resolve_metric(language, model, m);
    lines.extend([
        String::new(),
        "## 3. Speaking Style".to_string(),
        String::new(),
        hesitation_rule(metric(Metric::HesitationFrequency)),
        capitalization_rule(metric(Metric::CapitalizationRate)),
        punctuation_rule(metric(Metric::PunctuationUsage)),
        String::new(),
        "## 4. Detection Confidence".to_string(),
        String::new(),
    ]);

    lines.extend(Category::ALL.map(|category| {
        format!(
            "- **{}**: {}",
            heading(category),
            confidence(get(category), &language_name, &model_name)
        )
    }));

    lines.join("\n") + "\n"
}

fn language_name(code: &str) -> String {
    match code {
        "fr" => "French".to_string(),
        "es" => "Spanish".to_string(),
        "pt" => "Portuguese".to_string(),
        "de" => "German".to_string(),
        "en" => "English".to_string(),
        "it" => "Italian".to_string(),
        other => other.to_uppercase(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn heading(category: Category) -> &'static str {
    match category {
        Category::CurrencyFormat => "Currency amounts",
        Category::PercentFormat => "Percentages",
        Category::ThousandSeparatorFormat => "Thousands separator",
        Category::UnitFormat => "Units",
        Category::OrdinalStyle => "Ordinal numbers",
        Category::NumberStyle => "Numbers",
        Category::DateFormat => "Dates",
    }
}

/// Annotator instruction for a resolved convention.
pub fn instruction(category: Category, value: Convention) -> &'static str {
    use Convention::*;

    match (category, value) {
        (Category::CurrencyFormat, Symbol) => "use the currency symbol: 20 € ✅, 20 euros ❌",
        (Category::CurrencyFormat, Word) => "write the currency name: 20 euros ✅, 20 € ❌",
        (Category::PercentFormat, SymbolSpace) => "symbol after a space: 20 % ✅, 20% ❌",
        (Category::PercentFormat, SymbolNoSpace) => "symbol attached to the number: 20% ✅, 20 % ❌",
        (Category::PercentFormat, Word) => "write the word: 20 percent ✅, 20% ❌",
        (Category::ThousandSeparatorFormat, Space) => "group digits with a space: 10 000 ✅, 10.000 ❌",
        (Category::ThousandSeparatorFormat, Dot) => "group digits with a dot: 10.000 ✅, 10 000 ❌",
        (Category::ThousandSeparatorFormat, Comma) => "group digits with a comma: 10,000 ✅, 10 000 ❌",
        (Category::UnitFormat, Short) => "abbreviate units: 10 km ✅, 10 kilometers ❌",
        (Category::UnitFormat, Long) => "spell units out: 10 kilometers ✅, 10 km ❌",
        (Category::OrdinalStyle, DigitSuffix) => "digits with a suffix: 1st ✅, first ❌",
        (Category::OrdinalStyle, Word) => "write ordinals in words: first ✅, 1st ❌",
        (Category::NumberStyle, Digit) => "write numbers in digits: 42 ✅, forty-two ❌",
        (Category::NumberStyle, Word) => "write numbers in words: forty-two ✅, 42 ❌",
        (Category::DateFormat, NumericDate) => "numeric dates: 25/12/2023 ✅, 25 December 2023 ❌",
        (Category::DateFormat, IsoDate) => "ISO dates: 2023-12-25 ✅, 25/12/2023 ❌",
        (Category::DateFormat, LiteralDate) => "spell the month: 25 December 2023 ✅, 25/12/2023 ❌",
        (_, NotDetected) => "no preference observed, write it as spoken",
        _ => "write it as spoken",
    }
}

fn separator_str(separator: Convention) -> &'static str {
    match separator {
        Convention::Space => " ",
        Convention::Dot => ".",
        Convention::Comma => ",",
        _ => "",
    }
}

fn grouping_example(separator: Convention, number_style: Convention) -> String {
    if number_style == Convention::Word {
        return "numbers are written in words".to_string();
    }
    format!("1{0}234{0}567", separator_str(separator))
}

fn phone_example(separator: Convention) -> String {
    let separator = match separator {
        Convention::NotDetected => " ",
        other => separator_str(other),
    };
    ["06", "12", "34", "56", "78"].join(separator)
}

fn hesitation_rule(frequency: f64) -> String {
    let verdict = if frequency >= 0.1 {
        "transcribe hesitations between `<>`: I love <euh> sandwiches"
    } else {
        "leave hesitations out"
    };
    format!("- **Hesitations** ({}): {verdict}", percent(frequency))
}

fn capitalization_rule(rate: f64) -> String {
    let verdict = if rate >= 0.05 {
        "capitalize sentence starts and proper nouns"
    } else {
        "write in lowercase, except proper nouns"
    };
    format!("- **Capitalization** ({} of letters): {verdict}", percent(rate))
}

fn punctuation_rule(usage: f64) -> String {
    let verdict = if usage >= 0.5 {
        "punctuate sentences"
    } else {
        "no punctuation: ? ! : . , ; - _"
    };
    format!("- **Punctuation** ({} of transcripts): {verdict}", percent(usage))
}

fn confidence(resolution: Resolution, language_name: &str, model_name: &str) -> String {
    if resolution.value == Convention::NotDetected {
        return format!(
            "nothing detected ({})",
            source(resolution.level, language_name, model_name)
        );
    }
    match resolution.level {
        Level::Default => "default value, no observation".to_string(),
        level => format!(
            "{} ({})",
            percent(resolution.share),
            source(level, language_name, model_name)
        ),
    }
}

fn source(level: Level, language_name: &str, model_name: &str) -> String {
    match level {
        Level::Pair => format!("based on {language_name}/{model_name} data"),
        Level::Language => format!("based on the {language_name} majority"),
        Level::Model => format!("based on the {model_name} majority"),
        Level::Global => "based on the global majority".to_string(),
        Level::Default => "default value".to_string(),
    }
}

fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
